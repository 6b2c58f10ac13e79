mod parse;
mod prompt;

pub use parse::extract_object;
pub use prompt::build_prompt;

use crate::{Result, llm::ProviderClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// The four-field ruling produced for one item, either parsed from the
/// provider reply or substituted by [`TsaRuling::fallback`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsaRuling {
    pub carry_on_allowed: bool,
    pub checked_baggage_allowed: bool,
    pub description: String,
    pub restrictions: String,
}

impl TsaRuling {
    /// Conservative result used when the provider reply could not be
    /// interpreted: disallow both and point the traveler at TSA.
    pub fn fallback(item: &str) -> Self {
        Self {
            carry_on_allowed: false,
            checked_baggage_allowed: false,
            description: format!("Unable to determine rules for {item}"),
            restrictions: "Please check with TSA directly for this item".to_string(),
        }
    }
}

/// Orchestrates one lookup: build the prompt, ask the provider, interpret
/// the reply. Holds no per-request state.
pub struct ItemChecker {
    provider: Arc<dyn ProviderClient>,
}

impl ItemChecker {
    pub fn new(provider: Arc<dyn ProviderClient>) -> Self {
        Self { provider }
    }

    pub async fn check(&self, item: &str) -> Result<TsaRuling> {
        let prompt = build_prompt(item);
        let reply = self.provider.complete(&prompt).await?;

        match extract_object(&reply) {
            Some(value) => {
                debug!(item, "Parsed ruling from provider reply");
                // Trusted as-is once an object was extracted: a missing key
                // or mistyped field is a hard error, not a soft failure.
                Ok(serde_json::from_value(value)?)
            }
            None => {
                warn!(item, reply = %reply, "Failed to parse AI response, using fallback");
                Ok(TsaRuling::fallback(item))
            }
        }
    }
}
