mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::warn;

/// Builds the process-wide configuration from environment variables.
/// The provider credential is read once here and never re-read.
pub fn load() -> Result<Config> {
    let api_key = env::var("OPENROUTER_API_KEY").ok().filter(|k| !k.is_empty());

    if api_key.is_none() {
        warn!("OPENROUTER_API_KEY not found in environment variables");
    }

    let port = match env::var("PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{raw}'")))?,
        Err(_) => types::default_port(),
    };

    let host = env::var("HOST").unwrap_or_else(|_| types::default_host());

    Ok(Config {
        llm: LlmConfig {
            base_url: types::default_base_url(),
            api_key,
            model: types::default_model(),
            max_tokens: types::default_max_tokens(),
            temperature: types::default_temperature(),
            timeout_secs: types::default_timeout_secs(),
        },
        server: ServerConfig {
            host,
            port,
            logs: LogsConfig::default(),
        },
    })
}
