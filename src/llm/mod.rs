mod client;
mod types;

pub use client::{OpenRouterClient, ProviderClient};
pub use types::*;
