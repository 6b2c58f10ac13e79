use crate::checker::TsaRuling;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    pub item: String,
}

#[derive(Debug, Serialize)]
pub struct TsaResponse {
    pub item: String,
    pub carry_on_allowed: bool,
    pub checked_baggage_allowed: bool,
    pub description: String,
    pub restrictions: String,
}

impl TsaResponse {
    pub fn new(item: String, ruling: TsaRuling) -> Self {
        Self {
            item,
            carry_on_allowed: ruling.carry_on_allowed,
            checked_baggage_allowed: ruling.checked_baggage_allowed,
            description: ruling.description,
            restrictions: ruling.restrictions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub api_key_configured: bool,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
