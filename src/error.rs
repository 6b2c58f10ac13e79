use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Item name cannot be empty")]
    EmptyItem,

    #[error("OpenRouter API key not configured")]
    ApiKeyMissing,

    #[error("Request to AI service timed out")]
    UpstreamTimeout,

    #[error("AI service returned status {status}")]
    Upstream { status: u16 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] axum::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status returned to the caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyItem => StatusCode::BAD_REQUEST,
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the caller. Upstream detail and transport
    /// internals stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::EmptyItem => "Item name cannot be empty",
            Self::ApiKeyMissing => "OpenRouter API key not configured",
            Self::UpstreamTimeout => "Request to AI service timed out",
            Self::Upstream { .. } => "Error communicating with AI service",
            _ => "Internal server error",
        }
    }
}
