use super::types::{ErrorResponse, HealthResponse, ItemRequest, RootResponse, TsaResponse};
use crate::{Error, checker::ItemChecker};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

pub const SERVICE_NAME: &str = "TSA Item Checker API";

#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<ItemChecker>,
    /// Presence of the provider credential, for /health. The value itself
    /// never leaves the provider client.
    pub api_key_configured: bool,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("{SERVICE_NAME} is running!"),
        status: "healthy".to_string(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        api_key_configured: state.api_key_configured,
        service: SERVICE_NAME.to_string(),
    })
}

pub async fn check_item(
    State(state): State<AppState>,
    Json(request): Json<ItemRequest>,
) -> Result<Json<TsaResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Validation runs before any outbound call.
    if request.item.trim().is_empty() {
        return Err(error_response(&Error::EmptyItem));
    }

    info!(item = %request.item, "Received check-item request");

    match state.checker.check(&request.item).await {
        Ok(ruling) => Ok(Json(TsaResponse::new(request.item, ruling))),
        Err(e) => {
            error!(item = %request.item, error = %e, "Error processing item");
            Err(error_response(&e))
        }
    }
}

fn error_response(error: &Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        error.status_code(),
        Json(ErrorResponse {
            error: error.public_message().to_string(),
        }),
    )
}
