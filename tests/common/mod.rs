#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use tsa_item_checker::{
    Result,
    checker::ItemChecker,
    config::LlmConfig,
    llm::{OpenRouterClient, ProviderClient},
    server::{AppState, router},
};

/// Provider double that fails the test if the service ever reaches the
/// network path. Used to prove validation and credential checks run first.
pub struct PanicProvider;

#[async_trait]
impl ProviderClient for PanicProvider {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        panic!("provider must not be called for this request");
    }
}

pub fn test_llm_config(base_url: &str, api_key: Option<&str>, timeout_secs: u64) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: api_key.map(String::from),
        model: "anthropic/claude-3.5-sonnet".to_string(),
        max_tokens: 500,
        temperature: 0.1,
        timeout_secs,
    }
}

/// App wired to a real `OpenRouterClient` pointed at `base_url` (a wiremock
/// server in practice).
pub fn app_backed_by(base_url: &str, api_key: Option<&str>, timeout_secs: u64) -> Router {
    let api_key_configured = api_key.is_some();
    let provider =
        OpenRouterClient::new(test_llm_config(base_url, api_key, timeout_secs)).unwrap();
    app_with_provider(Arc::new(provider), api_key_configured)
}

pub fn app_with_provider(provider: Arc<dyn ProviderClient>, api_key_configured: bool) -> Router {
    router(AppState {
        checker: Arc::new(ItemChecker::new(provider)),
        api_key_configured,
    })
}

/// Chat-completion body wrapping `content` as the single choice, in the
/// shape OpenRouter returns.
pub fn completion_reply(content: &str) -> Value {
    json!({
        "id": "gen-test",
        "model": "anthropic/claude-3.5-sonnet",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ]
    })
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}
