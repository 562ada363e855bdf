use super::state::AppState;
use crate::provider::{build_answer, build_system_prompt, CreateCallRequest, ProviderResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    /// Typed question (the canned answer does not depend on it yet)
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

/// Forward a provider JSON body with the given status
fn forward_json(status: StatusCode, resp: &ProviderResponse) -> Response {
    match serde_json::from_str::<serde_json::Value>(&resp.body) {
        Ok(body) => (status, Json(body)).into_response(),
        Err(e) => {
            error!("Provider returned invalid JSON: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Invalid provider response: {}", e),
            )
        }
    }
}

/// Provider status as an axum status, falling back to 502 for nonsense codes
fn upstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /start_call
/// Create a provider call for the assistant and return its descriptor
pub async fn start_call(State(state): State<AppState>) -> Response {
    if !state.provider.has_api_key() {
        warn!("Call requested but no provider API key is configured");
        return error_response(
            StatusCode::UNAUTHORIZED,
            "Ultravox API key is not configured. Please set provider.api_key in the configuration."
                .to_string(),
        );
    }

    let system_prompt = {
        let context = state.context.read().await;
        build_system_prompt(&state.assistant, &context)
    };

    let request = CreateCallRequest {
        system_prompt,
        voice: state.voice.clone(),
        selected_tools: Vec::new(),
    };

    match state.provider.create_call(&request).await {
        Ok(resp) if resp.status == 201 => {
            info!("Provider call created");
            forward_json(StatusCode::OK, &resp)
        }
        Ok(resp) => {
            error!("Provider rejected call creation: {}", resp.status);
            error_response(
                upstream_status(resp.status),
                format!("Ultravox API error: {} - {}", resp.status, resp.detail()),
            )
        }
        Err(e) => {
            error!("Failed to create call: {:#}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
        }
    }
}

/// GET /api/ultravox-voices
/// List the voices the provider offers
pub async fn list_voices(State(state): State<AppState>) -> Response {
    if !state.provider.has_api_key() {
        return error_response(
            StatusCode::UNAUTHORIZED,
            "Ultravox API key is not configured.".to_string(),
        );
    }

    match state.provider.list_voices().await {
        Ok(resp) if resp.status == 200 => forward_json(StatusCode::OK, &resp),
        Ok(resp) => error_response(
            upstream_status(resp.status),
            format!("Ultravox API error: {} - {}", resp.status, resp.body),
        ),
        Err(e) => {
            error!("Failed to list voices: {:#}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
        }
    }
}

/// POST /api/cynthia-answer
/// Answer a typed question from the current records context
pub async fn answer_question(
    State(state): State<AppState>,
    Json(req): Json<AnswerRequest>,
) -> impl IntoResponse {
    info!("Answering typed question ({} chars)", req.question.len());

    let answer = {
        let context = state.context.read().await;
        build_answer(&state.assistant, &context)
    };

    (StatusCode::OK, Json(AnswerResponse { answer }))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
