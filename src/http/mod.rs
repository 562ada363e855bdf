//! HTTP API for the voice assistant widget
//!
//! This module provides the call-initiation backend:
//! - POST /start_call - Create a provider call and return its join descriptor
//! - GET /api/ultravox-voices - List provider voices
//! - POST /api/cynthia-answer - Answer a typed question from the records context
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::{AnswerRequest, AnswerResponse, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
