//! HTTP API数据模型

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskwise_core::api::{AnalyzeError, CompletionError};

// ============= Analyze =============

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub assignments: Vec<Value>,
}

// ============= Generate Schedule =============

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub reply: String,
}

// ============= Health =============

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub uptime_seconds: f64,
    pub timestamp: String,
}

// ============= Error Handling =============

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Detail stays in the server log; callers only see a short message.
#[derive(Debug)]
pub enum HttpServerError {
    InvalidRequest(String),
    Analyze(AnalyzeError),
    Schedule(CompletionError),
}

impl From<AnalyzeError> for HttpServerError {
    fn from(e: AnalyzeError) -> Self {
        Self::Analyze(e)
    }
}

impl From<CompletionError> for HttpServerError {
    fn from(e: CompletionError) -> Self {
        Self::Schedule(e)
    }
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Analyze(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                e.public_message().to_string(),
            ),
            Self::Schedule(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Completion request failed.".to_string(),
            ),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
