use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::llm::LlmError;

/// Request-level failures. Every variant renders as
/// `{"success": false, "error": "..."}` with status 200.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unknown command")]
    UnknownCommand,
    #[error("{0}")]
    MissingParameters(&'static str),
    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: LlmError,
    },
}

impl ApiError {
    pub fn upstream(message: &'static str) -> impl FnOnce(LlmError) -> Self {
        move |source| ApiError::Upstream { message, source }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Upstream { message, source } => {
                error!(error = %source, "{message}");
            }
            other => warn!(error = %other, "Rejected request"),
        }

        Json(ErrorBody {
            success: false,
            error: self.to_string(),
        })
        .into_response()
    }
}
