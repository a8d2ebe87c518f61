//! HTTP Error Handling
//!
//! 所有失败都返回 500 和 `{"status": "error", "message": ...}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::ApplicationError;
use crate::infrastructure::http::dto::WebhookResponse;

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求体无法解析，消息原样返回给调用方
    BadPayload(String),
    /// 应用层错误
    Application(ApplicationError),
}

impl ApiError {
    pub fn message(&self) -> String {
        match self {
            ApiError::BadPayload(msg) => msg.clone(),
            ApiError::Application(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadPayload(msg) => {
                tracing::warn!(error = %msg, "Error processing webhook: bad payload");
            }
            ApiError::Application(ApplicationError::InvalidAddress(e)) => {
                tracing::warn!(error = %e, "Error processing webhook: address rejected");
            }
            ApiError::Application(e) => {
                let cause = std::error::Error::source(e)
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                tracing::error!(error = %e, cause = %cause, "Error processing webhook");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(WebhookResponse::error(self.message())),
        )
            .into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        ApiError::Application(e)
    }
}
