//! Health Handler

use axum::Json;

use crate::infrastructure::http::dto::HealthResponse;

/// 健康检查，不依赖配置，没有副作用
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
