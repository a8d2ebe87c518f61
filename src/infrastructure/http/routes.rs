//! HTTP Routes
//!
//! API Endpoints:
//! - /          GET        服务说明与 QLab 目标
//! - /health    GET        健康检查
//! - /webhook   GET|POST   触发 QLab cue（查询参数或 JSON 请求体）

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health))
        .route(
            "/webhook",
            get(handlers::webhook_get).post(handlers::webhook_post),
        )
}
