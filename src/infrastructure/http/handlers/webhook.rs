//! Webhook Handlers
//!
//! GET 从查询参数取字段，POST 从 JSON 请求体取字段，之后走同一条流程

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query, State},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::infrastructure::http::dto::{WebhookFields, WebhookResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /webhook
pub async fn webhook_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<WebhookResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let fields = WebhookFields::from_query(params);

    dispatch(&state, fields)
        .instrument(webhook_span(request_id, "GET"))
        .await
}

/// POST /webhook
///
/// 请求体读取失败（如超过大小上限）同样按 500 JSON 错误返回
pub async fn webhook_post(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<WebhookResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    async {
        let body = body.map_err(|rejection| ApiError::BadPayload(rejection.body_text()))?;
        let fields = WebhookFields::from_json_body(&body)?;
        dispatch(&state, fields).await
    }
    .instrument(webhook_span(request_id, "POST"))
    .await
}

/// 每个 webhook 请求一个 span，`address` 在地址构建后由 TriggerCueHandler 记录
fn webhook_span(request_id: Uuid, method: &'static str) -> tracing::Span {
    tracing::info_span!(
        "webhook",
        %request_id,
        method,
        address = tracing::field::Empty
    )
}

async fn dispatch(
    state: &AppState,
    fields: WebhookFields,
) -> Result<Json<WebhookResponse>, ApiError> {
    tracing::info!(cue_id = ?fields.cue_id, action = ?fields.action, "Received webhook");

    let command = fields.into_command(&state.webhook);
    let result = state.trigger_cue_handler.handle(command).await?;

    Ok(Json(WebhookResponse::success(result)))
}
