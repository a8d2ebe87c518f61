//! Service Info Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{
    EndpointsInfo, QlabSettingsInfo, ServiceInfoResponse, WebhookFormatInfo,
};
use crate::infrastructure::http::state::AppState;

/// 服务说明和当前 QLab 目标
pub async fn service_info(State(state): State<Arc<AppState>>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "Webhook to OSC Bridge for QLab",
        endpoints: EndpointsInfo {
            post_webhook: "Send webhook data to trigger QLab cues",
            get_webhook: "Trigger QLab cues with query parameters",
            health: "Health check",
            root: "This information",
        },
        webhook_format: WebhookFormatInfo {
            cue_id: format!(
                "Cue number to trigger (default: {})",
                state.webhook.default_cue_id
            ),
            action: format!(
                "Action to perform (default: {})",
                state.webhook.default_action
            ),
        },
        qlab_settings: QlabSettingsInfo {
            host: state.osc.host.clone(),
            port: state.osc.port,
            authentication: if state.osc.auth_enabled() {
                "enabled"
            } else {
                "disabled"
            },
        },
    })
}
