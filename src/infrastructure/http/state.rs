//! Application State
//!
//! 启动时构建一次，之后只读

use std::sync::Arc;

use crate::application::{OscSenderPort, TriggerCueHandler};
use crate::config::{AppConfig, OscConfig, WebhookConfig};

/// 应用状态
pub struct AppState {
    pub osc: OscConfig,
    pub webhook: WebhookConfig,
    pub trigger_cue_handler: TriggerCueHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(config: &AppConfig, sender: Arc<dyn OscSenderPort>) -> Self {
        Self {
            osc: config.osc.clone(),
            webhook: config.webhook.clone(),
            trigger_cue_handler: TriggerCueHandler::new(
                sender,
                config.osc.password().map(str::to_string),
                config.osc.connect_address.clone(),
                config.webhook.address_policy,
            ),
        }
    }
}
