//! Cue Command Handlers

use std::sync::Arc;

use crate::application::commands::TriggerCue;
use crate::application::error::ApplicationError;
use crate::application::ports::{OscMessage, OscSenderPort};
use crate::domain::cue::{AddressPolicy, CueAction, CueCommand, CueId};

// ============================================================================
// TriggerCue
// ============================================================================

/// 触发 cue 响应
#[derive(Debug, Clone)]
pub struct TriggerCueResponse {
    pub cue_id: String,
    pub action: String,
    /// 实际发送的 OSC 地址
    pub address: String,
}

/// TriggerCue Handler
///
/// 流程：构建地址 → 认证（若配置了密码）→ 发送命令。
/// 每个请求只尝试一次，不重试。
pub struct TriggerCueHandler {
    sender: Arc<dyn OscSenderPort>,
    password: Option<String>,
    connect_address: String,
    policy: AddressPolicy,
}

impl TriggerCueHandler {
    pub fn new(
        sender: Arc<dyn OscSenderPort>,
        password: Option<String>,
        connect_address: impl Into<String>,
        policy: AddressPolicy,
    ) -> Self {
        Self {
            sender,
            password: password.filter(|p| !p.is_empty()),
            connect_address: connect_address.into(),
            policy,
        }
    }

    pub fn auth_enabled(&self) -> bool {
        self.password.is_some()
    }

    pub async fn handle(&self, command: TriggerCue) -> Result<TriggerCueResponse, ApplicationError> {
        let cue = CueCommand::new(
            CueId::new(command.cue_id),
            CueAction::new(command.action),
            self.policy,
        )?;
        let address = cue.address();
        tracing::Span::current().record("address", address.as_str());

        self.authenticate().await?;

        self.sender
            .send(OscMessage::new(address.clone()))
            .await
            .map_err(ApplicationError::SendFailed)?;

        tracing::info!(
            cue_id = %cue.cue_id(),
            action = %cue.action(),
            address = %address,
            "Cue triggered"
        );

        Ok(TriggerCueResponse {
            cue_id: cue.cue_id().to_string(),
            action: cue.action().to_string(),
            address,
        })
    }

    /// 发送认证消息
    ///
    /// QLab 不会回执，这里只能确认本地发送成功
    async fn authenticate(&self) -> Result<(), ApplicationError> {
        let Some(password) = &self.password else {
            tracing::debug!("No password set, skipping authentication");
            return Ok(());
        };

        self.sender
            .send(OscMessage::new(self.connect_address.clone()).with_arg(password.as_str()))
            .await
            .map_err(ApplicationError::AuthenticationFailed)?;

        tracing::debug!("Authentication sent to QLab");
        Ok(())
    }
}
