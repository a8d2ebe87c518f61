//! Recording OSC Sender - 用于测试的 OSC 发送器
//!
//! 不发送任何数据报，只在内存中记录消息

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{OscMessage, OscSendError, OscSenderPort};

/// Recording OSC Sender
///
/// 可配置为在某个地址上模拟发送失败（失败的消息不会被记录）
#[derive(Debug, Default)]
pub struct RecordingOscSender {
    sent: Mutex<Vec<OscMessage>>,
    fail_address: Option<String>,
}

impl RecordingOscSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发送到 `address` 时返回传输错误
    pub fn failing_on(address: impl Into<String>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_address: Some(address.into()),
        }
    }

    /// 已成功"发送"的消息
    pub fn sent(&self) -> Vec<OscMessage> {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl OscSenderPort for RecordingOscSender {
    async fn send(&self, message: OscMessage) -> Result<(), OscSendError> {
        if self.fail_address.as_deref() == Some(message.address.as_str()) {
            return Err(OscSendError::Transport {
                address: message.address,
                reason: "simulated transport failure".to_string(),
            });
        }

        tracing::debug!(address = %message.address, "RecordingOscSender: recorded message");
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message);
        Ok(())
    }
}
