//! OSC Sender Port - OSC 数据报发送抽象
//!
//! 定义向 QLab 发送 OSC 消息的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// OSC 发送错误
#[derive(Debug, Error)]
pub enum OscSendError {
    #[error("Failed to encode OSC message {address}: {reason}")]
    Encode { address: String, reason: String },

    #[error("Failed to send OSC message {address}: {reason}")]
    Transport { address: String, reason: String },
}

/// OSC 参数
#[derive(Debug, Clone, PartialEq)]
pub enum OscArg {
    Str(String),
    Int(i32),
    Float(f32),
    Bool(bool),
}

impl From<&str> for OscArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for OscArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i32> for OscArg {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for OscArg {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for OscArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// 一条出站 OSC 消息
#[derive(Debug, Clone, PartialEq)]
pub struct OscMessage {
    /// 地址，如 `/cue/1/start`
    pub address: String,
    /// 位置参数
    pub args: Vec<OscArg>,
}

impl OscMessage {
    /// 无参数消息
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: impl Into<OscArg>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// OSC Sender Port
///
/// 发送即返回，不等待对端应答。`Ok(())` 只表示本地发送成功，
/// 不代表 QLab 已接受该消息。
#[async_trait]
pub trait OscSenderPort: Send + Sync {
    /// 发送一条 OSC 消息（一个 UDP 数据报）
    async fn send(&self, message: OscMessage) -> Result<(), OscSendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_builder() {
        let message = OscMessage::new("/connect").with_arg("4012");
        assert_eq!(message.address, "/connect");
        assert_eq!(message.args, vec![OscArg::Str("4012".to_string())]);
    }

    #[test]
    fn test_message_without_args() {
        let message = OscMessage::new("/cue/1/start");
        assert!(message.args.is_empty());
    }
}
