//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::OscSendError;
use crate::domain::cue::CueError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 地址校验失败（仅 strict 策略）
    #[error("Invalid OSC address: {0}")]
    InvalidAddress(#[from] CueError),

    /// 认证消息发送失败
    #[error("Failed to authenticate with QLab")]
    AuthenticationFailed(#[source] OscSendError),

    /// 命令消息发送失败
    #[error("Failed to send OSC message to QLab")]
    SendFailed(#[source] OscSendError),
}
