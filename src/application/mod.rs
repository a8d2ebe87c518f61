//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（OscSender）
//! - commands: 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{TriggerCueHandler, TriggerCueResponse},
    TriggerCue,
};

pub use error::ApplicationError;

pub use ports::{OscArg, OscMessage, OscSendError, OscSenderPort};
