//! cue-bridge - Webhook 到 QLab OSC 的桥接服务
//!
//! 接收 HTTP webhook，转换成一条 OSC 消息通过 UDP 发给 QLab。
//!
//! 领域层 (domain/):
//! - Cue Context: cue 编号、动作、地址构建与校验
//!
//! 应用层 (application/):
//! - Ports: OscSenderPort
//! - Commands: TriggerCue 及其处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: `/`、`/health`、`/webhook`
//! - Adapters: UDP OSC 发送器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
