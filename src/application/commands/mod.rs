//! 应用层 - 命令
//!
//! 每个 webhook 请求对应一个命令

mod cue_commands;

pub mod handlers;

pub use cue_commands::*;
