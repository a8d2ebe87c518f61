//! Cue Context - Cue 限界上下文
//!
//! 职责:
//! - cue 编号与动作的值对象
//! - OSC 地址构建（`/cue/{cue_id}/{action}`）
//! - 地址校验策略

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::CueCommand;
pub use errors::CueError;
pub use value_objects::{AddressPolicy, CueAction, CueId};
