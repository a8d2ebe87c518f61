//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Cue Context: QLab cue 寻址与地址校验

pub mod cue;
