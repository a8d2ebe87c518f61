//! Command Handlers 实现

mod cue_handlers;

pub use cue_handlers::*;
