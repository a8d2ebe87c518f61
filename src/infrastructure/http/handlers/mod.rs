//! HTTP Handlers

mod health;
mod info;
mod webhook;

pub use health::*;
pub use info::*;
pub use webhook::*;
