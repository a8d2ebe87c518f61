//! Cue Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CueError {
    #[error("Invalid {field}: value is empty")]
    EmptySegment { field: &'static str },

    #[error("Invalid {field}: character {found:?} is not allowed in an OSC address segment")]
    ForbiddenCharacter { field: &'static str, found: char },
}
