// File: src/error.rs
// Purpose: Errors that abort a generation run

use thiserror::Error;

/// Fatal generation failures
///
/// Any of these aborts the run before a unit is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// Neither the options nor the host supplied a namespace
    #[error("no namespace configured and the host provided no fallback identity")]
    MissingNamespace,
}

pub type Result<T> = std::result::Result<T, GenerationError>;
