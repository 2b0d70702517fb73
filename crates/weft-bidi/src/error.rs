//! Error types for the run engine.

use thiserror::Error;

/// Result type for fallible run-engine operations.
pub type Result<T> = std::result::Result<T, BidiRunError>;

/// Contract violations surfaced by the run engine.
///
/// Out-of-range layout bounds are not errors; they are clamped (line
/// breakers over-estimate ranges on purpose). Only a caller-provided buffer
/// whose shape cannot hold the declared content fails, and it fails before
/// any access.
#[derive(Error, Debug)]
pub enum BidiRunError {
    /// A caller-owned level buffer cannot hold one level per character.
    #[error("level buffer too short: need {needed} levels, have {have}")]
    LevelBufferTooShort { needed: usize, have: usize },
}
