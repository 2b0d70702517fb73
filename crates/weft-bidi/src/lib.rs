//! weft-bidi: visual ordering of bidirectional text runs.
//!
//! Given the per-character embedding levels produced by a Unicode BiDi
//! engine, this crate segments a laid-out range into maximal equal-level
//! runs and applies the reordering rule (UAX #9 rule L2) to derive the
//! order in which those runs appear on screen:
//! - [`RunFactory`] does the segmentation and reversal, reusing its scratch
//!   buffers across the many lines of one paragraph.
//! - [`RunLayout`] is the immutable result: run boundaries, the
//!   visual-to-logical run mapping, and a reversal flag per run.
//! - [`levels`] adapts `unicode-bidi` as the level producer for callers
//!   that do not bring their own.
//!
//! The engine never touches characters; it describes an ordering that the
//! painting code applies.

pub mod error;
pub mod factory;
pub mod layout;
pub mod levels;

mod bits;

pub use error::{BidiRunError, Result};
pub use factory::RunFactory;
pub use layout::RunLayout;
pub use levels::{BaseDirection, Direction, ResolvedLevels, resolve_levels, resolve_levels_into};
