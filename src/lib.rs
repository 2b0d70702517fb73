//! Weft: directional run layout for text rendering pipelines.
//!
//! The root crate fronts the engine in `weft-bidi`; see that crate for the
//! run segmentation and visual-ordering machinery.

pub use weft_bidi::{
    BaseDirection, BidiRunError, Direction, ResolvedLevels, Result, RunFactory, RunLayout,
    resolve_levels, resolve_levels_into,
};
