//! Embedding-level resolution via `unicode-bidi`.
//!
//! The run engine consumes levels, it never computes them. This module is
//! the adapter over the producer: it runs the Unicode BiDi algorithm
//! (UAX #9) through `unicode-bidi` and converts the result into the dense
//! per-character level array that [`RunFactory`] expects, together with the
//! resolved primary direction of the paragraph.
//!
//! [`RunFactory`]: crate::factory::RunFactory

use unicode_bidi::{BidiInfo, LTR_LEVEL, Level, RTL_LEVEL};

use crate::error::{BidiRunError, Result};

/// Base direction hint for paragraph analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseDirection {
    /// Detect paragraph base direction from text (first strong char).
    Auto,
    /// Force overall left-to-right base direction.
    Ltr,
    /// Force overall right-to-left base direction.
    Rtl,
}

impl BaseDirection {
    fn to_level(self) -> Option<Level> {
        match self {
            BaseDirection::Auto => None,
            BaseDirection::Ltr => Some(LTR_LEVEL),
            BaseDirection::Rtl => Some(RTL_LEVEL),
        }
    }
}

/// Resolved primary direction of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Ltr,
    Rtl,
}

/// Per-character embedding levels for a text, plus its resolved direction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedLevels {
    /// Primary direction of the (first) paragraph.
    pub direction: Direction,
    /// One level per Unicode scalar value, in logical order.
    pub levels: Vec<u8>,
}

/// Resolve embedding levels for `text` into a fresh buffer.
///
/// Levels are per character (Unicode scalar value), index-aligned with the
/// positions the run factory consumes. For multi-paragraph text the levels
/// still cover every character; the reported direction is the first
/// paragraph's.
pub fn resolve_levels(text: &str, base: BaseDirection) -> ResolvedLevels {
    let info = BidiInfo::new(text, base.to_level());
    // `unicode-bidi` stores one level per byte, repeated across a scalar's
    // bytes; sampling the first byte gives the per-character level.
    let levels = text
        .char_indices()
        .map(|(byte_idx, _)| info.levels[byte_idx].number())
        .collect();
    ResolvedLevels {
        direction: primary_direction(&info),
        levels,
    }
}

/// Resolve embedding levels for `text` into a caller-owned buffer.
///
/// This is the buffer-reusing variant for callers that keep one
/// paragraph-wide scratch array across many resolutions. `out` must hold at
/// least one slot per character of `text`; a shorter buffer is a contract
/// violation reported as [`BidiRunError::LevelBufferTooShort`] before
/// anything is written. Slots past the text are left untouched.
pub fn resolve_levels_into(text: &str, base: BaseDirection, out: &mut [u8]) -> Result<Direction> {
    let needed = text.chars().count();
    if out.len() < needed {
        return Err(BidiRunError::LevelBufferTooShort {
            needed,
            have: out.len(),
        });
    }
    let info = BidiInfo::new(text, base.to_level());
    for (slot, (byte_idx, _)) in out.iter_mut().zip(text.char_indices()) {
        *slot = info.levels[byte_idx].number();
    }
    Ok(primary_direction(&info))
}

fn primary_direction(info: &BidiInfo) -> Direction {
    let rtl = info
        .paragraphs
        .first()
        .is_some_and(|para| para.level.is_rtl());
    if rtl { Direction::Rtl } else { Direction::Ltr }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::RunFactory;

    #[test]
    fn pure_ltr_text_has_zero_levels() {
        let resolved = resolve_levels("hello world", BaseDirection::Auto);
        assert_eq!(resolved.direction, Direction::Ltr);
        assert_eq!(resolved.levels.len(), "hello world".chars().count());
        assert!(resolved.levels.iter().all(|&level| level == 0));
    }

    #[test]
    fn hebrew_text_resolves_rtl() {
        let resolved = resolve_levels("שלום", BaseDirection::Auto);
        assert_eq!(resolved.direction, Direction::Rtl);
        assert_eq!(resolved.levels.len(), 4);
        assert!(resolved.levels.iter().all(|&level| level & 1 == 1));
    }

    #[test]
    fn levels_are_per_character_not_per_byte() {
        // Hebrew letters are two UTF-8 bytes each.
        let text = "abc אבג";
        let resolved = resolve_levels(text, BaseDirection::Ltr);
        assert_eq!(resolved.levels.len(), text.chars().count());
        assert!(resolved.levels.iter().any(|&level| level & 1 == 1));
    }

    #[test]
    fn forced_base_direction_overrides_detection() {
        let resolved = resolve_levels("שלום", BaseDirection::Ltr);
        assert_eq!(resolved.direction, Direction::Ltr);
        assert!(resolved.levels.iter().all(|&level| level & 1 == 1));
    }

    #[test]
    fn empty_text_resolves_to_nothing() {
        let resolved = resolve_levels("", BaseDirection::Auto);
        assert_eq!(resolved.direction, Direction::Ltr);
        assert!(resolved.levels.is_empty());
    }

    #[test]
    fn into_buffer_errors_when_too_short() {
        let mut out = [0u8; 3];
        let err = resolve_levels_into("abcd", BaseDirection::Auto, &mut out).unwrap_err();
        assert!(matches!(
            err,
            BidiRunError::LevelBufferTooShort { needed: 4, have: 3 }
        ));
    }

    #[test]
    fn into_buffer_reuses_wider_scratch() {
        let text = "abc אבג";
        let mut out = [7u8; 16];
        let direction = resolve_levels_into(text, BaseDirection::Auto, &mut out).unwrap();
        assert_eq!(direction, Direction::Ltr);

        let fresh = resolve_levels(text, BaseDirection::Auto);
        assert_eq!(&out[..fresh.levels.len()], &fresh.levels[..]);
        // Slots past the text are left alone.
        assert_eq!(out[text.chars().count()], 7);
    }

    #[test]
    fn resolved_levels_feed_the_run_factory() {
        let text = "abc אבג";
        let resolved = resolve_levels(text, BaseDirection::Ltr);

        let mut factory = RunFactory::new();
        let layout = factory.create_layout(&resolved.levels, 0, resolved.levels.len());
        assert_eq!(layout.run_count(), 2);
        assert_eq!(layout.visual_run(0), 0);
        assert_eq!(layout.visual_run(1), 1);
        assert!(!layout.is_reversed(0));
        assert!(layout.is_reversed(1));
        assert_eq!(layout.run_length(0), 4);
        assert_eq!(layout.run_length(1), 3);
    }
}
