use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::bits;

/// Length recorded by the frozen single-run layouts. The shared instances
/// cannot know any concrete range length, so they report "the whole range"
/// and callers clamp to their line.
const WHOLE_RANGE: u32 = u32::MAX;

/// Immutable description of the directional runs in a laid-out range.
///
/// A run is a maximal contiguous span of characters sharing one embedding
/// level. The layout records, for `count` runs in logical order, each run's
/// length and reversal flag, plus the visual-to-logical mapping produced by
/// the UAX #9 L2 reversal rule. Rendering code iterates visual slots
/// `0..run_count()`, painting each run backwards when [`is_reversed`] says
/// so.
///
/// Layouts are built by [`RunFactory`], never mutated afterwards, and
/// shared behind an [`Arc`]; single-run ranges always resolve to the frozen
/// [`all_ltr`]/[`all_rtl`] instances.
///
/// [`RunFactory`]: crate::factory::RunFactory
/// [`is_reversed`]: RunLayout::is_reversed
/// [`all_ltr`]: RunLayout::all_ltr
/// [`all_rtl`]: RunLayout::all_rtl
#[derive(Debug)]
pub struct RunLayout {
    // Three consecutive regions in one allocation: run lengths, the
    // visual-to-logical run mapping, and the reversal bits.
    info: Box<[u32]>,
    count: usize,
}

impl RunLayout {
    pub(crate) fn from_packed(info: Box<[u32]>, count: usize) -> Self {
        Self { info, count }
    }

    /// The shared layout for a range that is a single left-to-right run.
    pub fn all_ltr() -> Arc<RunLayout> {
        static ALL_LTR: OnceLock<Arc<RunLayout>> = OnceLock::new();
        Arc::clone(ALL_LTR.get_or_init(|| {
            Arc::new(RunLayout::from_packed(Box::new([WHOLE_RANGE, 0, 0]), 1))
        }))
    }

    /// The shared layout for a range that is a single right-to-left run.
    pub fn all_rtl() -> Arc<RunLayout> {
        static ALL_RTL: OnceLock<Arc<RunLayout>> = OnceLock::new();
        Arc::clone(ALL_RTL.get_or_init(|| {
            Arc::new(RunLayout::from_packed(Box::new([WHOLE_RANGE, 0, 1]), 1))
        }))
    }

    /// Number of directional runs; at least 1.
    pub fn run_count(&self) -> usize {
        self.count
    }

    /// Logical character offset where run `run` begins, relative to the
    /// start of the laid-out range.
    ///
    /// Recomputed as a prefix sum on every call; callers walking all runs
    /// should keep a running offset instead.
    pub fn run_start(&self, run: usize) -> usize {
        self.info[..run].iter().map(|&len| len as usize).sum()
    }

    /// Logical length of run `run` in characters.
    pub fn run_length(&self, run: usize) -> usize {
        self.info[run] as usize
    }

    /// Whether run `run` displays right-to-left (odd embedding level).
    pub fn is_reversed(&self, run: usize) -> bool {
        bits::get(&self.info[2 * self.count..], run)
    }

    /// Logical run index shown at the given visual slot.
    pub fn visual_run(&self, visual_position: usize) -> usize {
        self.info[self.count + visual_position] as usize
    }
}

impl fmt::Display for RunLayout {
    /// Debug rendering: each run's length in logical order, then each
    /// visual slot's logical run index with an `r` suffix when that run is
    /// reversed, e.g. `len[2,1,2,1,2] vis[0,3r,2,1r,4]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "len[")?;
        for i in 0..self.count {
            if i != 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", self.info[i])?;
        }
        write!(f, "] vis[")?;
        for i in 0..self.count {
            if i != 0 {
                write!(f, ",")?;
            }
            let run = self.visual_run(i);
            write!(f, "{run}")?;
            if self.is_reversed(run) {
                write!(f, "r")?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_describe_one_whole_range_run() {
        let ltr = RunLayout::all_ltr();
        assert_eq!(ltr.run_count(), 1);
        assert_eq!(ltr.visual_run(0), 0);
        assert_eq!(ltr.run_start(0), 0);
        assert_eq!(ltr.run_length(0), u32::MAX as usize);
        assert!(!ltr.is_reversed(0));

        let rtl = RunLayout::all_rtl();
        assert_eq!(rtl.run_count(), 1);
        assert_eq!(rtl.visual_run(0), 0);
        assert!(rtl.is_reversed(0));
    }

    #[test]
    fn singletons_are_shared_instances() {
        assert!(Arc::ptr_eq(&RunLayout::all_ltr(), &RunLayout::all_ltr()));
        assert!(Arc::ptr_eq(&RunLayout::all_rtl(), &RunLayout::all_rtl()));
        assert!(!Arc::ptr_eq(&RunLayout::all_ltr(), &RunLayout::all_rtl()));
    }

    #[test]
    fn layouts_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RunLayout>();
    }

    #[test]
    fn rtl_singleton_display_marks_reversal() {
        assert_eq!(RunLayout::all_rtl().to_string(), "len[4294967295] vis[0r]");
    }
}
