//! Deciding where a window reopens.
//!
//! Saved bounds are only trusted when they still overlap a display that
//! is attached now. Monitors get unplugged, resized and rearranged
//! between sessions; a window restored onto a display that no longer
//! exists would open somewhere the user can never reach.

use crate::Rect;

/// How a window should be placed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestorePlan {
    /// Apply the saved bounds exactly.
    Exact(Rect),
    /// Let the platform choose the position, optionally keeping the
    /// saved size.
    DefaultLocation { size: Option<(i32, i32)> },
}

/// Picks a restore plan for `saved` given the current work areas.
pub fn plan_restore(saved: Rect, work_areas: &[Rect]) -> RestorePlan {
    if !saved.is_empty() && work_areas.iter().any(|area| area.intersects(&saved)) {
        return RestorePlan::Exact(saved);
    }

    let size = (!saved.is_empty()).then_some((saved.width, saved.height));
    RestorePlan::DefaultLocation { size }
}
