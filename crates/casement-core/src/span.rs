//! Pseudo-maximize geometry.
//!
//! Displays are assumed to sit in a single horizontal row. Stacked or
//! staggered arrangements produce a rectangle that may cover dead space
//! between monitors; this is a known limitation, not something to paper
//! over here.

use crate::Rect;

/// Computes the rectangle a window covers when spanned across every
/// display.
///
/// Spans from the leftmost left edge to the rightmost right edge, starting
/// at the topmost top edge. The height is capped by the shortest work
/// area so the whole window stays visible on every display.
///
/// Returns `None` for fewer than two displays.
pub fn span_work_areas(work_areas: &[Rect]) -> Option<Rect> {
    if work_areas.len() < 2 {
        return None;
    }

    let left = work_areas.iter().map(|a| a.x).min()?;
    let top = work_areas.iter().map(|a| a.y).min()?;
    let right = work_areas.iter().map(Rect::right).max()?;
    let bottom = work_areas.iter().map(Rect::bottom).max()?;
    let shortest = work_areas.iter().map(|a| a.height).min()?;

    let height = bottom.saturating_sub(top).min(shortest);
    Some(Rect::new(left, top, right.saturating_sub(left), height))
}
