use crate::{Point, Window, WindowResult, log_debug};

/// Extra nudge applied on top of every relative placement, so an owned
/// window never lands exactly on its owner's title bar.
pub const CASCADE_OFFSET: Point = Point { x: 20, y: 20 };

/// Positions `window` at its owner's position plus `offset` plus
/// [`CASCADE_OFFSET`].
///
/// Does nothing when the window has no owner.
pub fn place_relative<W: Window + ?Sized>(window: &W, offset: Point) -> WindowResult<()> {
    place_with_cascade(window, offset, CASCADE_OFFSET)
}

/// Positions `window` just below and to the right of its owner.
///
/// Same as [`place_relative`] with a zero offset.
pub fn place_near_owner<W: Window + ?Sized>(window: &W) -> WindowResult<()> {
    place_relative(window, Point::ZERO)
}

/// [`place_relative`] with an explicit cascade, for callers that read it
/// from [`PlacementConfig`](crate::config::PlacementConfig).
pub fn place_with_cascade<W: Window + ?Sized>(
    window: &W,
    offset: Point,
    cascade: Point,
) -> WindowResult<()> {
    let Some(owner) = window.owner_position()? else {
        return Ok(());
    };

    let target = owner.offset(offset).offset(cascade);
    log_debug!(
        "Placing owned window at ({}, {}) (owner at ({}, {}))",
        target.x,
        target.y,
        owner.x,
        owner.y
    );
    window.set_position(target)
}
