use crate::config::Modifier;
use crate::{Point, Rect, WindowState};

/// A boxed error type for window operations.
///
/// Platform calls fail for reasons the caller cannot act on (a handle that
/// went stale, a display that vanished mid-query), so errors are boxed and
/// only ever logged.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Platform-agnostic window trait.
///
/// Each platform crate (e.g. `casement-windows`) provides its own
/// implementation. Setters take `&self`: the window itself is owned by
/// the OS, this is only a handle to it.
pub trait Window {
    /// Returns the current show state.
    fn state(&self) -> WindowResult<WindowState>;

    /// Switches the window to the given show state.
    fn set_state(&self, state: WindowState) -> WindowResult<()>;

    /// Returns the window's current outer bounds.
    fn rect(&self) -> WindowResult<Rect>;

    /// Returns the bounds the window goes back to when un-maximized.
    fn restore_bounds(&self) -> WindowResult<Rect>;

    /// Moves and resizes the window.
    fn set_rect(&self, rect: &Rect) -> WindowResult<()>;

    /// Resizes the window without moving it.
    fn set_size(&self, width: i32, height: i32) -> WindowResult<()>;

    /// Hands positioning back to the platform's default placement.
    fn use_default_location(&self) -> WindowResult<()>;

    /// Hands positioning back to the platform with a given size.
    ///
    /// Platforms that center the default placement should override this
    /// so the window is centered at its new size, not its old one.
    fn use_default_location_with_size(&self, width: i32, height: i32) -> WindowResult<()> {
        self.use_default_location()?;
        self.set_size(width, height)
    }

    /// Returns the top-left corner of the owning window, if there is one.
    fn owner_position(&self) -> WindowResult<Option<Point>>;

    /// Moves the window without resizing it.
    fn set_position(&self, position: Point) -> WindowResult<()>;
}

/// The displays and input devices the window lives on.
pub trait Desktop {
    /// Returns the work area of every attached display.
    ///
    /// The work area excludes the taskbar and any docked toolbars.
    fn work_areas(&self) -> WindowResult<Vec<Rect>>;

    /// Returns whether the modifier key is held down right now.
    fn is_modifier_held(&self, modifier: Modifier) -> bool;
}
