//! Per-window placement memory.
//!
//! A [`WindowTracker`] is created once per top-level window. It restores
//! the saved placement immediately, then keeps the two persisted values
//! (normal bounds and last meaningful state) current as the host feeds it
//! move/resize/state-change notifications.

use crate::config::SpanConfig;
use crate::restore::{RestorePlan, plan_restore};
use crate::span::span_work_areas;
use crate::{
    Desktop, Rect, SavedPlacement, Window, WindowResult, WindowState, log_debug, log_info,
    log_warn,
};


/// Whether the window is currently pseudo-maximized across displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanMode {
    Off,
    /// Spanned to `target`; `restore` is where the window goes when
    /// un-spanned.
    Spanning { target: Rect, restore: Rect },
}

/// Remembers and restores a window's placement.
pub struct WindowTracker<W, D> {
    window: W,
    desktop: D,
    bounds: Rect,
    state: WindowState,
    ready: bool,
    span: SpanMode,
    span_config: SpanConfig,
}

impl<W: Window, D: Desktop> WindowTracker<W, D> {
    /// Creates a tracker with no saved placement.
    ///
    /// The window is left to the platform's default placement.
    pub fn new(window: W, desktop: D) -> Self {
        Self::with_saved(window, desktop, Rect::EMPTY, WindowState::Normal)
    }

    /// Creates a tracker and restores the given saved placement.
    ///
    /// Bounds that no longer overlap any attached display are discarded
    /// (only their size is kept). A saved `Minimized` state is treated
    /// as `Normal`.
    pub fn with_saved(window: W, desktop: D, bounds: Rect, state: WindowState) -> Self {
        let state = match state {
            WindowState::Minimized => WindowState::Normal,
            other => other,
        };

        let tracker = Self {
            window,
            desktop,
            bounds,
            state,
            ready: false,
            span: SpanMode::Off,
            span_config: SpanConfig::default(),
        };
        tracker.restore();
        tracker
    }

    /// Same as [`WindowTracker::with_saved`], taking both values at once.
    pub fn with_placement(window: W, desktop: D, placement: SavedPlacement) -> Self {
        Self::with_saved(window, desktop, placement.bounds, placement.state)
    }

    /// Replaces the pseudo-maximize settings.
    pub fn with_span_config(mut self, config: SpanConfig) -> Self {
        self.span_config = config;
        self
    }

    /// Last known bounds while the window was in the normal state.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Last known state other than minimized.
    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Both persisted values, ready to hand to a settings store.
    pub fn placement(&self) -> SavedPlacement {
        SavedPlacement::new(self.bounds, self.state)
    }

    /// Whether [`WindowTracker::finish_initialization`] has been called.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether the window is currently spanned across displays.
    pub fn is_spanning(&self) -> bool {
        matches!(self.span, SpanMode::Spanning { .. })
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn desktop(&self) -> &D {
        &self.desktop
    }

    /// Starts accepting [`WindowTracker::track`] updates.
    ///
    /// Call once the window has finished loading. Geometry events the
    /// platform fires while the restored placement is being applied would
    /// otherwise overwrite the saved values with transient ones.
    pub fn finish_initialization(&mut self) {
        self.ready = true;
    }

    /// Records the window's current placement.
    ///
    /// Call on every move, resize and state-change event. Bounds are only
    /// recorded in the normal state; the state is never recorded as
    /// minimized.
    pub fn track(&mut self) {
        if !self.ready {
            return;
        }

        let state = match self.window.state() {
            Ok(state) => state,
            Err(e) => {
                log_warn!("Could not read window state: {e}");
                return;
            }
        };

        if state == WindowState::Normal {
            match self.window.rect() {
                Ok(rect) => {
                    self.bounds = rect;
                    self.forget_stale_span(rect);
                }
                Err(e) => log_warn!("Could not read window bounds: {e}"),
            }
        }

        if state != WindowState::Minimized {
            self.state = state;
        }
    }

    /// Toggles the pseudo-maximize that spans every display.
    ///
    /// Call when the window is maximized (maximize button or caption
    /// double-click). Fires only while the window is maximized, the
    /// configured modifier is held and more than one display is attached.
    /// Returns `true` when it fired; the caller should then suppress the
    /// platform's own maximize handling.
    pub fn toggle_span(&mut self) -> bool {
        if !self.span_config.enabled {
            return false;
        }
        if !matches!(self.window.state(), Ok(WindowState::Maximized)) {
            return false;
        }
        if !self.desktop.is_modifier_held(self.span_config.modifier) {
            return false;
        }

        let work_areas = match self.desktop.work_areas() {
            Ok(areas) if areas.len() > 1 => areas,
            Ok(_) => return false,
            Err(e) => {
                log_warn!("Could not enumerate displays: {e}");
                return false;
            }
        };

        let result = match self.span {
            SpanMode::Off => self.engage_span(&work_areas),
            SpanMode::Spanning { restore, .. } => self.disengage_span(restore),
        };

        result.unwrap_or_else(|e| {
            log_warn!("Span toggle failed: {e}");
            false
        })
    }

    /// Drops the span once the user has moved or resized the window away
    /// from the spanned rectangle without toggling it off.
    fn forget_stale_span(&mut self, rect: Rect) {
        if let SpanMode::Spanning { target, .. } = self.span
            && rect != target
        {
            self.span = SpanMode::Off;
            log_debug!("Window left its span ({target} -> {rect}), span cleared");
        }
    }

    fn engage_span(&mut self, work_areas: &[Rect]) -> WindowResult<bool> {
        let Some(target) = span_work_areas(work_areas) else {
            return Ok(false);
        };
        let restore = self.window.restore_bounds()?;

        self.window.set_state(WindowState::Normal)?;
        self.window.set_rect(&target)?;
        self.span = SpanMode::Spanning { target, restore };

        log_info!(
            "Spanned window across {} displays: {target} (restore {restore})",
            work_areas.len()
        );
        Ok(true)
    }

    fn disengage_span(&mut self, restore: Rect) -> WindowResult<bool> {
        self.window.set_state(WindowState::Normal)?;
        self.window.set_rect(&restore)?;
        self.span = SpanMode::Off;

        log_info!("Un-spanned window back to {restore}");
        Ok(true)
    }

    /// Applies the saved placement to the freshly created window.
    fn restore(&self) {
        let work_areas = self.desktop.work_areas().unwrap_or_else(|e| {
            log_warn!("Could not enumerate displays, using default placement: {e}");
            Vec::new()
        });

        let plan = plan_restore(self.bounds, &work_areas);
        log_debug!("Restore plan for {}: {plan:?}", self.bounds);

        match plan {
            RestorePlan::Exact(rect) => self.restore_exact(rect),
            RestorePlan::DefaultLocation { size } => self.restore_default(size),
        }
    }

    fn restore_exact(&self, rect: Rect) {
        if let Err(e) = self.window.set_rect(&rect) {
            log_warn!("Could not restore window bounds {rect}: {e}");
            self.restore_default(None);
            return;
        }

        // The bounds are already right; a failed state change keeps them.
        match self.window.set_state(self.state) {
            Ok(()) => log_info!("Restored window to {rect} ({})", self.state),
            Err(e) => log_warn!("Restored window to {rect} but not {}: {e}", self.state),
        }
    }

    fn restore_default(&self, size: Option<(i32, i32)>) {
        let result = match size {
            Some((width, height)) => self.window.use_default_location_with_size(width, height),
            None => self.window.use_default_location(),
        };

        match result {
            Ok(()) => log_info!("Window placed at default location (saved size kept: {size:?})"),
            Err(e) => log_warn!("Could not move window to default location: {e}"),
        }
    }
}
