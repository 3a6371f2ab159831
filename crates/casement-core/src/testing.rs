//! In-memory stand-ins for the platform window and desktop.
//!
//! `FakeWindow` mimics the bits of OS behaviour the tracker relies on:
//! maximizing remembers the normal bounds as restore bounds, and
//! restoring from maximized puts them back.

use std::cell::{Cell, RefCell};

use crate::config::Modifier;
use crate::{Desktop, Point, Rect, Window, WindowResult, WindowState};

/// Bounds a fake window takes while maximized.
pub const MAXIMIZED_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 1920,
    height: 1040,
};

/// Bounds the fake platform hands out for its default location.
pub const DEFAULT_LOCATION: Point = Point { x: 26, y: 26 };

/// A platform call recorded by [`FakeWindow`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetState(WindowState),
    SetRect(Rect),
    SetSize(i32, i32),
    DefaultLocation,
    SetPosition(Point),
}

pub struct FakeWindow {
    state: Cell<WindowState>,
    rect: Cell<Rect>,
    restore: Cell<Rect>,
    owner: Cell<Option<Point>>,
    fail_reads: Cell<bool>,
    reject_rects: Cell<bool>,
    reject_states: Cell<bool>,
    calls: RefCell<Vec<Call>>,
}

impl FakeWindow {
    pub fn normal(rect: Rect) -> Self {
        Self {
            state: Cell::new(WindowState::Normal),
            rect: Cell::new(rect),
            restore: Cell::new(rect),
            owner: Cell::new(None),
            fail_reads: Cell::new(false),
            reject_rects: Cell::new(false),
            reject_states: Cell::new(false),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A window the OS just maximized from `restore`.
    pub fn maximized_from(restore: Rect) -> Self {
        let window = Self::normal(restore);
        window.state.set(WindowState::Maximized);
        window.rect.set(MAXIMIZED_AREA);
        window
    }

    pub fn set_owner(&self, owner: Option<Point>) {
        self.owner.set(owner);
    }

    pub fn fail_reads(&self) {
        self.fail_reads.set(true);
    }

    /// Makes every `set_rect` call fail after it is recorded.
    pub fn reject_rects(&self) {
        self.reject_rects.set(true);
    }

    /// Makes every `set_state` call fail after it is recorded.
    pub fn reject_states(&self) {
        self.reject_states.set(true);
    }

    /// Simulates the user moving or resizing the window.
    pub fn user_moves_to(&self, rect: Rect) {
        self.rect.set(rect);
        if self.state.get() == WindowState::Normal {
            self.restore.set(rect);
        }
    }

    /// Simulates the user pressing a caption button (no call recorded).
    pub fn user_sets_state(&self, state: WindowState) {
        self.apply_state(state);
    }

    pub fn current_state(&self) -> WindowState {
        self.state.get()
    }

    pub fn current_rect(&self) -> Rect {
        self.rect.get()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn apply_state(&self, state: WindowState) {
        let previous = self.state.replace(state);
        match (previous, state) {
            (WindowState::Normal, WindowState::Maximized) => {
                self.restore.set(self.rect.get());
                self.rect.set(MAXIMIZED_AREA);
            }
            (WindowState::Maximized | WindowState::Minimized, WindowState::Normal) => {
                self.rect.set(self.restore.get());
            }
            _ => {}
        }
    }
}

impl Window for FakeWindow {
    fn state(&self) -> WindowResult<WindowState> {
        if self.fail_reads.get() {
            return Err("window handle is stale".into());
        }
        Ok(self.state.get())
    }

    fn set_state(&self, state: WindowState) -> WindowResult<()> {
        self.record(Call::SetState(state));
        if self.reject_states.get() {
            return Err("state change refused".into());
        }
        self.apply_state(state);
        Ok(())
    }

    fn rect(&self) -> WindowResult<Rect> {
        if self.fail_reads.get() {
            return Err("window handle is stale".into());
        }
        Ok(self.rect.get())
    }

    fn restore_bounds(&self) -> WindowResult<Rect> {
        Ok(self.restore.get())
    }

    fn set_rect(&self, rect: &Rect) -> WindowResult<()> {
        self.record(Call::SetRect(*rect));
        if self.reject_rects.get() {
            return Err("bounds change refused".into());
        }
        self.restore.set(*rect);
        if self.state.get() == WindowState::Normal {
            self.rect.set(*rect);
        }
        Ok(())
    }

    fn set_size(&self, width: i32, height: i32) -> WindowResult<()> {
        self.record(Call::SetSize(width, height));
        let resized = Rect::new(self.rect.get().x, self.rect.get().y, width, height);
        self.rect.set(resized);
        self.restore.set(resized);
        Ok(())
    }

    fn use_default_location(&self) -> WindowResult<()> {
        self.record(Call::DefaultLocation);
        let moved = self
            .rect
            .get()
            .with_position(DEFAULT_LOCATION.x, DEFAULT_LOCATION.y);
        self.rect.set(moved);
        self.restore.set(moved);
        Ok(())
    }

    fn owner_position(&self) -> WindowResult<Option<Point>> {
        Ok(self.owner.get())
    }

    fn set_position(&self, position: Point) -> WindowResult<()> {
        self.record(Call::SetPosition(position));
        let moved = self.rect.get().with_position(position.x, position.y);
        self.rect.set(moved);
        Ok(())
    }
}

pub struct FakeDesktop {
    work_areas: RefCell<Vec<Rect>>,
    held: RefCell<Vec<Modifier>>,
    fail: Cell<bool>,
}

impl FakeDesktop {
    pub fn new(work_areas: Vec<Rect>) -> Self {
        Self {
            work_areas: RefCell::new(work_areas),
            held: RefCell::new(Vec::new()),
            fail: Cell::new(false),
        }
    }

    /// Two 1920x1040 work areas side by side.
    pub fn dual() -> Self {
        Self::new(vec![
            Rect::new(0, 0, 1920, 1040),
            Rect::new(1920, 0, 1920, 1040),
        ])
    }

    pub fn single() -> Self {
        Self::new(vec![MAXIMIZED_AREA])
    }

    pub fn hold(&self, modifier: Modifier) {
        self.held.borrow_mut().push(modifier);
    }

    pub fn release_all(&self) {
        self.held.borrow_mut().clear();
    }

    pub fn fail_enumeration(&self) {
        self.fail.set(true);
    }
}

impl Desktop for FakeDesktop {
    fn work_areas(&self) -> WindowResult<Vec<Rect>> {
        if self.fail.get() {
            return Err("display enumeration failed".into());
        }
        Ok(self.work_areas.borrow().clone())
    }

    fn is_modifier_held(&self, modifier: Modifier) -> bool {
        self.held.borrow().contains(&modifier)
    }
}
