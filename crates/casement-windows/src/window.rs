use std::mem;

use casement_core::{Point, Rect, WindowResult, WindowState, log_debug};

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    GW_OWNER, GWL_STYLE, GetWindow, GetWindowLongPtrW, GetWindowPlacement, GetWindowRect,
    IsIconic, IsWindowVisible, IsZoomed, SET_WINDOW_POS_FLAGS, SW_MAXIMIZE, SW_MINIMIZE,
    SW_SHOWNORMAL, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER,
    SetWindowLongPtrW, SetWindowPlacement, SetWindowPos, ShowWindow, WINDOWPLACEMENT,
};

use crate::monitor::{self, rect_from_win32, rect_to_win32};
use crate::style;

/// A top-level window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle: a number that identifies a window to the OS.
/// Every query goes back to the OS, so the handle never holds stale data.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a new `Window` from a raw handle value (pointer-sized integer).
    ///
    /// This allows callers to construct a `Window` without depending on the
    /// `windows` crate directly.
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    fn placement(&self) -> WindowResult<WINDOWPLACEMENT> {
        let mut placement = WINDOWPLACEMENT {
            length: mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };
        // SAFETY: length is set as the API requires.
        unsafe { GetWindowPlacement(self.hwnd, &mut placement)? };
        Ok(placement)
    }

    /// Offset between workspace and screen coordinates.
    ///
    /// `WINDOWPLACEMENT` positions are relative to the work area of the
    /// window's monitor, so a taskbar docked on the left or top shifts
    /// them away from screen coordinates.
    fn workspace_offset(&self) -> WindowResult<(i32, i32)> {
        let info = monitor::monitor_for_window(self.hwnd)?;
        Ok((
            info.work_area.x - info.bounds.x,
            info.work_area.y - info.bounds.y,
        ))
    }

    fn is_normal(&self) -> bool {
        // SAFETY: IsIconic and IsZoomed are simple state queries.
        unsafe { !IsIconic(self.hwnd).as_bool() && !IsZoomed(self.hwnd).as_bool() }
    }

    fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    /// Work area of the nearest monitor, or the primary one.
    fn default_area(&self) -> WindowResult<Rect> {
        match monitor::monitor_for_window(self.hwnd) {
            Ok(info) => Ok(info.work_area),
            Err(_) => monitor::primary_work_area(),
        }
    }

    /// Changes the show state of a window that is not visible yet.
    ///
    /// `ShowWindow` would make it appear (and activate it) before the host
    /// shows it, so only the style bits and bounds change here. The window
    /// comes up in that state whenever the host shows it.
    fn set_hidden_state(&self, state: WindowState) -> WindowResult<()> {
        // SAFETY: GetWindowLongPtrW with GWL_STYLE reads the style bits.
        let current = unsafe { GetWindowLongPtrW(self.hwnd, GWL_STYLE) } as u32;
        let updated = style::with_state(current, state);
        if updated == current {
            return Ok(());
        }

        let restore = casement_core::Window::restore_bounds(self)?;
        log_debug!(
            "set_hidden_state 0x{:X}: {state} (style 0x{current:X} -> 0x{updated:X})",
            self.hwnd.0 as usize
        );

        // SAFETY: only the minimize/maximize bits differ from the current
        // style; SWP_FRAMECHANGED below makes the change take effect.
        unsafe { SetWindowLongPtrW(self.hwnd, GWL_STYLE, updated as isize) };

        let target = match state {
            WindowState::Maximized => monitor::monitor_for_window(self.hwnd)?.work_area,
            WindowState::Normal | WindowState::Minimized => restore,
        };
        self.set_pos(&target, SWP_FRAMECHANGED)
    }

    /// Calls `SetWindowPos` without touching Z-order or activation.
    fn set_pos(&self, rect: &Rect, extra: SET_WINDOW_POS_FLAGS) -> WindowResult<()> {
        // SAFETY: SetWindowPos with a valid HWND is safe.
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOZORDER | SWP_NOACTIVATE | extra,
            )?
        };
        Ok(())
    }
}

impl casement_core::Window for Window {
    fn state(&self) -> WindowResult<WindowState> {
        // SAFETY: IsIconic and IsZoomed are simple state queries.
        let state = unsafe {
            if IsIconic(self.hwnd).as_bool() {
                WindowState::Minimized
            } else if IsZoomed(self.hwnd).as_bool() {
                WindowState::Maximized
            } else {
                WindowState::Normal
            }
        };
        Ok(state)
    }

    fn set_state(&self, state: WindowState) -> WindowResult<()> {
        if !self.is_visible() {
            return self.set_hidden_state(state);
        }

        let cmd = match state {
            WindowState::Normal => SW_SHOWNORMAL,
            WindowState::Minimized => SW_MINIMIZE,
            WindowState::Maximized => SW_MAXIMIZE,
        };
        // SAFETY: ShowWindow returns the previous visibility, not an error.
        unsafe {
            let _ = ShowWindow(self.hwnd, cmd);
        }
        Ok(())
    }

    fn rect(&self) -> WindowResult<Rect> {
        let mut rc = RECT::default();
        // SAFETY: GetWindowRect fills rc for a valid HWND.
        unsafe { GetWindowRect(self.hwnd, &mut rc)? };
        Ok(rect_from_win32(&rc))
    }

    fn restore_bounds(&self) -> WindowResult<Rect> {
        let placement = self.placement()?;
        let (dx, dy) = self.workspace_offset()?;
        Ok(rect_from_win32(&placement.rcNormalPosition).offset(dx, dy))
    }

    fn set_rect(&self, rect: &Rect) -> WindowResult<()> {
        log_debug!(
            "set_rect 0x{:X}: {rect} (normal={})",
            self.hwnd.0 as usize,
            self.is_normal()
        );

        if self.is_normal() {
            return self.set_pos(rect, Default::default());
        }

        // Maximized or minimized: only change where the window restores to,
        // the way a settings-driven restore expects.
        let mut placement = self.placement()?;
        let (dx, dy) = self.workspace_offset()?;
        placement.rcNormalPosition = rect_to_win32(&rect.offset(-dx, -dy));
        // SAFETY: placement came from GetWindowPlacement with length set.
        unsafe { SetWindowPlacement(self.hwnd, &placement)? };
        Ok(())
    }

    fn set_size(&self, width: i32, height: i32) -> WindowResult<()> {
        self.set_pos(&Rect::new(0, 0, width, height), SWP_NOMOVE)
    }

    /// Centers the window on the work area of its nearest monitor.
    ///
    /// Win32 only honours `CW_USEDEFAULT` at creation time, so this is the
    /// closest equivalent for a window that already exists.
    fn use_default_location(&self) -> WindowResult<()> {
        let area = self.default_area()?;
        let current = casement_core::Window::rect(self)?;
        self.set_pos(&current.centered_in(&area), SWP_NOSIZE)
    }

    /// Centers the window at its new size in a single move.
    fn use_default_location_with_size(&self, width: i32, height: i32) -> WindowResult<()> {
        let area = self.default_area()?;
        let target = Rect::new(0, 0, width, height).centered_in(&area);
        self.set_pos(&target, Default::default())
    }

    fn owner_position(&self) -> WindowResult<Option<Point>> {
        // SAFETY: GetWindow fails (null handle) when there is no owner.
        let Ok(owner) = (unsafe { GetWindow(self.hwnd, GW_OWNER) }) else {
            return Ok(None);
        };
        if owner.is_invalid() {
            return Ok(None);
        }
        let owner_rect = casement_core::Window::rect(&Window::new(owner))?;
        Ok(Some(owner_rect.position()))
    }

    fn set_position(&self, position: Point) -> WindowResult<()> {
        self.set_pos(&Rect::new(position.x, position.y, 0, 0), SWP_NOSIZE)
    }
}
