use std::mem;

use casement_core::{Rect, WindowResult};
use windows::Win32::Foundation::{HWND, LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITOR_DEFAULTTONEAREST,
    MONITOR_DEFAULTTOPRIMARY, MONITORINFO, MonitorFromWindow,
};
use windows::core::BOOL;

/// `MONITORINFO::dwFlags` bit marking the primary display.
const MONITORINFOF_PRIMARY: u32 = 1;

/// A display attached to the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorInfo {
    /// The raw `HMONITOR` value. Only stable until the next display change.
    pub id: usize,
    /// Full display bounds.
    pub bounds: Rect,
    /// Display bounds minus the taskbar and docked toolbars.
    pub work_area: Rect,
    pub primary: bool,
}

/// Enumerates every attached display.
///
/// Uses the same `LPARAM`-as-user-data pattern as window enumeration:
/// the callback receives a pointer to our `Vec` and appends to it.
pub fn enumerate_monitors() -> WindowResult<Vec<MonitorInfo>> {
    let mut monitors: Vec<MonitorInfo> = Vec::new();

    // SAFETY: EnumDisplayMonitors runs synchronously and calls our
    // callback once per display; the Vec outlives the call.
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitor_callback),
            LPARAM(&mut monitors as *mut _ as isize),
        )
    };

    if !ok.as_bool() {
        return Err("EnumDisplayMonitors failed".into());
    }
    if monitors.is_empty() {
        return Err("no displays attached".into());
    }

    // Left-to-right so listings match the physical arrangement.
    monitors.sort_by_key(|m| (m.bounds.x, m.bounds.y));
    Ok(monitors)
}

unsafe extern "system" fn enum_monitor_callback(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam is the Vec pointer passed by enumerate_monitors().
    let monitors = unsafe { &mut *(lparam.0 as *mut Vec<MonitorInfo>) };

    if let Ok(info) = monitor_info(monitor) {
        monitors.push(info);
    }

    BOOL(1) // TRUE, keep enumerating
}

/// Returns the display containing most of the given window, or the
/// nearest one if the window is entirely off-screen.
pub fn monitor_for_window(hwnd: HWND) -> WindowResult<MonitorInfo> {
    // SAFETY: MonitorFromWindow never fails with MONITOR_DEFAULTTONEAREST.
    let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST) };
    monitor_info(monitor)
}

/// Returns the work area of the primary monitor.
pub fn primary_work_area() -> WindowResult<Rect> {
    // SAFETY: a null HWND with MONITOR_DEFAULTTOPRIMARY always yields the
    // primary monitor.
    let monitor = unsafe { MonitorFromWindow(HWND::default(), MONITOR_DEFAULTTOPRIMARY) };
    Ok(monitor_info(monitor)?.work_area)
}

fn monitor_info(monitor: HMONITOR) -> WindowResult<MonitorInfo> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: cbSize is set as the API requires.
    let success = unsafe { GetMonitorInfoW(monitor, &mut info) };
    if !success.as_bool() {
        return Err("Failed to get monitor info".into());
    }

    Ok(MonitorInfo {
        id: monitor.0 as usize,
        bounds: rect_from_win32(&info.rcMonitor),
        work_area: rect_from_win32(&info.rcWork),
        primary: info.dwFlags & MONITORINFOF_PRIMARY != 0,
    })
}

pub(crate) fn rect_from_win32(rc: &RECT) -> Rect {
    Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom)
}

pub(crate) fn rect_to_win32(rect: &Rect) -> RECT {
    RECT {
        left: rect.x,
        top: rect.y,
        right: rect.right(),
        bottom: rect.bottom(),
    }
}
