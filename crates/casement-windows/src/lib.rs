//! Win32 implementation of the Casement window and desktop traits.
//!
//! Everything except the key-code and style-bit helpers is Windows-only.

/// Virtual key codes for modifier keys.
pub mod keys;

/// Show-state bits of a window style.
pub mod style;

/// Live desktop: displays and modifier key state.
#[cfg(windows)]
pub mod desktop;

/// Display enumeration and work areas.
#[cfg(windows)]
pub mod monitor;

/// Window type wrapping a Win32 `HWND`.
#[cfg(windows)]
pub mod window;

#[cfg(windows)]
pub use desktop::Win32Desktop;
#[cfg(windows)]
pub use monitor::{MonitorInfo, enumerate_monitors};
#[cfg(windows)]
pub use window::Window;
