//! Window placement memory.
//!
//! Restores a window's saved bounds and show state against the displays
//! attached right now, keeps those two values current while the window
//! lives, spans a maximized window across a row of monitors on demand,
//! and places owned windows next to their owner.
//!
//! The windowing system is reached only through the [`Window`] and
//! [`Desktop`] traits; `casement-windows` implements them for Win32.

pub mod config;
pub mod log;
pub mod placement;
pub mod rect;
pub mod restore;
pub mod span;
pub mod state;
pub mod tracker;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{Config, Modifier};
pub use placement::{place_near_owner, place_relative};
pub use rect::{Point, Rect};
pub use restore::{RestorePlan, plan_restore};
pub use span::span_work_areas;
pub use state::{SavedPlacement, WindowState};
pub use tracker::WindowTracker;
pub use window::{Desktop, Window, WindowResult};
