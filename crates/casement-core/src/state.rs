use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Rect;

/// The show state of a top-level window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

impl WindowState {
    fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Minimized => "minimized",
            Self::Maximized => "maximized",
        }
    }
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "minimized" => Ok(Self::Minimized),
            "maximized" => Ok(Self::Maximized),
            _ => Err(format!(
                "unknown window state '{s}' (expected normal, minimized or maximized)"
            )),
        }
    }
}

/// The two values a caller persists between sessions.
///
/// Casement never stores these itself. Read them from
/// [`WindowTracker::placement`](crate::WindowTracker::placement) at
/// shutdown, keep them wherever the application keeps its settings, and
/// hand them back on the next start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedPlacement {
    /// Last known bounds while the window was in the normal state.
    pub bounds: Rect,
    /// Last known non-minimized state.
    pub state: WindowState,
}

impl SavedPlacement {
    pub fn new(bounds: Rect, state: WindowState) -> Self {
        Self { bounds, state }
    }

    /// Serializes to a compact JSON string for settings stores that only
    /// hold strings.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parses a string produced by [`SavedPlacement::to_json`].
    ///
    /// Anything unreadable yields the default (no saved position, normal).
    pub fn from_json(s: &str) -> Self {
        serde_json::from_str(s).unwrap_or_default()
    }
}
