//! Section types for the Casement configuration file.

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::placement::CASCADE_OFFSET;

use super::Modifier;

/// Pseudo-maximize (span across displays) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanConfig {
    /// Whether a modified maximize may span every display.
    pub enabled: bool,
    /// Modifier that must be held while maximizing to span.
    pub modifier: Modifier,
}

impl Default for SpanConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            modifier: Modifier::Ctrl,
        }
    }
}

/// Owned-window placement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Horizontal pixels added on top of every relative placement.
    pub cascade_x: i32,
    /// Vertical pixels added on top of every relative placement.
    pub cascade_y: i32,
}

impl PlacementConfig {
    pub fn cascade(&self) -> Point {
        Point::new(self.cascade_x, self.cascade_y)
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            cascade_x: CASCADE_OFFSET.x,
            cascade_y: CASCADE_OFFSET.y,
        }
    }
}
