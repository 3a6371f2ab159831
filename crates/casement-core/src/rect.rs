use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A rectangle representing a window's position and size.
///
/// An empty rectangle (zero or negative width/height) means
/// "no saved position".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A point in screen coordinates, also used as a relative offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum of two points, saturating at the `i32` range.
    pub fn offset(self, other: Point) -> Point {
        Point::new(
            self.x.saturating_add(other.x),
            self.y.saturating_add(other.y),
        )
    }
}

impl Rect {
    pub const EMPTY: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from its four edges.
    ///
    /// Edge arithmetic here and below saturates: coordinates come from
    /// user input and from the OS, and an edge past `i32::MAX` is clamped
    /// rather than wrapped.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }

    /// Returns `true` if the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns whether the two rectangles share at least one pixel.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Same size, moved so its top-left corner is at `(x, y)`.
    pub fn with_position(&self, x: i32, y: i32) -> Rect {
        Rect::new(x, y, self.width, self.height)
    }

    /// Same size, shifted by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Same size, centered on `area`.
    ///
    /// A rectangle larger than `area` is aligned to its top-left corner
    /// instead, so the title bar stays reachable.
    pub fn centered_in(&self, area: &Rect) -> Rect {
        let slack_x = area.width.saturating_sub(self.width).max(0);
        let slack_y = area.height.saturating_sub(self.height).max(0);
        self.with_position(
            area.x.saturating_add(slack_x / 2),
            area.y.saturating_add(slack_y / 2),
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

/// Parses `"x,y,width,height"` (whitespace around values is ignored).
impl FromStr for Rect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [x, y, w, h] = parts.as_slice() else {
            return Err(format!("expected x,y,width,height but got '{s}'"));
        };
        let parse = |v: &str| {
            v.parse::<i32>()
                .map_err(|e| format!("invalid value '{v}' in '{s}': {e}"))
        };
        Ok(Rect::new(parse(x)?, parse(y)?, parse(w)?, parse(h)?))
    }
}
