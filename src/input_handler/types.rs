// Core data structures for pointer gestures and window geometry

use serde::{Deserialize, Serialize};

/// Smallest width a window frame may take, in pixels
pub const MIN_WINDOW_WIDTH: f64 = 300.0;
/// Smallest height a window frame may take, in pixels
pub const MIN_WINDOW_HEIGHT: f64 = 200.0;

/// Represents a spatial rectangle for positioning window frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the top-left corner of the rectangle
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A pointer position in client (viewport) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to this point
    pub fn delta_from(&self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Resize handle on a window frame.
///
/// Only the right and bottom edges are draggable; the top-left corner is
/// always the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    Right,
    Bottom,
    BottomRight,
}

impl ResizeHandle {
    /// Parse from the handle names used by the frontend
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "right" => Some(ResizeHandle::Right),
            "bottom" => Some(ResizeHandle::Bottom),
            "bottom-right" => Some(ResizeHandle::BottomRight),
            _ => None,
        }
    }

    pub fn affects_width(&self) -> bool {
        matches!(self, ResizeHandle::Right | ResizeHandle::BottomRight)
    }

    pub fn affects_height(&self) -> bool {
        matches!(self, ResizeHandle::Bottom | ResizeHandle::BottomRight)
    }
}

/// Minimum frame size enforced by every geometry write
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeLimits {
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
        }
    }
}
