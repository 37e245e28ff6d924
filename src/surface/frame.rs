use crate::input_handler::Rect;
use crate::launcher::AppContent;
use crate::state::window::WindowId;
use serde::{Deserialize, Serialize};

/// Visible desktop area of the webview
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Bounds of a maximized frame: everything above the taskbar
    pub fn maximized_bounds(&self, taskbar_height: f64) -> Rect {
        Rect::new(0.0, 0.0, self.width, (self.height - taskbar_height).max(0.0))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// What the frontend needs to draw one window frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameLayout {
    pub id: WindowId,
    pub title: String,
    pub content: AppContent,
    pub bounds: Rect,
    pub z_index: u64,
    pub focused: bool,
    pub maximized: bool,
    /// Title-bar drag and resize handles are live
    pub resizable: bool,
    /// Pointer events reach the hosted content. Off during any gesture so an
    /// embedded iframe cannot swallow the pointer.
    pub content_interactive: bool,
}

/// Buttons in the frame's title bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromeButton {
    Minimize,
    Maximize,
    Close,
}

/// How the document-wide pointer listeners should change after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capture {
    /// A gesture started: listen to pointer-move/up on the whole document
    Attach,
    /// The gesture ended: remove the document listeners
    Detach,
    Unchanged,
}
