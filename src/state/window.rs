use crate::input_handler::Rect;
use crate::launcher::AppContent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one window instance.
///
/// Singleton apps use their fixed app id (`"settings"`); multi-instance apps
/// use a composite of app type and target entity (`"notepad-<file id>"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Composite id for an app opened against a specific entity
    pub fn composite(app: &str, entity: impl fmt::Display) -> Self {
        Self(format!("{}-{}", app, entity))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowInstance {
    pub id: WindowId,
    pub title: String,
    pub content: AppContent,     // What to render, resolved by the launcher
    pub is_minimized: bool,      // Frame hidden, geometry kept
    pub is_maximized: bool,      // Frame fills the desktop area
    pub z_index: u64,            // Stacking order, highest visible = focused
    pub geometry: Rect,          // Frame bounds when not maximized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restore_geometry: Option<Rect>, // Snapshot taken on entering maximized
}

impl WindowInstance {
    /// Visible frames take part in focus and can be dragged
    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }

    /// Only restored, visible frames accept move/resize gestures
    pub fn accepts_gestures(&self) -> bool {
        !self.is_minimized && !self.is_maximized
    }
}
