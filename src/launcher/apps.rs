// Application catalogue and the launch surfaces that expose it

use crate::file_store::FileId;
use serde::{Deserialize, Serialize};

/// Payload a window hosts, resolved to a concrete view by the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "app", rename_all = "kebab-case")]
pub enum AppContent {
    /// Text editor, optionally bound to a stored document
    Notepad {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_id: Option<FileId>,
    },
    Browser,
    Calculator,
    Settings,
    FileExplorer,
    RecycleBin,
    /// Pinned app without an implementation yet
    Placeholder { label: String },
}

impl AppContent {
    pub fn kind(&self) -> AppKind {
        match self {
            AppContent::Notepad { .. } => AppKind::Notepad,
            AppContent::Browser => AppKind::Browser,
            AppContent::Calculator => AppKind::Calculator,
            AppContent::Settings => AppKind::Settings,
            AppContent::FileExplorer => AppKind::FileExplorer,
            AppContent::RecycleBin => AppKind::RecycleBin,
            AppContent::Placeholder { .. } => AppKind::Placeholder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppKind {
    Notepad,
    Browser,
    Calculator,
    Settings,
    FileExplorer,
    RecycleBin,
    Placeholder,
}

impl AppKind {
    /// Id prefix used for windows of this app
    pub fn app_id(&self) -> &'static str {
        match self {
            AppKind::Notepad => "notepad",
            AppKind::Browser => "browser",
            AppKind::Calculator => "calculator",
            AppKind::Settings => "settings",
            AppKind::FileExplorer => "explorer",
            AppKind::RecycleBin => "trash",
            AppKind::Placeholder => "placeholder",
        }
    }
}

/// Where a launch request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchSurface {
    DesktopIcon,
    StartMenu,
    Taskbar,
}

/// One launchable tile: desktop icon, start-menu pin or taskbar pin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub content: AppContent,
}

impl AppEntry {
    fn new(id: &'static str, title: &'static str, content: AppContent) -> Self {
        Self { id, title, content }
    }

    fn placeholder(id: &'static str, title: &'static str) -> Self {
        Self::new(
            id,
            title,
            AppContent::Placeholder {
                label: format!("{} App Placeholder", title),
            },
        )
    }
}

fn notepad() -> AppContent {
    AppContent::Notepad { file_id: None }
}

/// Icons shown on the desktop grid
pub fn desktop_icons() -> Vec<AppEntry> {
    vec![
        AppEntry::new("notepad", "Notepad", notepad()),
        AppEntry::new("browser", "Browser", AppContent::Browser),
        AppEntry::new("calculator", "Calculator", AppContent::Calculator),
        AppEntry::new("explorer", "File Explorer", AppContent::FileExplorer),
        AppEntry::new("settings", "Settings", AppContent::Settings),
        AppEntry::new("trash", "Recycle Bin", AppContent::RecycleBin),
    ]
}

/// Pinned tiles of the start menu
pub fn start_menu_pins() -> Vec<AppEntry> {
    vec![
        AppEntry::new("browser", "Edge", AppContent::Browser),
        AppEntry::new("notepad", "Notepad", notepad()),
        AppEntry::new("settings", "Settings", AppContent::Settings),
        AppEntry::placeholder("photos", "Photos"),
        AppEntry::placeholder("mail", "Mail"),
        AppEntry::placeholder("calendar", "Calendar"),
        AppEntry::new("calculator", "Calculator", AppContent::Calculator),
        AppEntry::placeholder("spotify", "Spotify"),
        AppEntry::placeholder("netflix", "Netflix"),
    ]
}

/// Apps pinned to the taskbar
pub fn taskbar_pins() -> Vec<AppEntry> {
    vec![
        AppEntry::new("browser", "Edge", AppContent::Browser),
        AppEntry::new("notepad", "Notepad", notepad()),
        AppEntry::new("settings", "Settings", AppContent::Settings),
    ]
}

pub fn entries_for(surface: LaunchSurface) -> Vec<AppEntry> {
    match surface {
        LaunchSurface::DesktopIcon => desktop_icons(),
        LaunchSurface::StartMenu => start_menu_pins(),
        LaunchSurface::Taskbar => taskbar_pins(),
    }
}

/// Look up a tile by app id on one launch surface
pub fn find_entry(surface: LaunchSurface, app_id: &str) -> Option<AppEntry> {
    entries_for(surface).into_iter().find(|e| e.id == app_id)
}
