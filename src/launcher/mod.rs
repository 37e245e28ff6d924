// Launcher bindings: turn an app tile or a stored document into a window

pub mod apps;

pub use apps::{
    desktop_icons, entries_for, find_entry, start_menu_pins, taskbar_pins, AppContent, AppEntry,
    AppKind, LaunchSurface,
};

use crate::file_store::FileRecord;
use crate::state::window::{WindowId, WindowInstance};
use crate::state::WindowRegistry;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Extensions the text editor can open
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "json", "js", "ts", "tsx"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi"];

#[derive(Debug, Error, PartialEq)]
pub enum LaunchError {
    #[error("opening '{0}' is not supported yet")]
    Unsupported(String),
    #[error("unknown app '{0}'")]
    UnknownApp(String),
}

/// File explorer grouping, derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Document,
    Image,
    Video,
}

impl FileCategory {
    pub fn from_name(name: &str) -> Self {
        let ext = extension(name);
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            FileCategory::Image
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            FileCategory::Video
        } else {
            FileCategory::Document
        }
    }
}

fn extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_lowercase()
}

/// Launch an app tile.
///
/// Tiles always carry a fixed id, so launching the same app twice brings
/// the existing window back instead of creating another.
pub fn launch<'r>(registry: &'r mut WindowRegistry, entry: &AppEntry) -> &'r WindowInstance {
    debug!(app = entry.id, "launching app");
    registry.open_window(
        WindowId::from(entry.id),
        entry.title,
        entry.content.clone(),
    )
}

/// Open a stored document in its own window.
///
/// The window id combines the app and the file id: the same document
/// re-focuses its window, different documents get separate windows.
pub fn open_document<'r>(
    registry: &'r mut WindowRegistry,
    file: &FileRecord,
) -> Result<&'r WindowInstance, LaunchError> {
    if !TEXT_EXTENSIONS.contains(&extension(&file.name).as_str()) {
        return Err(LaunchError::Unsupported(file.name.clone()));
    }

    let id = WindowId::composite(AppKind::Notepad.app_id(), file.id);
    debug!(window = %id, file = %file.name, "opening document");
    Ok(registry.open_window(
        id,
        "Notepad",
        AppContent::Notepad {
            file_id: Some(file.id),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_store::{FileStore, MemoryFileStore, NewFile};
    use crate::session::UserId;

    fn stored(store: &mut MemoryFileStore, name: &str) -> FileRecord {
        store
            .create(&UserId::new("alice"), NewFile::text(name, "hello"))
            .unwrap()
    }

    #[test]
    fn test_tiles_per_surface() {
        let ids = |surface| -> Vec<&str> { entries_for(surface).iter().map(|e| e.id).collect() };
        assert_eq!(
            ids(LaunchSurface::DesktopIcon),
            ["notepad", "browser", "calculator", "explorer", "settings", "trash"]
        );
        assert_eq!(ids(LaunchSurface::Taskbar), ["browser", "notepad", "settings"]);

        let start = entries_for(LaunchSurface::StartMenu);
        assert_eq!(start.len(), 9);
        let photos = start.iter().find(|e| e.id == "photos").unwrap();
        assert_eq!(photos.content.kind(), AppKind::Placeholder);
    }

    #[test]
    fn test_singleton_launch_refocuses() {
        let mut registry = WindowRegistry::new();
        let settings = find_entry(LaunchSurface::DesktopIcon, "settings").unwrap();
        launch(&mut registry, &settings);
        registry.minimize_window(&WindowId::from("settings"));

        let pinned = find_entry(LaunchSurface::Taskbar, "settings").unwrap();
        let win = launch(&mut registry, &pinned);
        assert!(!win.is_minimized);
        assert_eq!(win.z_index, 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_taskbar_and_desktop_share_browser_window() {
        let mut registry = WindowRegistry::new();
        launch(&mut registry, &find_entry(LaunchSurface::DesktopIcon, "browser").unwrap());
        launch(&mut registry, &find_entry(LaunchSurface::Taskbar, "browser").unwrap());
        assert_eq!(registry.len(), 1);
        // First launch wins the title
        assert_eq!(registry.list_windows()[0].title, "Browser");
    }

    #[test]
    fn test_documents_get_separate_windows() {
        let mut store = MemoryFileStore::new();
        let a = stored(&mut store, "a.txt");
        let b = stored(&mut store, "b.md");

        let mut registry = WindowRegistry::new();
        open_document(&mut registry, &a).unwrap();
        open_document(&mut registry, &b).unwrap();
        let again = open_document(&mut registry, &a).unwrap();
        assert_eq!(again.id, WindowId::new(format!("notepad-{}", a.id)));
        assert_eq!(again.z_index, 3);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_document_window_is_distinct_from_plain_notepad() {
        let mut store = MemoryFileStore::new();
        let doc = stored(&mut store, "notes.txt");

        let mut registry = WindowRegistry::new();
        launch(&mut registry, &find_entry(LaunchSurface::StartMenu, "notepad").unwrap());
        let win = open_document(&mut registry, &doc).unwrap();
        assert_eq!(win.content, AppContent::Notepad { file_id: Some(doc.id) });
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_non_text_document_is_rejected() {
        let mut store = MemoryFileStore::new();
        let photo = stored(&mut store, "holiday.JPG");

        let mut registry = WindowRegistry::new();
        let err = open_document(&mut registry, &photo).unwrap_err();
        assert_eq!(err, LaunchError::Unsupported("holiday.JPG".to_string()));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_file_categories() {
        assert_eq!(FileCategory::from_name("a.PNG"), FileCategory::Image);
        assert_eq!(FileCategory::from_name("clip.mov"), FileCategory::Video);
        assert_eq!(FileCategory::from_name("README"), FileCategory::Document);
        assert_eq!(FileCategory::from_name("notes.txt"), FileCategory::Document);
    }

    #[test]
    fn test_start_menu_placeholders() {
        let mail = find_entry(LaunchSurface::StartMenu, "mail").unwrap();
        assert_eq!(mail.content.kind(), AppKind::Placeholder);
        assert!(find_entry(LaunchSurface::DesktopIcon, "mail").is_none());
    }
}
