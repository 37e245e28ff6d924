use self::window::{WindowId, WindowInstance};
use crate::input_handler::geometry::clamp_size;
use crate::input_handler::{Rect, SizeLimits};
use crate::launcher::AppContent;
use tracing::debug;

pub mod window;

/// Frame bounds given to a freshly opened window
pub const DEFAULT_WINDOW_GEOMETRY: Rect = Rect {
    x: 100.0,
    y: 50.0,
    width: 800.0,
    height: 600.0,
};

/// Authoritative table of open windows.
///
/// Every operation is total: an unknown id is a silent no-op, because the UI
/// can race a close against a late gesture callback.
pub struct WindowRegistry {
    windows: Vec<WindowInstance>, // Open order, used for rendering and the taskbar
    last_z_index: u64,            // High-water mark, never decreases
    default_geometry: Rect,
    limits: SizeLimits,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::with_defaults(DEFAULT_WINDOW_GEOMETRY, SizeLimits::default())
    }

    pub fn with_defaults(default_geometry: Rect, limits: SizeLimits) -> Self {
        Self {
            windows: Vec::new(),
            last_z_index: 0,
            default_geometry: clamp_size(default_geometry, limits),
            limits,
        }
    }

    pub fn limits(&self) -> SizeLimits {
        self.limits
    }

    /// Open a window, or bring the existing one with this id back to front.
    ///
    /// Re-opening never touches title, content, geometry or maximized state.
    pub fn open_window(
        &mut self,
        id: WindowId,
        title: impl Into<String>,
        content: AppContent,
    ) -> &WindowInstance {
        let z_index = self.next_z_index();

        let index = match self.position(&id) {
            Some(index) => {
                let win = &mut self.windows[index];
                win.is_minimized = false;
                win.z_index = z_index;
                debug!(window = %id, z_index, "reactivated existing window");
                index
            }
            None => {
                debug!(window = %id, z_index, "opened window");
                self.windows.push(WindowInstance {
                    id,
                    title: title.into(),
                    content,
                    is_minimized: false,
                    is_maximized: false,
                    z_index,
                    geometry: self.default_geometry,
                    restore_geometry: None,
                });
                self.windows.len() - 1
            }
        };

        &self.windows[index]
    }

    /// Close a window permanently.
    /// Returns the removed instance, or None if it was already gone.
    pub fn close_window(&mut self, id: &WindowId) -> Option<WindowInstance> {
        let index = self.position(id)?;
        debug!(window = %id, "closed window");
        Some(self.windows.remove(index))
    }

    /// Hide a window. Its stacking key and geometry are kept for restore.
    pub fn minimize_window(&mut self, id: &WindowId) -> Option<&WindowInstance> {
        let win = self.get_mut(id)?;
        win.is_minimized = true;
        debug!(window = %id, "minimized window");
        Some(&*win)
    }

    /// Toggle maximized state.
    ///
    /// Entering snapshots the current geometry; leaving restores that
    /// snapshot exactly.
    pub fn maximize_window(&mut self, id: &WindowId) -> Option<&WindowInstance> {
        let win = self.get_mut(id)?;
        if win.is_maximized {
            if let Some(geometry) = win.restore_geometry.take() {
                win.geometry = geometry;
            }
            win.is_maximized = false;
        } else {
            win.restore_geometry = Some(win.geometry);
            win.is_maximized = true;
        }
        debug!(window = %id, maximized = win.is_maximized, "toggled maximize");
        Some(&*win)
    }

    /// Raise a window to the top and un-minimize it
    pub fn focus_window(&mut self, id: &WindowId) -> Option<&WindowInstance> {
        // Unknown ids must not consume a stacking key
        let index = self.position(id)?;
        let z_index = self.next_z_index();
        let win = &mut self.windows[index];
        win.z_index = z_index;
        win.is_minimized = false;
        debug!(window = %id, z_index, "focused window");
        Some(&*win)
    }

    /// Commit the result of a move or resize gesture.
    ///
    /// The size is clamped to the minimums. Maximized windows ignore the
    /// write since their geometry is not on screen.
    pub fn set_geometry(&mut self, id: &WindowId, rect: Rect) -> Option<&WindowInstance> {
        let limits = self.limits;
        let win = self.get_mut(id)?;
        if win.is_maximized {
            debug!(window = %id, "ignored geometry write on maximized window");
            return None;
        }
        win.geometry = clamp_size(rect, limits);
        Some(&*win)
    }

    /// All windows in the order they were opened
    pub fn list_windows(&self) -> &[WindowInstance] {
        &self.windows
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.position(id).is_some()
    }

    /// The focused window: highest stacking key among visible windows
    pub fn topmost(&self) -> Option<&WindowInstance> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
    }

    pub fn is_focused(&self, id: &WindowId) -> bool {
        self.topmost().map_or(false, |w| &w.id == id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn get_mut(&mut self, id: &WindowId) -> Option<&mut WindowInstance> {
        self.windows.iter_mut().find(|w| &w.id == id)
    }

    fn position(&self, id: &WindowId) -> Option<usize> {
        self.windows.iter().position(|w| &w.id == id)
    }

    fn next_z_index(&mut self) -> u64 {
        self.last_z_index += 1;
        self.last_z_index
    }
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(registry: &mut WindowRegistry, id: &str) -> u64 {
        registry
            .open_window(WindowId::from(id), id, AppContent::Calculator)
            .z_index
    }

    #[test]
    fn test_first_window_gets_z_index_one() {
        let mut registry = WindowRegistry::new();
        assert_eq!(open(&mut registry, "a"), 1);
        let win = &registry.list_windows()[0];
        assert!(!win.is_minimized);
        assert!(!win.is_maximized);
        assert_eq!(win.geometry, DEFAULT_WINDOW_GEOMETRY);
    }

    #[test]
    fn test_reopen_does_not_duplicate() {
        let mut registry = WindowRegistry::new();
        for _ in 0..5 {
            registry.open_window(WindowId::from("settings"), "Settings", AppContent::Settings);
        }
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.list_windows()[0].z_index, 5);
    }

    #[test]
    fn test_reopen_keeps_content_and_geometry() {
        let mut registry = WindowRegistry::new();
        let id = WindowId::from("browser");
        registry.open_window(id.clone(), "Browser", AppContent::Browser);
        let moved = Rect::new(10.0, 20.0, 640.0, 480.0);
        registry.set_geometry(&id, moved);
        registry.minimize_window(&id);

        let win = registry.open_window(id.clone(), "Edge", AppContent::Calculator);
        assert_eq!(win.title, "Browser");
        assert_eq!(win.content, AppContent::Browser);
        assert_eq!(win.geometry, moved);
        assert!(!win.is_minimized);
    }

    #[test]
    fn test_focus_raises_above_everything() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        registry.focus_window(&WindowId::from("a"));

        let a = registry.get(&WindowId::from("a")).unwrap();
        let b = registry.get(&WindowId::from("b")).unwrap();
        assert_eq!(a.z_index, 3);
        assert_eq!(b.z_index, 2);
        assert!(registry.is_focused(&WindowId::from("a")));
    }

    #[test]
    fn test_minimized_window_is_never_topmost() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        let b = WindowId::from("b");
        registry.minimize_window(&b);

        assert_eq!(registry.get(&b).unwrap().z_index, 2);
        assert_eq!(registry.topmost().unwrap().id, WindowId::from("a"));

        registry.minimize_window(&WindowId::from("a"));
        assert!(registry.topmost().is_none());
    }

    #[test]
    fn test_focus_restores_minimized() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        let a = WindowId::from("a");
        registry.minimize_window(&a);
        let win = registry.focus_window(&a).unwrap();
        assert!(!win.is_minimized);
    }

    #[test]
    fn test_z_index_is_never_reused_after_close() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        registry.close_window(&WindowId::from("b"));
        registry.close_window(&WindowId::from("a"));
        assert_eq!(open(&mut registry, "c"), 3);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        let a = WindowId::from("a");
        assert!(registry.close_window(&a).is_some());
        assert!(registry.close_window(&a).is_none());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.list_windows()[0].id, WindowId::from("b"));
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        let ghost = WindowId::from("ghost");
        assert!(registry.minimize_window(&ghost).is_none());
        assert!(registry.maximize_window(&ghost).is_none());
        assert!(registry.focus_window(&ghost).is_none());
        assert!(registry.set_geometry(&ghost, DEFAULT_WINDOW_GEOMETRY).is_none());
        // No stacking key was consumed by the ghost focus
        assert_eq!(open(&mut registry, "b"), 2);
    }

    #[test]
    fn test_maximize_twice_restores_previous_geometry() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        let a = WindowId::from("a");
        let before = Rect::new(33.0, 44.0, 512.0, 384.0);
        registry.set_geometry(&a, before);

        let win = registry.maximize_window(&a).unwrap();
        assert!(win.is_maximized);
        assert_eq!(win.restore_geometry, Some(before));

        let win = registry.maximize_window(&a).unwrap();
        assert!(!win.is_maximized);
        assert_eq!(win.geometry, before);
        assert_eq!(win.restore_geometry, None);
    }

    #[test]
    fn test_set_geometry_clamps_and_skips_maximized() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        let a = WindowId::from("a");
        let win = registry
            .set_geometry(&a, Rect::new(0.0, 0.0, 10.0, 10.0))
            .unwrap();
        assert_eq!(win.geometry, Rect::new(0.0, 0.0, 300.0, 200.0));

        registry.maximize_window(&a);
        assert!(registry
            .set_geometry(&a, Rect::new(5.0, 5.0, 900.0, 900.0))
            .is_none());
        registry.maximize_window(&a);
        assert_eq!(
            registry.get(&a).unwrap().geometry,
            Rect::new(0.0, 0.0, 300.0, 200.0)
        );
    }

    #[test]
    fn test_list_windows_keeps_open_order() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        open(&mut registry, "c");
        registry.focus_window(&WindowId::from("a"));
        let ids: Vec<_> = registry
            .list_windows()
            .iter()
            .map(|w| w.id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
