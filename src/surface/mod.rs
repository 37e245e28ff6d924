// Render/interaction surface: one frame per registry entry, pointer routing

mod frame;

pub use frame::{Capture, ChromeButton, FrameLayout, Viewport};

use crate::input_handler::{GestureMachine, Point, ResizeHandle};
use crate::state::window::WindowId;
use crate::state::WindowRegistry;
use tracing::debug;

/// Turns pointer events into registry operations and registry state into
/// frame layouts.
///
/// The surface owns the gesture state machine but never writes window state
/// itself: gesture results are committed through
/// [`WindowRegistry::set_geometry`].
pub struct InteractionSurface {
    gestures: GestureMachine,
    viewport: Viewport,
    taskbar_height: f64,
}

impl InteractionSurface {
    pub fn new(viewport: Viewport, taskbar_height: f64) -> Self {
        Self {
            gestures: GestureMachine::new(),
            viewport,
            taskbar_height,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn gestures(&self) -> &GestureMachine {
        &self.gestures
    }

    pub fn is_capturing(&self) -> bool {
        self.gestures.is_capturing()
    }

    /// Frame layouts in open order. Minimized windows get no frame.
    pub fn layout(&self, registry: &WindowRegistry) -> Vec<FrameLayout> {
        let focused = registry.topmost().map(|w| w.id.clone());
        let preview = self.gestures.preview();
        let content_interactive = !self.gestures.is_capturing();

        registry
            .list_windows()
            .iter()
            .filter(|w| w.is_visible())
            .map(|w| {
                let bounds = if w.is_maximized {
                    self.viewport.maximized_bounds(self.taskbar_height)
                } else {
                    match preview {
                        Some((id, rect)) if id == &w.id => rect,
                        _ => w.geometry,
                    }
                };

                FrameLayout {
                    id: w.id.clone(),
                    title: w.title.clone(),
                    content: w.content.clone(),
                    bounds,
                    z_index: w.z_index,
                    focused: focused.as_ref() == Some(&w.id),
                    maximized: w.is_maximized,
                    resizable: !w.is_maximized,
                    content_interactive,
                }
            })
            .collect()
    }

    /// Any press inside a frame focuses it
    pub fn frame_pointer_down(&mut self, registry: &mut WindowRegistry, id: &WindowId) {
        registry.focus_window(id);
    }

    /// Press on a title bar: focus, then start dragging unless maximized
    pub fn title_bar_pointer_down(
        &mut self,
        registry: &mut WindowRegistry,
        id: &WindowId,
        pointer: Point,
    ) -> Capture {
        let Some(win) = registry.focus_window(id) else {
            return self.drop_stale_gesture();
        };
        if !win.accepts_gestures() {
            debug!(window = %id, "drag rejected, window is maximized");
            return self.drop_stale_gesture();
        }

        let rect = win.geometry;
        let was_capturing = self.gestures.is_capturing();
        self.gestures.begin_move(id.clone(), pointer, rect);
        attach_unless(was_capturing)
    }

    /// Press on a resize handle: focus, then start resizing unless maximized
    pub fn resize_handle_pointer_down(
        &mut self,
        registry: &mut WindowRegistry,
        id: &WindowId,
        handle: ResizeHandle,
        pointer: Point,
    ) -> Capture {
        let Some(win) = registry.focus_window(id) else {
            return self.drop_stale_gesture();
        };
        if !win.accepts_gestures() {
            debug!(window = %id, "resize rejected, window is maximized");
            return self.drop_stale_gesture();
        }

        let rect = win.geometry;
        let was_capturing = self.gestures.is_capturing();
        self.gestures.begin_resize(id.clone(), handle, pointer, rect);
        attach_unless(was_capturing)
    }

    /// A rejected press still ends any gesture left over from a lost
    /// pointer-up, without committing it
    fn drop_stale_gesture(&mut self) -> Capture {
        match self.gestures.abort() {
            Some(_) => Capture::Detach,
            None => Capture::Unchanged,
        }
    }

    /// Document-wide pointer-move. Tracked wherever the pointer is.
    pub fn pointer_move(&mut self, registry: &WindowRegistry, pointer: Point) -> Capture {
        let Some(id) = self.gestures.active_window() else {
            return Capture::Unchanged;
        };

        // The window may have been closed, minimized or maximized by a
        // racing callback
        if !registry.get(id).map_or(false, |w| w.accepts_gestures()) {
            self.gestures.abort();
            return Capture::Detach;
        }

        self.gestures.update(pointer, registry.limits());
        Capture::Unchanged
    }

    /// Document-wide pointer-up: commit the gesture result and release
    pub fn pointer_up(&mut self, registry: &mut WindowRegistry, pointer: Point) -> Capture {
        if !self.gestures.is_capturing() {
            return Capture::Unchanged;
        }
        self.gestures.update(pointer, registry.limits());
        self.commit(registry)
    }

    /// Fallback release when the webview loses focus or is hidden and no
    /// pointer-up will arrive. Commits the last preview.
    pub fn release(&mut self, registry: &mut WindowRegistry) -> Capture {
        if !self.gestures.is_capturing() {
            return Capture::Unchanged;
        }
        debug!("releasing gesture after focus loss");
        self.commit(registry)
    }

    /// Title-bar buttons
    pub fn chrome_button(
        &mut self,
        registry: &mut WindowRegistry,
        id: &WindowId,
        button: ChromeButton,
    ) -> Capture {
        match button {
            ChromeButton::Minimize => {
                registry.minimize_window(id);
            }
            ChromeButton::Maximize => {
                registry.maximize_window(id);
            }
            ChromeButton::Close => {
                registry.close_window(id);
            }
        }

        if self.gestures.active_window() == Some(id) {
            self.gestures.abort();
            return Capture::Detach;
        }
        Capture::Unchanged
    }

    fn commit(&mut self, registry: &mut WindowRegistry) -> Capture {
        if let Some((id, rect)) = self.gestures.finish() {
            registry.set_geometry(&id, rect);
        }
        Capture::Detach
    }
}

impl Default for InteractionSurface {
    fn default() -> Self {
        Self::new(Viewport::default(), 48.0)
    }
}

fn attach_unless(already_capturing: bool) -> Capture {
    if already_capturing {
        Capture::Unchanged
    } else {
        Capture::Attach
    }
}
