// Pointer gesture state machine: idle, dragging a title bar, or resizing a frame

use super::geometry::{move_rect, resize_rect};
use super::types::{Point, Rect, ResizeHandle, SizeLimits};
use crate::state::window::WindowId;
use serde::Serialize;
use tracing::debug;

/// Snapshot taken when a gesture starts, plus the latest previewed rect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GestureSession {
    pub window_id: WindowId,
    pub start_pointer: Point,
    pub start_rect: Rect,
    pub current_rect: Rect,
}

impl GestureSession {
    fn new(window_id: WindowId, start_pointer: Point, start_rect: Rect) -> Self {
        Self {
            window_id,
            start_pointer,
            start_rect,
            current_rect: start_rect,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(GestureSession),
    Resizing {
        session: GestureSession,
        handle: ResizeHandle,
    },
}

/// Owns the single active gesture of the surface.
///
/// A gesture lives from pointer-down on a handle until pointer-up anywhere,
/// and every pointer-move in between is applied regardless of where the
/// pointer is.
#[derive(Debug, Default)]
pub struct GestureMachine {
    state: GestureState,
}

impl GestureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// True while document-wide pointer events must be delivered here
    pub fn is_capturing(&self) -> bool {
        !matches!(self.state, GestureState::Idle)
    }

    /// The window the active gesture targets, if any
    pub fn active_window(&self) -> Option<&WindowId> {
        self.session().map(|s| &s.window_id)
    }

    /// Latest previewed rect of the active gesture
    pub fn preview(&self) -> Option<(&WindowId, Rect)> {
        self.session().map(|s| (&s.window_id, s.current_rect))
    }

    /// Start dragging a window by its title bar.
    /// A session left over from a lost pointer-up is discarded.
    pub fn begin_move(&mut self, window_id: WindowId, pointer: Point, rect: Rect) {
        self.discard_stale();
        debug!(window = %window_id, "move gesture started");
        self.state = GestureState::Dragging(GestureSession::new(window_id, pointer, rect));
    }

    /// Start resizing a window from one of its handles
    pub fn begin_resize(
        &mut self,
        window_id: WindowId,
        handle: ResizeHandle,
        pointer: Point,
        rect: Rect,
    ) {
        self.discard_stale();
        debug!(window = %window_id, ?handle, "resize gesture started");
        self.state = GestureState::Resizing {
            session: GestureSession::new(window_id, pointer, rect),
            handle,
        };
    }

    /// Apply a pointer-move and return the previewed rect
    pub fn update(&mut self, pointer: Point, limits: SizeLimits) -> Option<(WindowId, Rect)> {
        match &mut self.state {
            GestureState::Idle => None,
            GestureState::Dragging(session) => {
                session.current_rect =
                    move_rect(session.start_rect, session.start_pointer, pointer);
                Some((session.window_id.clone(), session.current_rect))
            }
            GestureState::Resizing { session, handle } => {
                session.current_rect = resize_rect(
                    session.start_rect,
                    *handle,
                    session.start_pointer,
                    pointer,
                    limits,
                );
                Some((session.window_id.clone(), session.current_rect))
            }
        }
    }

    /// End the gesture, returning the rect to commit
    pub fn finish(&mut self) -> Option<(WindowId, Rect)> {
        match std::mem::take(&mut self.state) {
            GestureState::Idle => None,
            GestureState::Dragging(session) | GestureState::Resizing { session, .. } => {
                debug!(window = %session.window_id, "gesture finished");
                Some((session.window_id, session.current_rect))
            }
        }
    }

    /// Drop the gesture without committing anything
    pub fn abort(&mut self) -> Option<WindowId> {
        match std::mem::take(&mut self.state) {
            GestureState::Idle => None,
            GestureState::Dragging(session) | GestureState::Resizing { session, .. } => {
                debug!(window = %session.window_id, "gesture aborted");
                Some(session.window_id)
            }
        }
    }

    fn session(&self) -> Option<&GestureSession> {
        match &self.state {
            GestureState::Idle => None,
            GestureState::Dragging(session) | GestureState::Resizing { session, .. } => {
                Some(session)
            }
        }
    }

    fn discard_stale(&mut self) {
        if let Some(id) = self.abort() {
            debug!(window = %id, "discarded gesture that never saw pointer-up");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::new(100.0, 50.0, 800.0, 600.0)
    }

    #[test]
    fn test_idle_ignores_pointer_events() {
        let mut machine = GestureMachine::new();
        assert!(!machine.is_capturing());
        assert_eq!(machine.update(Point::new(5.0, 5.0), SizeLimits::default()), None);
        assert_eq!(machine.finish(), None);
    }

    #[test]
    fn test_drag_session_tracks_pointer_until_finish() {
        let mut machine = GestureMachine::new();
        let id = WindowId::from("notepad");
        machine.begin_move(id.clone(), Point::new(200.0, 60.0), rect());
        assert!(machine.is_capturing());

        machine.update(Point::new(250.0, 80.0), SizeLimits::default());
        let (_, preview) = machine
            .update(Point::new(300.0, 100.0), SizeLimits::default())
            .unwrap();
        assert_eq!(preview, Rect::new(200.0, 90.0, 800.0, 600.0));

        let (done_id, committed) = machine.finish().unwrap();
        assert_eq!(done_id, id);
        assert_eq!(committed, preview);
        assert!(!machine.is_capturing());
    }

    #[test]
    fn test_finish_without_movement_commits_start_rect() {
        let mut machine = GestureMachine::new();
        machine.begin_resize(
            WindowId::from("calculator"),
            ResizeHandle::Right,
            Point::new(900.0, 300.0),
            rect(),
        );
        let (_, committed) = machine.finish().unwrap();
        assert_eq!(committed, rect());
    }

    #[test]
    fn test_new_gesture_replaces_stale_one() {
        let mut machine = GestureMachine::new();
        machine.begin_move(WindowId::from("a"), Point::default(), rect());
        machine.begin_resize(
            WindowId::from("b"),
            ResizeHandle::Bottom,
            Point::default(),
            rect(),
        );
        assert_eq!(machine.active_window(), Some(&WindowId::from("b")));
        assert!(matches!(machine.state(), GestureState::Resizing { .. }));
    }

    #[test]
    fn test_abort_returns_to_idle() {
        let mut machine = GestureMachine::new();
        machine.begin_move(WindowId::from("a"), Point::default(), rect());
        assert_eq!(machine.abort(), Some(WindowId::from("a")));
        assert_eq!(machine.state(), &GestureState::Idle);
    }
}
