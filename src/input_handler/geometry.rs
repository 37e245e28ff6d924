// Geometry transforms applied while a move or resize gesture is active

use super::types::{Point, Rect, ResizeHandle, SizeLimits};

/// Translate a window by the pointer delta since the gesture started.
///
/// No viewport clamping: frames may be dragged partly off-screen.
pub fn move_rect(start_rect: Rect, start_pointer: Point, pointer: Point) -> Rect {
    let (dx, dy) = pointer.delta_from(start_pointer);
    Rect {
        x: start_rect.x + dx,
        y: start_rect.y + dy,
        ..start_rect
    }
}

/// Grow or shrink a window from its right and/or bottom edge.
///
/// The position never changes. Each affected dimension is clamped to the
/// minimum in `limits`; unaffected dimensions keep their start value.
pub fn resize_rect(
    start_rect: Rect,
    handle: ResizeHandle,
    start_pointer: Point,
    pointer: Point,
    limits: SizeLimits,
) -> Rect {
    let (dx, dy) = pointer.delta_from(start_pointer);

    let mut rect = start_rect;
    if handle.affects_width() {
        rect.width = limits.min_width.max(start_rect.width + dx);
    }
    if handle.affects_height() {
        rect.height = limits.min_height.max(start_rect.height + dy);
    }
    rect
}

/// Clamp a rectangle's size to the minimums, keeping its position
pub fn clamp_size(rect: Rect, limits: SizeLimits) -> Rect {
    Rect {
        width: rect.width.max(limits.min_width),
        height: rect.height.max(limits.min_height),
        ..rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Rect {
        Rect::new(100.0, 50.0, 800.0, 600.0)
    }

    #[test]
    fn test_move_follows_pointer_delta() {
        let moved = move_rect(start(), Point::new(10.0, 10.0), Point::new(60.0, -40.0));
        assert_eq!(moved, Rect::new(150.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn test_move_is_not_clamped_to_viewport() {
        let moved = move_rect(start(), Point::new(0.0, 0.0), Point::new(-5000.0, 9000.0));
        assert_eq!(moved.x, -4900.0);
        assert_eq!(moved.y, 9050.0);
    }

    #[test]
    fn test_resize_right_only_changes_width() {
        let rect = resize_rect(
            start(),
            ResizeHandle::Right,
            Point::new(900.0, 300.0),
            Point::new(950.0, 500.0),
            SizeLimits::default(),
        );
        assert_eq!(rect, Rect::new(100.0, 50.0, 850.0, 600.0));
    }

    #[test]
    fn test_resize_bottom_only_changes_height() {
        let rect = resize_rect(
            start(),
            ResizeHandle::Bottom,
            Point::new(400.0, 650.0),
            Point::new(700.0, 600.0),
            SizeLimits::default(),
        );
        assert_eq!(rect, Rect::new(100.0, 50.0, 800.0, 550.0));
    }

    #[test]
    fn test_resize_corner_changes_both() {
        let rect = resize_rect(
            start(),
            ResizeHandle::BottomRight,
            Point::new(900.0, 650.0),
            Point::new(920.0, 700.0),
            SizeLimits::default(),
        );
        assert_eq!(rect, Rect::new(100.0, 50.0, 820.0, 650.0));
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let rect = resize_rect(
            start(),
            ResizeHandle::BottomRight,
            Point::new(0.0, 0.0),
            Point::new(-10000.0, -10000.0),
            SizeLimits::default(),
        );
        assert_eq!(rect.width, 300.0);
        assert_eq!(rect.height, 200.0);
        // Anchor stays put
        assert_eq!(rect.origin(), start().origin());
    }

    #[test]
    fn test_clamp_size_keeps_position() {
        let rect = clamp_size(Rect::new(-20.0, 5.0, 10.0, 900.0), SizeLimits::default());
        assert_eq!(rect, Rect::new(-20.0, 5.0, 300.0, 900.0));
    }
}
