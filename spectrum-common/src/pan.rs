//! Drag-to-pan state for the scrollable plot viewport

/// Scroll position of the viewport, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragAnchor {
    pointer_x: f64,
    pointer_y: f64,
    scroll: ScrollOffset,
}

/// Tracks one drag gesture at a time
///
/// Dragging moves the content with the pointer, so the scroll offset moves
/// the opposite way.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    anchor: Option<DragAnchor>,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Start a drag from the given pointer position and scroll offset.
    /// Ignored while another drag is active.
    pub fn begin(&mut self, pointer_x: f64, pointer_y: f64, scroll: ScrollOffset) -> bool {
        if self.anchor.is_some() {
            return false;
        }
        self.anchor = Some(DragAnchor {
            pointer_x,
            pointer_y,
            scroll,
        });
        true
    }

    /// Scroll offset for the current pointer position, or `None` when not
    /// dragging.
    pub fn scroll_for(&self, pointer_x: f64, pointer_y: f64) -> Option<ScrollOffset> {
        let anchor = self.anchor?;
        let dx = pointer_x - anchor.pointer_x;
        let dy = pointer_y - anchor.pointer_y;
        Some(ScrollOffset {
            x: anchor.scroll.x - dx,
            y: anchor.scroll.y - dy,
        })
    }

    /// Finish the drag. Returns whether one was active.
    pub fn end(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    /// CSS cursor for the viewport
    pub fn cursor(&self) -> &'static str {
        if self.is_dragging() {
            "grabbing"
        } else {
            "grab"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_inverts_pointer_delta() {
        let mut drag = DragState::default();
        assert!(drag.begin(100.0, 200.0, ScrollOffset { x: 300.0, y: 400.0 }));
        assert_eq!(
            drag.scroll_for(130.0, 180.0),
            Some(ScrollOffset { x: 270.0, y: 420.0 })
        );
    }

    #[test]
    fn no_scroll_without_active_drag() {
        let drag = DragState::default();
        assert_eq!(drag.scroll_for(10.0, 10.0), None);
        assert_eq!(drag.cursor(), "grab");
    }

    #[test]
    fn release_freezes_scroll() {
        let mut drag = DragState::default();
        drag.begin(0.0, 0.0, ScrollOffset::default());
        let last = drag.scroll_for(-50.0, -20.0);
        assert_eq!(last, Some(ScrollOffset { x: 50.0, y: 20.0 }));
        assert!(drag.end());
        assert_eq!(drag.scroll_for(-500.0, -500.0), None);
        assert!(!drag.end());
    }

    #[test]
    fn second_press_does_not_restart_drag() {
        let mut drag = DragState::default();
        drag.begin(0.0, 0.0, ScrollOffset::default());
        assert_eq!(drag.cursor(), "grabbing");
        assert!(!drag.begin(50.0, 50.0, ScrollOffset { x: 9.0, y: 9.0 }));
        assert_eq!(
            drag.scroll_for(10.0, 0.0),
            Some(ScrollOffset { x: -10.0, y: 0.0 })
        );
    }
}
