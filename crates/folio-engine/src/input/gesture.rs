// input/gesture.rs
//
// Horizontal drag tracking with a post-hoc swipe decision.
// Knows nothing about what is being swiped; the navigator acts on the result.

use crate::api::types::Direction;

/// Outcome of a finished drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Distance did not exceed the threshold.
    Stay,
    Navigate(Direction),
}

/// Map a final drag offset to a decision. The threshold itself does not
/// navigate. Dragging right reveals the previous item, dragging left the next.
pub fn decide_swipe(offset: f32, threshold: f32) -> SwipeDecision {
    if offset > threshold {
        SwipeDecision::Navigate(Direction::Previous)
    } else if offset < -threshold {
        SwipeDecision::Navigate(Direction::Next)
    } else {
        SwipeDecision::Stay
    }
}

/// A three-phase drag: start, any number of moves, end (or cancel).
#[derive(Debug, Clone)]
pub struct DragGesture {
    threshold: f32,
    offset: f32,
    active: bool,
}

impl DragGesture {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.abs(),
            offset: 0.0,
            active: false,
        }
    }

    /// Begin (or restart) a drag.
    pub fn start(&mut self) {
        self.offset = 0.0;
        self.active = true;
    }

    /// Record the latest absolute offset from the drag origin.
    /// Used only for visual tracking; ignored when no drag is active.
    pub fn track(&mut self, offset: f32) {
        if self.active && offset.is_finite() {
            self.offset = offset;
        }
    }

    /// Finish the drag with its final offset. Always resets the offset.
    pub fn finish(&mut self, offset: f32) -> SwipeDecision {
        let was_active = self.active;
        self.reset();
        if was_active {
            decide_swipe(offset, self.threshold)
        } else {
            SwipeDecision::Stay
        }
    }

    /// Abandon the drag (pointer capture lost). Same as finishing at zero.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.offset = 0.0;
        self.active = false;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(decide_swipe(50.0, 50.0), SwipeDecision::Stay);
        assert_eq!(decide_swipe(-50.0, 50.0), SwipeDecision::Stay);
        assert_eq!(decide_swipe(50.01, 50.0), SwipeDecision::Navigate(Direction::Previous));
        assert_eq!(decide_swipe(-50.01, 50.0), SwipeDecision::Navigate(Direction::Next));
        assert_eq!(decide_swipe(f32::NAN, 50.0), SwipeDecision::Stay);
    }

    #[test]
    fn move_tracks_absolute_offset() {
        let mut g = DragGesture::new(50.0);
        g.start();
        g.track(10.0);
        g.track(30.0);
        assert_eq!(g.offset(), 30.0);
        g.track(-5.0);
        assert_eq!(g.offset(), -5.0);
    }

    #[test]
    fn finish_resets_offset() {
        let mut g = DragGesture::new(50.0);
        g.start();
        g.track(-80.0);
        assert_eq!(g.finish(-80.0), SwipeDecision::Navigate(Direction::Next));
        assert_eq!(g.offset(), 0.0);
        assert!(!g.is_active());
    }

    #[test]
    fn cancel_leaves_no_residue() {
        let mut g = DragGesture::new(50.0);
        g.start();
        g.track(120.0);
        g.cancel();
        assert_eq!(g.offset(), 0.0);
        assert!(!g.is_active());
    }

    #[test]
    fn end_without_start_stays() {
        let mut g = DragGesture::new(50.0);
        g.track(200.0);
        assert_eq!(g.offset(), 0.0);
        assert_eq!(g.finish(200.0), SwipeDecision::Stay);
    }
}
