//! Axis-aligned rectangles and overlap tests
//!
//! Everything in the game is a box: the bird, the pipes, the board.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: DVec2, size: DVec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap on both axes. Rectangles that only share an edge
    /// do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edge_is_not_a_hit() {
        let bird = Rect::new(45.0, 320.0, 34.0, 24.0);
        let pipe = Rect::new(79.0, 100.0, 64.0, 512.0);
        assert!(!bird.overlaps(&pipe));
        assert!(!pipe.overlaps(&bird));
    }

    #[test]
    fn test_one_pixel_in_is_a_hit() {
        let bird = Rect::new(45.0, 320.0, 34.0, 24.0);
        let pipe = Rect::new(78.0, 100.0, 64.0, 512.0);
        assert!(bird.overlaps(&pipe));
    }

    #[test]
    fn test_vertical_separation() {
        let bird = Rect::new(45.0, 320.0, 34.0, 24.0);
        // Top pipe whose bottom edge sits exactly on the bird's top edge
        let top = Rect::new(40.0, 320.0 - 512.0, 64.0, 512.0);
        assert!(!bird.overlaps(&top));
        // Bottom pipe starting exactly at the bird's bottom edge
        let bottom = Rect::new(40.0, 344.0, 64.0, 512.0);
        assert!(!bird.overlaps(&bottom));
        // Nudge the bottom pipe up
        let bottom = Rect::new(40.0, 343.5, 64.0, 512.0);
        assert!(bird.overlaps(&bottom));
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), DVec2::new(25.0, 40.0));
    }
}
