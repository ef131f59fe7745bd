// src/geometry.rs
//! Integer geometry in surface pixel space.
//!
//! ## Coordinate System
//!
//! All coordinates are physical pixels with a **top-left origin**: `x` grows to
//! the right, `y` grows downward. A `Rect` covers the half-open ranges
//! `[left, right) × [top, bottom)`.
//!
//! The GPU adapter is the only place that converts to a bottom-left origin;
//! see [`crate::renderer::gpu::scissor_from_rect`].

use serde::{Deserialize, Serialize};

/// A point in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned integer rectangle.
///
/// Width and height may arrive negative from callers computing geometry on the
/// fly. Every consumer calls [`Rect::normalized`] (directly or through
/// [`Rect::intersect`]) before using the extents, which treats a negative
/// extent as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rect spanning `[left, right) × [top, bottom)`.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// True when the rect covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Clamps negative extents to zero. The origin is left untouched.
    pub fn normalized(&self) -> Rect {
        Rect::new(self.x, self.y, self.width.max(0), self.height.max(0))
    }

    /// Overlap of two rects.
    ///
    /// Both inputs are normalized first. If the overlap is empty along either
    /// axis the result has zero width *and* zero height, positioned at the
    /// larger of the two origins on each axis. The operation is commutative.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();

        let left = a.left().max(b.left());
        let top = a.top().max(b.top());
        let right = a.right().min(b.right());
        let bottom = a.bottom().min(b.bottom());

        if right <= left || bottom <= top {
            return Rect::new(left, top, 0, 0);
        }
        Rect::from_edges(left, top, right, bottom)
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    /// True when `other` lies entirely inside `self`. An empty `other` is
    /// contained by anything.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        let other = other.normalized();
        if other.is_empty() {
            return true;
        }
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rects() -> Vec<Rect> {
        vec![
            Rect::new(0, 0, 10, 10),
            Rect::new(5, 5, 10, 10),
            Rect::new(-3, 2, 4, 20),
            Rect::new(20, 20, 5, 5),
            Rect::new(3, 3, -4, 6),
            Rect::new(0, 0, 0, 0),
        ]
    }

    #[test]
    fn test_derived_edges() {
        let r = Rect::new(2, 3, 4, 5);
        assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (2, 3, 6, 8));
    }

    #[test]
    fn test_normalized_clamps_negative_extents() {
        assert_eq!(Rect::new(1, 2, -5, 7).normalized(), Rect::new(1, 2, 0, 7));
        assert_eq!(Rect::new(1, 2, 5, -7).normalized(), Rect::new(1, 2, 5, 0));
        assert!(Rect::new(1, 2, -5, 7).normalized().is_empty());
    }

    #[test]
    fn test_intersect_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 6, 10, 10);
        assert_eq!(a.intersect(&b), Rect::new(5, 6, 5, 4));
    }

    #[test]
    fn test_intersect_disjoint_is_zero_sized_at_max_origin() {
        // Contract: empty overlap -> zero width and height at the max origins
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 3, 5, 5);
        assert_eq!(a.intersect(&b), Rect::new(20, 3, 0, 0));

        // Overlapping on x only still collapses both extents
        let c = Rect::new(2, 50, 4, 4);
        assert_eq!(a.intersect(&c), Rect::new(2, 50, 0, 0));
    }

    #[test]
    fn test_intersect_is_commutative() {
        let mut rects = sample_rects();
        rects.push(Rect::new(i32::MAX - 2, 0, 100, 10));
        for a in &rects {
            for b in &rects {
                assert_eq!(a.intersect(b), b.intersect(a), "a={:?} b={:?}", a, b);
            }
        }
    }

    #[test]
    fn test_intersect_with_self_is_normalized() {
        for a in sample_rects() {
            let n = a.normalized();
            let expected = if n.is_empty() {
                Rect::new(n.x, n.y, 0, 0)
            } else {
                n
            };
            assert_eq!(a.intersect(&a), expected, "a={:?}", a);
        }
    }

    #[test]
    fn test_saturating_edges_do_not_overflow() {
        let r = Rect::new(i32::MAX - 2, 0, 100, 10);
        assert_eq!(r.right(), i32::MAX);
        let clipped = r.intersect(&Rect::new(0, 0, i32::MAX, 10));
        assert_eq!(clipped, Rect::new(i32::MAX - 2, 0, 2, 10));
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(0, 0, 4, 4);
        assert!(r.contains_point(0, 0));
        assert!(r.contains_point(3, 3));
        assert!(!r.contains_point(4, 0));
        assert!(r.contains_rect(&Rect::new(1, 1, 3, 3)));
        assert!(!r.contains_rect(&Rect::new(1, 1, 4, 3)));
        assert!(r.contains_rect(&Rect::new(100, 100, 0, 0)));
    }
}
