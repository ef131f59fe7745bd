// src/clip.rs

//! Hierarchical clip rectangles.
//!
//! The active clip is the intersection of every pushed rectangle with the
//! surface bounds. Each entry is stored already intersected with its parent,
//! so the top of the stack *is* the active clip and `push`/`pop` are O(1).
//! The caller's original request is kept alongside so the chain can be
//! re-resolved if the bounds change.

use crate::geometry::Rect;
use log::{debug, trace};

#[derive(Debug, Clone, Copy)]
struct ClipEntry {
    requested: Rect,
    resolved: Rect,
}

/// Stack of clip rectangles owned by a single renderer.
#[derive(Debug, Clone)]
pub struct ClipStack {
    bounds: Rect,
    stack: Vec<ClipEntry>,
}

impl ClipStack {
    /// Creates an empty stack whose active clip is `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: bounds.normalized(),
            stack: Vec::new(),
        }
    }

    /// Surface bounds every entry is clamped to.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replaces the surface bounds and re-resolves every stacked request
    /// against them, preserving the parent/child nesting. Returns `true`
    /// when the bounds actually changed.
    ///
    /// Used by backends whose surface size is owned by someone else (the GPU
    /// viewport) and may change between frames.
    pub fn set_bounds(&mut self, bounds: Rect) -> bool {
        let bounds = bounds.normalized();
        if bounds == self.bounds {
            return false;
        }
        let mut parent = bounds;
        for entry in self.stack.iter_mut() {
            entry.resolved = entry.requested.intersect(&parent);
            parent = entry.resolved;
        }
        self.bounds = bounds;
        true
    }

    /// The narrowest clip currently in effect.
    pub fn active(&self) -> Rect {
        self.stack
            .last()
            .map(|entry| entry.resolved)
            .unwrap_or(self.bounds)
    }

    /// Number of pushed entries.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Narrows the active clip to `rect`.
    ///
    /// Negative extents count as empty; the result is intersected with the
    /// surface bounds and with the current top of stack, so a child can never
    /// escape its parent.
    pub fn push(&mut self, rect: Rect) {
        let resolved = rect.intersect(&self.active());
        debug!(
            "ClipStack: push {:?} -> active {:?} (depth {})",
            rect,
            resolved,
            self.stack.len() + 1
        );
        self.stack.push(ClipEntry {
            requested: rect,
            resolved,
        });
    }

    /// Drops the most recent clip. Popping an empty stack does nothing.
    pub fn pop(&mut self) {
        match self.stack.pop() {
            Some(popped) => debug!(
                "ClipStack: pop {:?} -> active {:?} (depth {})",
                popped.resolved,
                self.active(),
                self.stack.len()
            ),
            None => trace!("ClipStack: pop on empty stack ignored"),
        }
    }

    /// Resolves a draw request against the active clip.
    ///
    /// Returns `None` when nothing would be drawn: a negative or zero-sized
    /// request, or one lying fully outside the clip.
    pub fn clip(&self, requested: Rect) -> Option<Rect> {
        let clipped = requested.intersect(&self.active());
        if clipped.width <= 0 || clipped.height <= 0 {
            None
        } else {
            Some(clipped)
        }
    }

    /// True when the pixel at `(x, y)` lies inside the active clip.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.active().contains_point(x, y)
    }
}
