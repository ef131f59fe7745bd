// src/renderer/gl.rs

//! The slice of an immediate-mode GL context the GPU adapter needs.
//!
//! A live context (window, driver, loaded function pointers) belongs to the
//! embedding application; the adapter only ever talks to it through
//! [`GlContext`]. [`RecordingContext`] implements the trait without a GPU by
//! recording every call, and can replay the recorded stream onto a
//! [`PixelRenderer`] for inspection.
//!
//! Vertex coordinates are in surface space with a top-left origin (the
//! embedder sets up the matching orthographic projection). Scissor
//! coordinates are the only bottom-left-origin values crossing this boundary.

use bitflags::bitflags;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Rect;

use super::paint::{Compositing, GradientCorners};
use super::pixel::PixelRenderer;
use super::Renderer;

bitflags! {
    /// Server-side capabilities toggled with `glEnable`/`glDisable`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct GlCaps: u32 {
        const SCISSOR_TEST = 1 << 0;
        const BLEND        = 1 << 1;
    }
}

/// Immediate-mode drawing surface.
pub trait GlContext {
    /// Current viewport size in pixels. Queried on every clip change, never
    /// cached by the adapter.
    fn viewport_size(&self) -> (i32, i32);

    fn enable(&mut self, caps: GlCaps);

    fn disable(&mut self, caps: GlCaps);

    /// Sets the scissor box in bottom-left-origin window coordinates.
    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Starts a batch of quads (`glBegin(GL_QUADS)`).
    fn begin_quads(&mut self);

    /// Sets the color used by subsequent vertices.
    fn color4ub(&mut self, color: Rgba);

    fn vertex2i(&mut self, x: i32, y: i32);

    /// Closes the batch opened by [`GlContext::begin_quads`].
    fn end(&mut self);
}

/// One recorded [`GlContext`] call. Serializable so a recording can be
/// saved and diffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlCall {
    Enable(GlCaps),
    Disable(GlCaps),
    Scissor {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    BeginQuads,
    Color(Rgba),
    Vertex(i32, i32),
    End,
}

/// A quad reassembled from a recorded call stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedQuad {
    /// `(x, y, color)` in emission order.
    pub vertices: [(i32, i32, Rgba); 4],
}

impl RecordedQuad {
    /// Bounding rect of the four vertices.
    pub fn bounds(&self) -> Rect {
        let xs = self.vertices.map(|v| v.0);
        let ys = self.vertices.map(|v| v.1);
        let min = |v: [i32; 4]| v.into_iter().min().unwrap_or(0);
        let max = |v: [i32; 4]| v.into_iter().max().unwrap_or(0);
        Rect::from_edges(min(xs), min(ys), max(xs), max(ys))
    }

    /// The shared color when all four vertices agree.
    pub fn flat_color(&self) -> Option<Rgba> {
        let first = self.vertices[0].2;
        self.vertices
            .iter()
            .all(|v| v.2 == first)
            .then_some(first)
    }
}

/// A [`GlContext`] that records calls instead of drawing.
#[derive(Debug, Clone)]
pub struct RecordingContext {
    viewport: (i32, i32),
    calls: Vec<GlCall>,
}

impl RecordingContext {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            viewport: (width, height),
            calls: Vec::new(),
        }
    }

    /// Simulates a window resize.
    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.viewport = (width, height);
    }

    pub fn calls(&self) -> &[GlCall] {
        &self.calls
    }

    /// Returns the recorded calls and starts a fresh recording.
    pub fn take_calls(&mut self) -> Vec<GlCall> {
        std::mem::take(&mut self.calls)
    }

    /// Every complete quad in the recording, in emission order.
    pub fn quads(&self) -> Vec<RecordedQuad> {
        let mut quads = Vec::new();
        let mut color = Rgba::WHITE;
        let mut pending: Vec<(i32, i32, Rgba)> = Vec::with_capacity(4);
        for call in &self.calls {
            match *call {
                GlCall::Color(c) => color = c,
                GlCall::Vertex(x, y) => {
                    pending.push((x, y, color));
                    if pending.len() == 4 {
                        quads.push(RecordedQuad {
                            vertices: [pending[0], pending[1], pending[2], pending[3]],
                        });
                        pending.clear();
                    }
                }
                GlCall::BeginQuads | GlCall::End => pending.clear(),
                _ => {}
            }
        }
        quads
    }

    /// The most recent scissor box, if any.
    pub fn last_scissor(&self) -> Option<Rect> {
        self.calls.iter().rev().find_map(|call| match *call {
            GlCall::Scissor {
                x,
                y,
                width,
                height,
            } => Some(Rect::new(x, y, width, height)),
            _ => None,
        })
    }

    /// Capabilities enabled at the end of the recording.
    pub fn enabled_caps(&self) -> GlCaps {
        let mut caps = GlCaps::empty();
        for call in &self.calls {
            match *call {
                GlCall::Enable(c) => caps.insert(c),
                GlCall::Disable(c) => caps.remove(c),
                _ => {}
            }
        }
        caps
    }

    /// Rasterizes the recording onto a fresh transparent surface the size of
    /// the viewport.
    ///
    /// Flat quads become rect fills; quads with per-vertex colors are filled
    /// with the bilinear gradient of their corners. The scissor box is
    /// honored while `SCISSOR_TEST` is enabled, and `BLEND` selects
    /// source-over compositing.
    pub fn rasterize(&self) -> Result<PixelRenderer> {
        let (width, height) = self.viewport;
        let mut target = PixelRenderer::headless(width, height)?;
        let mut caps = GlCaps::empty();
        let mut scissor = Rect::new(0, 0, width, height);
        let mut color = Rgba::WHITE;
        let mut pending: Vec<(i32, i32, Rgba)> = Vec::with_capacity(4);

        for call in &self.calls {
            match *call {
                GlCall::Enable(c) => caps.insert(c),
                GlCall::Disable(c) => caps.remove(c),
                GlCall::Scissor {
                    x,
                    y,
                    width: w,
                    height: h,
                } => scissor = Rect::new(x, height.saturating_sub(y.saturating_add(h)), w, h),
                GlCall::Color(c) => color = c,
                GlCall::BeginQuads | GlCall::End => pending.clear(),
                GlCall::Vertex(x, y) => {
                    pending.push((x, y, color));
                    if pending.len() < 4 {
                        continue;
                    }
                    let quad = RecordedQuad {
                        vertices: [pending[0], pending[1], pending[2], pending[3]],
                    };
                    pending.clear();
                    target.set_compositing(if caps.contains(GlCaps::BLEND) {
                        Compositing::SourceOver
                    } else {
                        Compositing::Overwrite
                    });
                    let scissored = caps.contains(GlCaps::SCISSOR_TEST);
                    if scissored {
                        target.push_clip(scissor);
                    }
                    replay_quad(&mut target, &quad);
                    if scissored {
                        target.pop_clip();
                    }
                }
            }
        }
        trace!("RecordingContext: rasterized {} calls", self.calls.len());
        Ok(target)
    }
}

fn replay_quad(target: &mut PixelRenderer, quad: &RecordedQuad) {
    let rect = quad.bounds();
    if let Some(color) = quad.flat_color() {
        target.fill_rect(rect, color);
        return;
    }
    let corner = |cx: i32, cy: i32| {
        quad.vertices
            .iter()
            .find(|v| v.0 == cx && v.1 == cy)
            .map(|v| v.2)
            .unwrap_or(Rgba::TRANSPARENT)
    };
    let corners = GradientCorners::new(
        corner(rect.left(), rect.top()),
        corner(rect.right(), rect.top()),
        corner(rect.left(), rect.bottom()),
        corner(rect.right(), rect.bottom()),
    );
    target.fill_rect_gradient(
        rect,
        corners.top_left,
        corners.top_right,
        corners.bottom_left,
        corners.bottom_right,
    );
}

impl GlContext for RecordingContext {
    fn viewport_size(&self) -> (i32, i32) {
        self.viewport
    }

    fn enable(&mut self, caps: GlCaps) {
        self.calls.push(GlCall::Enable(caps));
    }

    fn disable(&mut self, caps: GlCaps) {
        self.calls.push(GlCall::Disable(caps));
    }

    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(GlCall::Scissor {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_quads(&mut self) {
        self.calls.push(GlCall::BeginQuads);
    }

    fn color4ub(&mut self, color: Rgba) {
        self.calls.push(GlCall::Color(color));
    }

    fn vertex2i(&mut self, x: i32, y: i32) {
        self.calls.push(GlCall::Vertex(x, y));
    }

    fn end(&mut self) {
        self.calls.push(GlCall::End);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(ctx: &mut RecordingContext, rect: Rect, color: Rgba) {
        ctx.begin_quads();
        ctx.color4ub(color);
        ctx.vertex2i(rect.left(), rect.top());
        ctx.vertex2i(rect.right(), rect.top());
        ctx.vertex2i(rect.right(), rect.bottom());
        ctx.vertex2i(rect.left(), rect.bottom());
        ctx.end();
    }

    #[test]
    fn test_records_calls_in_order() {
        let mut ctx = RecordingContext::new(10, 10);
        ctx.enable(GlCaps::BLEND);
        ctx.scissor(1, 2, 3, 4);
        assert_eq!(
            ctx.calls(),
            &[
                GlCall::Enable(GlCaps::BLEND),
                GlCall::Scissor {
                    x: 1,
                    y: 2,
                    width: 3,
                    height: 4
                }
            ]
        );
        assert_eq!(ctx.take_calls().len(), 2);
        assert!(ctx.calls().is_empty());
    }

    #[test]
    fn test_recording_serializes() {
        let calls = vec![GlCall::Enable(GlCaps::BLEND), GlCall::Vertex(3, -4), GlCall::End];
        let json = serde_json::to_string(&calls).unwrap();
        let back: Vec<GlCall> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, calls);
    }

    #[test]
    fn test_quads_reassembled() {
        let mut ctx = RecordingContext::new(10, 10);
        quad(&mut ctx, Rect::new(1, 1, 2, 3), Rgba::RED);
        let quads = ctx.quads();
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].bounds(), Rect::new(1, 1, 2, 3));
        assert_eq!(quads[0].flat_color(), Some(Rgba::RED));
    }

    #[test]
    fn test_enabled_caps_tracks_toggles() {
        let mut ctx = RecordingContext::new(4, 4);
        ctx.enable(GlCaps::BLEND | GlCaps::SCISSOR_TEST);
        ctx.disable(GlCaps::SCISSOR_TEST);
        assert_eq!(ctx.enabled_caps(), GlCaps::BLEND);
    }

    #[test]
    fn test_rasterize_applies_flipped_scissor() {
        let mut ctx = RecordingContext::new(10, 10);
        ctx.enable(GlCaps::SCISSOR_TEST);
        // bottom-left box (0,0,10,3) is the top-left rows 7..10
        ctx.scissor(0, 0, 10, 3);
        quad(&mut ctx, Rect::new(0, 0, 10, 10), Rgba::BLUE);
        let surface = ctx.rasterize().unwrap();
        assert_eq!(surface.pixel_at(0, 6), Some(Rgba::TRANSPARENT));
        assert_eq!(surface.pixel_at(0, 7), Some(Rgba::BLUE));
        assert_eq!(surface.pixel_at(9, 9), Some(Rgba::BLUE));
    }

    #[test]
    fn test_rasterize_blend_state() {
        let mut ctx = RecordingContext::new(2, 1);
        quad(&mut ctx, Rect::new(0, 0, 2, 1), Rgba::BLACK);
        ctx.enable(GlCaps::BLEND);
        quad(&mut ctx, Rect::new(0, 0, 1, 1), Rgba::new(255, 255, 255, 0));
        ctx.disable(GlCaps::BLEND);
        quad(&mut ctx, Rect::new(1, 0, 1, 1), Rgba::new(255, 255, 255, 0));
        let surface = ctx.rasterize().unwrap();
        assert_eq!(surface.pixel_at(0, 0), Some(Rgba::BLACK));
        assert_eq!(surface.pixel_at(1, 0), Some(Rgba::new(255, 255, 255, 0)));
    }
}
