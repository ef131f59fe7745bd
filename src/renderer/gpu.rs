// src/renderer/gpu.rs

//! GPU adapter: the renderer contract over immediate-mode quads.
//!
//! Every fill becomes one or more quads wound
//! `[left,top] → [right,top] → [right,bottom] → [left,bottom]`. The clip stack
//! is mirrored into a single scissor box, recomputed against the live viewport
//! size on every push and pop.
//!
//! ## Gradient and checkerboard fills
//!
//! [`GpuFillMode::PerPixel`] (the default) evaluates the same per-pixel color
//! functions as the pixel renderer and emits one quad per horizontal run of
//! equal color, so output matches the pixel backends exactly.
//! [`GpuFillMode::Native`] emits a single quad with per-vertex corner colors
//! for gradients and lets the GPU interpolate; the result is close but not
//! bit-exact. Checkerboards are exact in both modes.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::clip::ClipStack;
use crate::color::Rgba;
use crate::config::Config;
use crate::font::BitmapFont;
use crate::geometry::{Point, Rect};

use super::gl::{GlCaps, GlContext};
use super::paint::{checker_color_at, glyph_cells, GradientCorners};
use super::Renderer;

/// Strategy for gradient and checkerboard fills on the GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpuFillMode {
    /// Per-pixel colors, merged into runs. Matches the pixel renderers.
    #[default]
    PerPixel,
    /// GPU-interpolated gradients and one quad per checker cell.
    Native,
}

/// Converts a top-left-origin rect into a bottom-left-origin scissor box.
///
/// `y = viewport_height − (rect.y + rect.height)`; x, width and height are
/// unchanged. Negative extents are normalized to zero first.
pub fn scissor_from_rect(rect: Rect, viewport_height: i32) -> Rect {
    let rect = rect.normalized();
    Rect::new(
        rect.x,
        viewport_height.saturating_sub(rect.bottom()),
        rect.width,
        rect.height,
    )
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Renderer that drives a [`GlContext`].
pub struct GpuRenderer<C: GlContext> {
    context: C,
    clip: ClipStack,
    font: BitmapFont,
    fill_mode: GpuFillMode,
}

impl<C: GlContext> GpuRenderer<C> {
    /// Wraps `context` with the default font and per-pixel fills.
    pub fn new(context: C) -> Self {
        Self::with_font(context, BitmapFont::default(), GpuFillMode::default())
    }

    pub fn with_font(mut context: C, font: BitmapFont, fill_mode: GpuFillMode) -> Self {
        let (width, height) = context.viewport_size();
        debug!(
            "GpuRenderer: viewport {}x{}, fill mode {:?}, code page {}",
            width,
            height,
            fill_mode,
            font.code_page()
        );
        context.enable(GlCaps::BLEND);
        context.disable(GlCaps::SCISSOR_TEST);
        Self {
            context,
            clip: ClipStack::new(Rect::new(0, 0, width, height)),
            font,
            fill_mode,
        }
    }

    /// Builds the renderer from the `font` and `gpu` config sections.
    pub fn from_config(context: C, config: &Config) -> Self {
        let font = BitmapFont::new(config.font.code_page, config.font.glyph_spacing);
        Self::with_font(context, font, config.gpu.fill_mode)
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }

    pub fn fill_mode(&self) -> GpuFillMode {
        self.fill_mode
    }

    pub fn set_fill_mode(&mut self, fill_mode: GpuFillMode) {
        self.fill_mode = fill_mode;
    }

    /// Active clip in surface coordinates, resolved against the current viewport.
    pub fn active_clip(&mut self) -> Rect {
        if self.sync_viewport() {
            self.apply_scissor();
        }
        self.clip.active()
    }

    fn viewport_bounds(&self) -> Rect {
        let (width, height) = self.context.viewport_size();
        Rect::new(0, 0, width, height)
    }

    /// Re-resolves the clip stack against the live viewport. Returns `true`
    /// when the viewport changed since the last sync.
    fn sync_viewport(&mut self) -> bool {
        let bounds = self.viewport_bounds();
        self.clip.set_bounds(bounds)
    }

    /// Mirrors the clip stack into GL scissor state.
    fn apply_scissor(&mut self) {
        if self.clip.is_empty() {
            self.context.disable(GlCaps::SCISSOR_TEST);
            return;
        }
        let (_, viewport_height) = self.context.viewport_size();
        let b = scissor_from_rect(self.clip.active(), viewport_height);
        trace!("GpuRenderer: scissor {:?}", b);
        self.context.enable(GlCaps::SCISSOR_TEST);
        self.context.scissor(b.x, b.y, b.width, b.height);
    }

    /// Resolves `rect` against the live clip, resending the scissor first if
    /// the viewport moved under it.
    fn clipped(&mut self, rect: Rect) -> Option<Rect> {
        if self.sync_viewport() {
            debug!("GpuRenderer: viewport now {:?}", self.clip.bounds());
            self.apply_scissor();
        }
        self.clip.clip(rect)
    }

    fn emit_vertices(&mut self, rect: Rect) {
        self.context.vertex2i(rect.left(), rect.top());
        self.context.vertex2i(rect.right(), rect.top());
        self.context.vertex2i(rect.right(), rect.bottom());
        self.context.vertex2i(rect.left(), rect.bottom());
    }

    fn emit_flat_quad(&mut self, rect: Rect, color: Rgba) {
        self.context.color4ub(color);
        self.emit_vertices(rect);
    }

    /// Emits one quad per horizontal run of equal color inside `area`.
    fn emit_runs(&mut self, area: Rect, color_at: impl Fn(i32, i32) -> Rgba) {
        self.context.begin_quads();
        for y in area.top()..area.bottom() {
            let mut run_start = area.left();
            let mut run_color = color_at(run_start, y);
            for x in area.left() + 1..area.right() {
                let color = color_at(x, y);
                if color != run_color {
                    self.emit_flat_quad(Rect::from_edges(run_start, y, x, y + 1), run_color);
                    run_start = x;
                    run_color = color;
                }
            }
            self.emit_flat_quad(Rect::from_edges(run_start, y, area.right(), y + 1), run_color);
        }
        self.context.end();
    }
}

impl<C: GlContext> Renderer for GpuRenderer<C> {
    fn font(&self) -> &BitmapFont {
        &self.font
    }

    fn font_mut(&mut self) -> &mut BitmapFont {
        &mut self.font
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if self.clipped(rect).is_none() {
            trace!("GpuRenderer: fill_rect {:?} clipped away", rect);
            return;
        }
        self.context.begin_quads();
        self.emit_flat_quad(rect.normalized(), color);
        self.context.end();
    }

    fn fill_rect_gradient(
        &mut self,
        rect: Rect,
        top_left: Rgba,
        top_right: Rgba,
        bottom_left: Rgba,
        bottom_right: Rgba,
    ) {
        let Some(area) = self.clipped(rect) else {
            trace!("GpuRenderer: gradient {:?} clipped away", rect);
            return;
        };
        let corners = GradientCorners::new(top_left, top_right, bottom_left, bottom_right);
        match self.fill_mode {
            GpuFillMode::PerPixel => self.emit_runs(area, |x, y| corners.color_at(rect, x, y)),
            GpuFillMode::Native => {
                let rect = rect.normalized();
                self.context.begin_quads();
                self.context.color4ub(top_left);
                self.context.vertex2i(rect.left(), rect.top());
                self.context.color4ub(top_right);
                self.context.vertex2i(rect.right(), rect.top());
                self.context.color4ub(bottom_right);
                self.context.vertex2i(rect.right(), rect.bottom());
                self.context.color4ub(bottom_left);
                self.context.vertex2i(rect.left(), rect.bottom());
                self.context.end();
            }
        }
    }

    fn fill_rect_checkerboard(&mut self, rect: Rect, cell_size: i32, color_a: Rgba, color_b: Rgba) {
        let Some(area) = self.clipped(rect) else {
            trace!("GpuRenderer: checkerboard {:?} clipped away", rect);
            return;
        };
        match self.fill_mode {
            GpuFillMode::PerPixel => {
                self.emit_runs(area, |x, y| checker_color_at(rect, cell_size, x, y, color_a, color_b))
            }
            GpuFillMode::Native => {
                let cell = cell_size.max(1) as i64;
                let (ox, oy) = (rect.x as i64, rect.y as i64);
                let cols = (area.left() as i64 - ox) / cell..=(area.right() as i64 - 1 - ox) / cell;
                let rows = (area.top() as i64 - oy) / cell..=(area.bottom() as i64 - 1 - oy) / cell;
                let bounds = rect.normalized();
                self.context.begin_quads();
                for row in rows {
                    for col in cols.clone() {
                        let cell_rect = Rect::from_edges(
                            clamp_i32(ox + col * cell),
                            clamp_i32(oy + row * cell),
                            clamp_i32(ox + (col + 1) * cell),
                            clamp_i32(oy + (row + 1) * cell),
                        )
                        .intersect(&bounds);
                        let color = if (col + row) % 2 == 0 { color_a } else { color_b };
                        self.emit_flat_quad(cell_rect, color);
                    }
                }
                self.context.end();
            }
        }
    }

    fn draw_text(&mut self, text: &str, pos: Point, color: Rgba, scale: i32) {
        if text.is_empty() || scale <= 0 {
            trace!("GpuRenderer: draw_text no-op (len {}, scale {})", text.len(), scale);
            return;
        }
        let advance = self.font.advance(scale);
        let mut cursor_x = pos.x;
        for code in self.font.encode(text) {
            let glyph = *self.font.glyph(code);
            for (col, row) in glyph_cells(glyph) {
                let block = Rect::new(
                    cursor_x.saturating_add(col.saturating_mul(scale)),
                    pos.y.saturating_add(row.saturating_mul(scale)),
                    scale,
                    scale,
                );
                self.fill_rect(block, color);
            }
            cursor_x = cursor_x.saturating_add(advance);
        }
    }

    fn push_clip(&mut self, rect: Rect) {
        self.sync_viewport();
        self.clip.push(rect);
        self.apply_scissor();
    }

    fn pop_clip(&mut self) {
        self.sync_viewport();
        self.clip.pop();
        self.apply_scissor();
    }
}
