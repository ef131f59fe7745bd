// src/renderer.rs

//! This module defines the `Renderer` contract and its backends.
//!
//! A `Renderer` draws primitives against a clip region, rasterizes bitmap-font
//! text, and maintains a stack of hierarchical clip rectangles. Callers depend
//! only on the trait; the backends are:
//!
//! - [`PixelRenderer`]: an owned RGBA buffer, in either the alpha-compositing
//!   ("software") or the overwriting ("headless") [`Compositing`] mode.
//! - [`GpuRenderer`]: immediate-mode quads and a scissor box over any
//!   [`GlContext`].
//!
//! Every draw call is synchronous and infallible. Degenerate input (negative or
//! empty rects, zero thickness, non-positive scale, empty text) is a silent
//! no-op, as is popping an empty clip stack.

pub mod gl;
pub mod gpu;
pub mod paint;
pub mod pixel;


pub use gl::{GlCall, GlCaps, GlContext, RecordedQuad, RecordingContext};
pub use gpu::{scissor_from_rect, GpuFillMode, GpuRenderer};
pub use paint::{blend_over, Compositing};
pub use pixel::PixelRenderer;

use crate::color::Rgba;
use crate::font::{BitmapFont, CodePage};
use crate::geometry::{Point, Rect};

/// The drawing contract shared by every backend.
///
/// Implementors supply the fills, text, and clip handling; stroked
/// rectangles, text measurement and code-page access are provided in terms
/// of those and of the backend's [`BitmapFont`].
pub trait Renderer {
    /// The font used by [`Renderer::draw_text`].
    fn font(&self) -> &BitmapFont;

    fn font_mut(&mut self) -> &mut BitmapFont;

    /// Fills `rect` (clipped) with a flat color.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Strokes the inside of `rect` with four bars `thickness` pixels wide,
    /// drawn top, bottom, left, right. Bars may overlap on small rects.
    fn draw_rect(&mut self, rect: Rect, color: Rgba, thickness: i32) {
        if thickness <= 0 {
            return;
        }
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = rect;
        let t = thickness;
        self.fill_rect(Rect::new(x, y, w, t), color);
        self.fill_rect(Rect::new(x, y.saturating_add(h).saturating_sub(t), w, t), color);
        self.fill_rect(Rect::new(x, y, t, h), color);
        self.fill_rect(Rect::new(x.saturating_add(w).saturating_sub(t), y, t, h), color);
    }

    /// Fills `rect` with a bilinear gradient between its four corner colors.
    /// The corners of `rect` reproduce the inputs exactly; clipping does not
    /// move the gradient.
    fn fill_rect_gradient(
        &mut self,
        rect: Rect,
        top_left: Rgba,
        top_right: Rgba,
        bottom_left: Rgba,
        bottom_right: Rgba,
    );

    /// Fills `rect` with square cells of `cell_size` pixels, starting with
    /// `color_a` in the top-left cell. `cell_size` below one counts as one.
    fn fill_rect_checkerboard(&mut self, rect: Rect, cell_size: i32, color_a: Rgba, color_b: Rgba);

    /// Draws `text` with its top-left corner at `pos`, each glyph pixel
    /// becoming a `scale × scale` block.
    fn draw_text(&mut self, text: &str, pos: Point, color: Rgba, scale: i32);

    fn measure_text_width(&self, text: &str, scale: i32) -> i32 {
        self.font().measure_width(text, scale)
    }

    fn measure_text_height(&self, scale: i32) -> i32 {
        self.font().measure_height(scale)
    }

    /// Narrows the active clip to `rect` intersected with the current clip.
    fn push_clip(&mut self, rect: Rect);

    /// Restores the clip in effect before the matching `push_clip`.
    fn pop_clip(&mut self);

    fn code_page(&self) -> CodePage {
        self.font().code_page()
    }

    /// Selects the code page for subsequent text. Already-drawn output is
    /// unaffected.
    fn set_code_page(&mut self, code_page: CodePage) {
        self.font_mut().set_code_page(code_page);
    }
}
