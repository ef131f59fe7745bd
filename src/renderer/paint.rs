// src/renderer/paint.rs

//! Per-pixel color math shared by every backend.
//!
//! The pixel renderer evaluates these functions directly; the GPU adapter
//! evaluates the same functions to choose quad colors, which is what keeps the
//! two backends pixel-identical in [`GpuFillMode::PerPixel`](super::GpuFillMode).

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::font::{Glyph, GLYPH_WIDTH};
use crate::geometry::Rect;

/// How a source color is combined with the pixel already in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compositing {
    /// Replace all four channels unconditionally.
    Overwrite,
    /// Straight-alpha "over": alpha 0 leaves the pixel alone, alpha 255
    /// replaces it, anything in between is blended.
    #[default]
    SourceOver,
}

impl Compositing {
    /// Combines `src` onto a 4-byte RGBA pixel in place.
    #[inline]
    pub fn apply_to_bytes(self, dst: &mut [u8], src: Rgba) {
        let out = match self {
            Compositing::Overwrite => src,
            Compositing::SourceOver => match src.a {
                0 => return,
                255 => src,
                _ => blend_over(Rgba::from_bytes(dst), src),
            },
        };
        dst[..4].copy_from_slice(&out.to_bytes());
    }

    /// True when drawing `color` can never change the buffer.
    pub fn is_noop(self, color: Rgba) -> bool {
        self == Compositing::SourceOver && color.a == 0
    }
}

/// Integer source-over compositing with straight alpha.
///
/// `out = (src·a + dst·(255 − a)) / 255` per color channel and
/// `outA = a + dstA·(255 − a) / 255`, truncating.
pub fn blend_over(dst: Rgba, src: Rgba) -> Rgba {
    match src.a {
        0 => dst,
        255 => src,
        a => {
            let a = a as u32;
            let inv = 255 - a;
            let channel = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv) / 255) as u8;
            Rgba {
                r: channel(src.r, dst.r),
                g: channel(src.g, dst.g),
                b: channel(src.b, dst.b),
                a: (a + dst.a as u32 * inv / 255) as u8,
            }
        }
    }
}

/// Corner colors of a four-way gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientCorners {
    pub top_left: Rgba,
    pub top_right: Rgba,
    pub bottom_left: Rgba,
    pub bottom_right: Rgba,
}

impl GradientCorners {
    pub const fn new(
        top_left: Rgba,
        top_right: Rgba,
        bottom_left: Rgba,
        bottom_right: Rgba,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Color at pixel `(x, y)` of a gradient spanning `rect`.
    ///
    /// `rect` is the *requested* rect, not the clipped one, so clipping never
    /// shifts the gradient. Each axis parameter is
    /// `(p − origin) / max(1, extent − 1)`; the vertical lerp runs first on
    /// each edge, then the horizontal one between them.
    pub fn color_at(&self, rect: Rect, x: i32, y: i32) -> Rgba {
        let tx = axis_t(x, rect.x, rect.width);
        let ty = axis_t(y, rect.y, rect.height);
        let left = Rgba::lerp(self.top_left, self.bottom_left, ty);
        let right = Rgba::lerp(self.top_right, self.bottom_right, ty);
        Rgba::lerp(left, right, tx)
    }
}

fn axis_t(p: i32, origin: i32, extent: i32) -> f32 {
    let span = extent.saturating_sub(1).max(1);
    (p as i64 - origin as i64) as f32 / span as f32
}

/// Color at pixel `(x, y)` of a checkerboard anchored at `rect`'s origin.
/// `cell_size` below one counts as one.
pub fn checker_color_at(rect: Rect, cell_size: i32, x: i32, y: i32, a: Rgba, b: Rgba) -> Rgba {
    if checker_parity(rect, cell_size, x, y) {
        a
    } else {
        b
    }
}

/// True when `(x, y)` falls in an even cell (the one that takes the first color).
pub fn checker_parity(rect: Rect, cell_size: i32, x: i32, y: i32) -> bool {
    let cell = cell_size.max(1) as i64;
    let cx = (x as i64 - rect.x as i64).div_euclid(cell);
    let cy = (y as i64 - rect.y as i64).div_euclid(cell);
    (cx + cy).rem_euclid(2) == 0
}

/// Set pixels of a glyph as `(column, row)` pairs, row-major.
pub fn glyph_cells(glyph: Glyph) -> impl Iterator<Item = (i32, i32)> {
    glyph.into_iter().enumerate().flat_map(|(row, bits)| {
        (0..GLYPH_WIDTH)
            .filter(move |col| bits & (0x80u8 >> col) != 0)
            .map(move |col| (col, row as i32))
    })
}
