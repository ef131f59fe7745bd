// src/renderer/pixel.rs

//! In-memory RGBA pixel renderer.
//!
//! One implementation serves both pixel backends: the interactive software
//! renderer composites with [`Compositing::SourceOver`], the headless snapshot
//! renderer overwrites with [`Compositing::Overwrite`]. Geometry, clipping and
//! text are shared; only the per-pixel combine step differs.
//!
//! ## Buffer layout
//! `width * height * 4` bytes, row-major, R G B A per pixel, top-left origin.
//! The buffer is allocated once and never resized.

use log::{debug, trace};

use crate::clip::ClipStack;
use crate::color::Rgba;
use crate::config::Config;
use crate::error::{RenderError, Result};
use crate::font::BitmapFont;
use crate::geometry::{Point, Rect};

use super::paint::{checker_color_at, glyph_cells, Compositing, GradientCorners};
use super::Renderer;

/// Bytes per pixel in the backing buffer.
pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone)]
pub struct PixelRenderer {
    width: i32,
    height: i32,
    pixels: Vec<u8>,
    clip: ClipStack,
    font: BitmapFont,
    compositing: Compositing,
}

impl PixelRenderer {
    /// Allocates a zeroed (transparent black) surface.
    ///
    /// # Errors
    /// [`RenderError::InvalidSurfaceSize`] when either dimension is not
    /// positive or the buffer size overflows `usize`.
    pub fn new(width: i32, height: i32, compositing: Compositing) -> Result<Self> {
        Self::with_font(width, height, compositing, BitmapFont::default())
    }

    pub fn with_font(
        width: i32,
        height: i32,
        compositing: Compositing,
        font: BitmapFont,
    ) -> Result<Self> {
        let invalid = RenderError::InvalidSurfaceSize { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(invalid)?;
        debug!(
            "PixelRenderer: {}x{} surface, {:?}, code page {}",
            width,
            height,
            compositing,
            font.code_page()
        );
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
            clip: ClipStack::new(Rect::new(0, 0, width, height)),
            font,
            compositing,
        })
    }

    /// Alpha-compositing renderer for interactive use.
    pub fn software(width: i32, height: i32) -> Result<Self> {
        Self::new(width, height, Compositing::SourceOver)
    }

    /// Overwriting renderer for snapshots and automation.
    pub fn headless(width: i32, height: i32) -> Result<Self> {
        Self::new(width, height, Compositing::Overwrite)
    }

    /// Builds a renderer from the `surface` and `font` config sections.
    pub fn from_config(config: &Config) -> Result<Self> {
        let surface = &config.surface;
        let font = BitmapFont::new(config.font.code_page, config.font.glyph_spacing);
        Self::with_font(surface.width, surface.height, surface.compositing, font)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn compositing(&self) -> Compositing {
        self.compositing
    }

    pub fn set_compositing(&mut self, compositing: Compositing) {
        self.compositing = compositing;
    }

    /// The backing RGBA buffer.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn clip_stack(&self) -> &ClipStack {
        &self.clip
    }

    /// Reads one pixel, or `None` outside the surface.
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgba::from_bytes(&self.pixels[i..i + BYTES_PER_PIXEL]))
    }

    /// Sets every pixel to `color`, ignoring the clip and compositing mode.
    pub fn clear(&mut self, color: Rgba) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Composites `color` onto one pixel if it lies inside the active clip.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if !self.clip.contains(x, y) {
            return;
        }
        let i = self.offset(x, y);
        self.compositing
            .apply_to_bytes(&mut self.pixels[i..i + BYTES_PER_PIXEL], color);
    }

    /// Byte offset of `(x, y)`. The caller guarantees the pixel is on the surface.
    #[inline]
    fn offset(&self, x: i32, y: i32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Calls `color_at` for every pixel of `area` (already clipped) and
    /// composites the result.
    fn shade(&mut self, area: Rect, color_at: impl Fn(i32, i32) -> Rgba) {
        let mode = self.compositing;
        for y in area.top()..area.bottom() {
            let start = self.offset(area.left(), y);
            let end = start + area.width as usize * BYTES_PER_PIXEL;
            let row = &mut self.pixels[start..end];
            for (x, px) in (area.left()..).zip(row.chunks_exact_mut(BYTES_PER_PIXEL)) {
                mode.apply_to_bytes(px, color_at(x, y));
            }
        }
    }
}

impl Renderer for PixelRenderer {
    fn font(&self) -> &BitmapFont {
        &self.font
    }

    fn font_mut(&mut self) -> &mut BitmapFont {
        &mut self.font
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let Some(area) = self.clip.clip(rect) else {
            trace!("PixelRenderer: fill_rect {:?} clipped away", rect);
            return;
        };
        if self.compositing.is_noop(color) {
            return;
        }
        self.shade(area, |_, _| color);
    }

    fn fill_rect_gradient(
        &mut self,
        rect: Rect,
        top_left: Rgba,
        top_right: Rgba,
        bottom_left: Rgba,
        bottom_right: Rgba,
    ) {
        let Some(area) = self.clip.clip(rect) else {
            trace!("PixelRenderer: gradient {:?} clipped away", rect);
            return;
        };
        let corners = GradientCorners::new(top_left, top_right, bottom_left, bottom_right);
        self.shade(area, |x, y| corners.color_at(rect, x, y));
    }

    fn fill_rect_checkerboard(&mut self, rect: Rect, cell_size: i32, color_a: Rgba, color_b: Rgba) {
        let Some(area) = self.clip.clip(rect) else {
            trace!("PixelRenderer: checkerboard {:?} clipped away", rect);
            return;
        };
        self.shade(area, |x, y| checker_color_at(rect, cell_size, x, y, color_a, color_b));
    }

    fn draw_text(&mut self, text: &str, pos: Point, color: Rgba, scale: i32) {
        if text.is_empty() || scale <= 0 {
            trace!("PixelRenderer: draw_text no-op (len {}, scale {})", text.len(), scale);
            return;
        }
        let advance = self.font.advance(scale);
        let mut cursor_x = pos.x;
        for code in self.font.encode(text) {
            let glyph = *self.font.glyph(code);
            for (col, row) in glyph_cells(glyph) {
                let x = cursor_x.saturating_add(col.saturating_mul(scale));
                let y = pos.y.saturating_add(row.saturating_mul(scale));
                if scale == 1 {
                    self.blend_pixel(x, y, color);
                } else {
                    self.fill_rect(Rect::new(x, y, scale, scale), color);
                }
            }
            cursor_x = cursor_x.saturating_add(advance);
        }
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::CodePage;
    use test_log::test;

    fn filled(width: i32, height: i32, mode: Compositing, color: Rgba) -> PixelRenderer {
        let mut r = PixelRenderer::new(width, height, mode).unwrap();
        r.clear(color);
        r
    }

    fn all_pixels(r: &PixelRenderer) -> Vec<Rgba> {
        r.pixels().chunks_exact(4).map(Rgba::from_bytes).collect()
    }

    #[test]
    fn test_rejects_non_positive_size() {
        for (w, h) in [(0, 10), (10, 0), (-1, 5), (5, -1)] {
            let err = PixelRenderer::software(w, h).unwrap_err();
            assert!(matches!(
                err,
                RenderError::InvalidSurfaceSize { width, height } if width == w && height == h
            ));
        }
    }

    #[test]
    fn test_new_buffer_is_zeroed_and_sized() {
        let r = PixelRenderer::headless(3, 2).unwrap();
        assert_eq!(r.pixels().len(), 3 * 2 * 4);
        assert!(r.pixels().iter().all(|&b| b == 0));
        assert_eq!(r.compositing(), Compositing::Overwrite);
        assert_eq!(PixelRenderer::software(1, 1).unwrap().compositing(), Compositing::SourceOver);
    }

    #[test]
    fn test_buffer_layout_is_row_major_rgba() {
        let mut r = PixelRenderer::headless(3, 2).unwrap();
        r.fill_rect(Rect::new(2, 1, 1, 1), Rgba::new(1, 2, 3, 4));
        let i = (3 + 2) * 4;
        assert_eq!(&r.pixels()[i..i + 4], &[1, 2, 3, 4]);
        assert_eq!(r.pixel_at(2, 1), Some(Rgba::new(1, 2, 3, 4)));
        assert_eq!(r.pixel_at(3, 0), None);
        assert_eq!(r.pixel_at(-1, 0), None);
    }

    #[test]
    fn test_clear_ignores_clip_and_mode() {
        let mut r = PixelRenderer::software(4, 4).unwrap();
        r.push_clip(Rect::new(0, 0, 1, 1));
        r.clear(Rgba::new(5, 6, 7, 0));
        assert!(all_pixels(&r).iter().all(|&p| p == Rgba::new(5, 6, 7, 0)));
    }

    #[test]
    fn test_fill_outside_clip_is_noop() {
        let mut r = filled(8, 8, Compositing::SourceOver, Rgba::GREEN);
        let before = r.pixels().to_vec();
        r.push_clip(Rect::new(0, 0, 4, 4));
        r.fill_rect(Rect::new(4, 4, 4, 4), Rgba::RED);
        r.fill_rect(Rect::new(0, 0, -3, 4), Rgba::RED);
        r.fill_rect_gradient(Rect::new(5, 5, 2, 2), Rgba::RED, Rgba::RED, Rgba::RED, Rgba::RED);
        r.fill_rect_checkerboard(Rect::new(6, 0, 2, 2), 1, Rgba::RED, Rgba::BLUE);
        assert_eq!(r.pixels(), &before[..]);
    }

    #[test]
    fn test_source_over_opaque_equals_overwrite() {
        let mut blended = filled(6, 6, Compositing::SourceOver, Rgba::new(9, 9, 9, 90));
        let mut overwritten = filled(6, 6, Compositing::Overwrite, Rgba::new(9, 9, 9, 90));
        let rect = Rect::new(1, 2, 3, 3);
        blended.fill_rect(rect, Rgba::opaque(200, 10, 30));
        overwritten.fill_rect(rect, Rgba::opaque(200, 10, 30));
        assert_eq!(blended.pixels(), overwritten.pixels());
    }

    #[test]
    fn test_source_over_transparent_is_noop() {
        let mut r = filled(4, 4, Compositing::SourceOver, Rgba::BLUE);
        let before = r.pixels().to_vec();
        r.fill_rect(Rect::new(0, 0, 4, 4), Rgba::new(255, 0, 0, 0));
        assert_eq!(r.pixels(), &before[..]);
    }

    #[test]
    fn test_overwrite_writes_transparent() {
        let mut r = filled(2, 2, Compositing::Overwrite, Rgba::BLUE);
        r.fill_rect(Rect::new(0, 0, 1, 1), Rgba::TRANSPARENT);
        assert_eq!(r.pixel_at(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(r.pixel_at(1, 0), Some(Rgba::BLUE));
    }

    #[test]
    fn test_partial_alpha_blends() {
        let mut r = filled(1, 1, Compositing::SourceOver, Rgba::BLACK);
        r.fill_rect(Rect::new(0, 0, 1, 1), Rgba::new(255, 255, 255, 128));
        assert_eq!(r.pixel_at(0, 0), Some(Rgba::new(128, 128, 128, 255)));
    }

    #[test]
    fn test_draw_rect_bars() {
        let mut r = PixelRenderer::headless(6, 6).unwrap();
        r.draw_rect(Rect::new(0, 0, 6, 6), Rgba::WHITE, 1);
        for y in 0..6 {
            for x in 0..6 {
                let edge = x == 0 || y == 0 || x == 5 || y == 5;
                let expected = if edge { Rgba::WHITE } else { Rgba::TRANSPARENT };
                assert_eq!(r.pixel_at(x, y), Some(expected), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_draw_rect_zero_thickness_is_noop() {
        let mut r = PixelRenderer::headless(4, 4).unwrap();
        r.draw_rect(Rect::new(0, 0, 4, 4), Rgba::WHITE, 0);
        r.draw_rect(Rect::new(0, 0, 4, 4), Rgba::WHITE, -2);
        assert!(r.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_rect_overlapping_bars_blend_in_order() {
        // Thick bars overlap: every pixel sits under one horizontal and one vertical bar
        let mut r = filled(4, 4, Compositing::SourceOver, Rgba::BLACK);
        let c = Rgba::new(255, 0, 0, 128);
        r.draw_rect(Rect::new(0, 0, 4, 4), c, 2);
        let once = crate::renderer::paint::blend_over(Rgba::BLACK, c);
        let twice = crate::renderer::paint::blend_over(once, c);
        assert_eq!(r.pixel_at(0, 0), Some(twice));
        assert_eq!(r.pixel_at(1, 1), Some(twice));
    }

    #[test]
    fn test_gradient_corners_exact() {
        let mut r = PixelRenderer::headless(10, 10).unwrap();
        let (tl, tr, bl, br) = (
            Rgba::new(255, 0, 0, 255),
            Rgba::new(0, 255, 0, 200),
            Rgba::new(0, 0, 255, 100),
            Rgba::new(10, 20, 30, 40),
        );
        r.fill_rect_gradient(Rect::new(1, 2, 7, 5), tl, tr, bl, br);
        assert_eq!(r.pixel_at(1, 2), Some(tl));
        assert_eq!(r.pixel_at(7, 2), Some(tr));
        assert_eq!(r.pixel_at(1, 6), Some(bl));
        assert_eq!(r.pixel_at(7, 6), Some(br));
    }

    #[test]
    fn test_gradient_is_anchored_to_requested_rect() {
        let mut full = PixelRenderer::headless(10, 1).unwrap();
        let mut clipped = PixelRenderer::headless(10, 1).unwrap();
        let rect = Rect::new(0, 0, 10, 1);
        full.fill_rect_gradient(rect, Rgba::BLACK, Rgba::WHITE, Rgba::BLACK, Rgba::WHITE);
        clipped.push_clip(Rect::new(5, 0, 5, 1));
        clipped.fill_rect_gradient(rect, Rgba::BLACK, Rgba::WHITE, Rgba::BLACK, Rgba::WHITE);
        for x in 5..10 {
            assert_eq!(full.pixel_at(x, 0), clipped.pixel_at(x, 0));
        }
        assert_eq!(clipped.pixel_at(4, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_checkerboard_cell_one_alternates_from_color_a() {
        let mut r = PixelRenderer::headless(5, 5).unwrap();
        r.fill_rect_checkerboard(Rect::new(0, 0, 5, 5), 1, Rgba::WHITE, Rgba::BLACK);
        for y in 0..5 {
            for x in 0..5 {
                let expected = if (x + y) % 2 == 0 { Rgba::WHITE } else { Rgba::BLACK };
                assert_eq!(r.pixel_at(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_gradient_blends_in_source_over() {
        use crate::renderer::paint::{blend_over, GradientCorners};
        let bg = Rgba::opaque(10, 20, 30);
        let mut r = filled(6, 5, Compositing::SourceOver, bg);
        let corners = GradientCorners::new(
            Rgba::new(255, 0, 0, 128),
            Rgba::new(0, 255, 0, 64),
            Rgba::new(0, 0, 255, 200),
            Rgba::new(255, 255, 255, 0),
        );
        let rect = Rect::new(1, 1, 4, 3);
        r.fill_rect_gradient(
            rect,
            corners.top_left,
            corners.top_right,
            corners.bottom_left,
            corners.bottom_right,
        );
        for y in 0..5 {
            for x in 0..6 {
                let expected = if rect.contains_point(x, y) {
                    blend_over(bg, corners.color_at(rect, x, y))
                } else {
                    bg
                };
                assert_eq!(r.pixel_at(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }
        // Translucent corner is blended, not copied
        assert_ne!(r.pixel_at(1, 1), Some(corners.top_left));
        // Fully transparent corner leaves the background alone
        assert_eq!(r.pixel_at(4, 3), Some(bg));
    }

    #[test]
    fn test_checkerboard_overwrite_writes_transparent_cells() {
        use crate::renderer::paint::blend_over;
        let tint = Rgba::new(0, 0, 255, 100);
        let rect = Rect::new(0, 0, 4, 2);

        let mut headless = filled(4, 2, Compositing::Overwrite, Rgba::WHITE);
        headless.fill_rect_checkerboard(rect, 1, Rgba::TRANSPARENT, tint);
        let mut software = filled(4, 2, Compositing::SourceOver, Rgba::WHITE);
        software.fill_rect_checkerboard(rect, 1, Rgba::TRANSPARENT, tint);

        for y in 0..2 {
            for x in 0..4 {
                let even = (x + y) % 2 == 0;
                let (overwritten, blended) = if even {
                    (Rgba::TRANSPARENT, Rgba::WHITE)
                } else {
                    (tint, blend_over(Rgba::WHITE, tint))
                };
                assert_eq!(headless.pixel_at(x, y), Some(overwritten), "headless ({}, {})", x, y);
                assert_eq!(software.pixel_at(x, y), Some(blended), "software ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_draw_text_translucent_blends() {
        use crate::renderer::paint::blend_over;
        let bg = Rgba::opaque(0, 0, 80);
        let ink = Rgba::new(255, 255, 0, 100);
        for scale in [1, 2] {
            let mut r = filled(16, 16, Compositing::SourceOver, bg);
            r.draw_text("A", Point::new(0, 0), ink, scale);
            let glyph = *r.font().glyph(b'A');
            for y in 0..16 {
                for x in 0..16 {
                    let (col, row) = (x / scale, y / scale);
                    let set = col < 8 && row < 8 && glyph[row as usize] & (0x80 >> col) != 0;
                    let expected = if set { blend_over(bg, ink) } else { bg };
                    assert_eq!(
                        r.pixel_at(x, y),
                        Some(expected),
                        "scale {} pixel ({}, {})",
                        scale,
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_draw_text_scale_one_uses_clip() {
        let mut r = PixelRenderer::headless(16, 8).unwrap();
        r.push_clip(Rect::new(0, 0, 4, 8));
        r.draw_text("A", Point::new(0, 0), Rgba::WHITE, 1);
        // 'A' row 2 is 0xCC: pixels 0,1 and 4,5; only 0,1 survive the clip
        assert_eq!(r.pixel_at(0, 2), Some(Rgba::WHITE));
        assert_eq!(r.pixel_at(1, 2), Some(Rgba::WHITE));
        assert_eq!(r.pixel_at(4, 2), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_draw_text_advances_cursor() {
        let mut r = PixelRenderer::headless(40, 8).unwrap();
        r.draw_text("II", Point::new(0, 0), Rgba::WHITE, 1);
        // 'I' row 0 is 0x78 MSB-left: columns 1..=4; second glyph starts at 9
        assert_eq!(r.pixel_at(1, 0), Some(Rgba::WHITE));
        assert_eq!(r.pixel_at(10, 0), Some(Rgba::WHITE));
        assert_eq!(r.pixel_at(9, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_draw_text_noops() {
        let mut r = PixelRenderer::headless(16, 16).unwrap();
        r.draw_text("", Point::new(0, 0), Rgba::WHITE, 1);
        r.draw_text("A", Point::new(0, 0), Rgba::WHITE, 0);
        r.draw_text("A", Point::new(0, 0), Rgba::WHITE, -1);
        assert!(r.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_code_page_changes_subsequent_text_only() {
        let mut r = PixelRenderer::headless(8, 16).unwrap();
        r.draw_text("é", Point::new(0, 0), Rgba::WHITE, 1);
        let first = r.pixels()[..8 * 8 * 4].to_vec();
        r.set_code_page(CodePage::Windows1252);
        assert_eq!(r.code_page(), CodePage::Windows1252);
        assert_eq!(&r.pixels()[..8 * 8 * 4], &first[..]);
        r.draw_text("─", Point::new(0, 8), Rgba::WHITE, 1);
        // not representable in 1252: drawn as '?'
        let question = *r.font().glyph(b'?');
        assert_eq!(question[0], 0x78);
        assert_eq!(r.pixel_at(1, 8), Some(Rgba::WHITE));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.surface.width = 12;
        config.surface.height = 7;
        config.surface.compositing = Compositing::Overwrite;
        config.font.code_page = CodePage::Windows1252;
        let r = PixelRenderer::from_config(&config).unwrap();
        assert_eq!((r.width(), r.height()), (12, 7));
        assert_eq!(r.compositing(), Compositing::Overwrite);
        assert_eq!(r.code_page(), CodePage::Windows1252);

        config.surface.width = 0;
        assert!(PixelRenderer::from_config(&config).is_err());
    }
}
