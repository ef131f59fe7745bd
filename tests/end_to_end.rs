// tests/end_to_end.rs

use core_paint::{Compositing, PixelRenderer, Point, Rect, Renderer, Rgba};

fn assert_region(
    r: &PixelRenderer,
    inside: impl Fn(i32, i32) -> bool,
    in_color: Rgba,
    out_color: Rgba,
) {
    for y in 0..r.height() {
        for x in 0..r.width() {
            let expected = if inside(x, y) { in_color } else { out_color };
            assert_eq!(r.pixel_at(x, y), Some(expected), "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_clip_push_fill_pop() {
    for mode in [Compositing::SourceOver, Compositing::Overwrite] {
        let mut r = PixelRenderer::new(10, 10, mode).unwrap();
        r.fill_rect(Rect::new(0, 0, 10, 10), Rgba::RED);
        r.push_clip(Rect::new(2, 2, 4, 4));
        r.fill_rect(Rect::new(0, 0, 10, 10), Rgba::BLUE);
        r.pop_clip();

        assert_region(
            &r,
            |x, y| (2..6).contains(&x) && (2..6).contains(&y),
            Rgba::BLUE,
            Rgba::RED,
        );
        assert_eq!(r.clip_stack().depth(), 0);
    }
}

#[test]
fn test_draw_text_scaled_glyph() {
    let mut r = PixelRenderer::software(20, 20).unwrap();
    r.draw_text("A", Point::new(0, 0), Rgba::WHITE, 2);

    let glyph = *r.font().glyph(b'A');
    assert_eq!(glyph, [0x30, 0x78, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0x00]);
    let bit_set = |x: i32, y: i32| {
        let (col, row) = (x / 2, y / 2);
        col < 8 && row < 8 && glyph[row as usize] & (0x80 >> col) != 0
    };
    assert_region(&r, bit_set, Rgba::WHITE, Rgba::TRANSPARENT);
}

#[test]
fn test_draw_text_clipped_by_surface_edge() {
    let mut r = PixelRenderer::headless(6, 6).unwrap();
    r.draw_text("A", Point::new(-2, -2), Rgba::WHITE, 1);
    // Row 2 of 'A' (0xCC) lands on y = 0: columns 0,1,4,5 shift to -2,-1,2,3
    assert_eq!(r.pixel_at(2, 0), Some(Rgba::WHITE));
    assert_eq!(r.pixel_at(3, 0), Some(Rgba::WHITE));
    assert_eq!(r.pixel_at(0, 0), Some(Rgba::TRANSPARENT));
}

#[test]
fn test_nested_clips_and_framed_panel() {
    let mut r = PixelRenderer::headless(12, 12).unwrap();
    r.clear(Rgba::BLACK);
    r.push_clip(Rect::new(1, 1, 10, 10));
    r.push_clip(Rect::new(-5, 4, 100, 3));
    r.fill_rect(Rect::new(0, 0, 12, 12), Rgba::GREEN);
    r.pop_clip();
    r.draw_rect(Rect::new(1, 1, 10, 10), Rgba::WHITE, 1);
    r.draw_rect(Rect::new(0, 0, 12, 12), Rgba::RED, 1);
    r.pop_clip();

    // Inner clip: x in [1, 11), y in [4, 7). The outer frame falls outside
    // the first clip entirely.
    for y in 0..12 {
        for x in 0..12 {
            let in_green = (1..11).contains(&x) && (4..7).contains(&y);
            let on_frame = (x == 1 || x == 10 || y == 1 || y == 10)
                && (1..11).contains(&x)
                && (1..11).contains(&y);
            let expected = if on_frame {
                Rgba::WHITE
            } else if in_green {
                Rgba::GREEN
            } else {
                Rgba::BLACK
            };
            assert_eq!(r.pixel_at(x, y), Some(expected), "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_translucent_layers_stack() {
    let mut r = PixelRenderer::software(4, 1).unwrap();
    r.clear(Rgba::BLACK);
    let layer = Rgba::new(255, 255, 255, 51);
    let mut previous = 0u8;
    for n in 1..=4 {
        r.fill_rect(Rect::new(0, 0, n, 1), layer);
        let px = r.pixel_at(0, 0).unwrap();
        assert!(px.r > previous);
        assert_eq!(px.a, 255);
        previous = px.r;
    }
    // Pixel 3 received one layer, pixel 0 four
    assert!(r.pixel_at(3, 0).unwrap().r < r.pixel_at(0, 0).unwrap().r);
}
