// src/main.rs

//! `core-paint` demo: renders a showcase scene and writes it as a PNG.
//!
//! The scene is drawn twice, once on the configured pixel renderer and once
//! through the GPU adapter into a recording context, and the two results are
//! compared so backend drift shows up in the log.

use core_paint::{
    config::CONFIG, CodePage, GpuRenderer, PixelRenderer, Point, RecordingContext, Rect, Renderer,
    Rgba,
};

use anyhow::Context;
use log::{info, warn};

const MARGIN: i32 = 16;

/// Draws the showcase scene on any backend.
fn draw_scene(r: &mut dyn Renderer, width: i32, height: i32) {
    // Background
    r.fill_rect_gradient(
        Rect::new(0, 0, width, height),
        Rgba::opaque(24, 28, 48),
        Rgba::opaque(48, 24, 64),
        Rgba::opaque(8, 8, 16),
        Rgba::opaque(16, 40, 56),
    );

    // Title bar
    let title_height = r.measure_text_height(2) + MARGIN;
    r.fill_rect(Rect::new(0, 0, width, title_height), Rgba::new(0, 0, 0, 160));
    r.draw_text("core-paint", Point::new(MARGIN, MARGIN / 2), Rgba::WHITE, 2);

    // Checkerboard panel framed by a two-pixel border
    let panel = Rect::new(
        MARGIN,
        title_height + MARGIN,
        width / 2 - MARGIN * 2,
        height / 2,
    );
    r.fill_rect_checkerboard(
        panel,
        8,
        Rgba::opaque(200, 200, 200),
        Rgba::opaque(150, 150, 150),
    );
    r.fill_rect(panel, Rgba::new(255, 64, 0, 96));
    r.draw_rect(panel, Rgba::WHITE, 2);

    // Nested clips: the inner text can only show where both clips overlap
    let clip_outer = Rect::new(panel.x + 8, panel.y + 8, panel.width - 16, panel.height / 2);
    r.push_clip(clip_outer);
    r.fill_rect(Rect::new(0, 0, width, height), Rgba::new(0, 0, 64, 128));
    r.push_clip(Rect::new(clip_outer.x, clip_outer.y, clip_outer.width / 2, height));
    r.draw_text(
        "clipped twice",
        Point::new(clip_outer.x + 4, clip_outer.y + 4),
        Rgba::opaque(255, 255, 0),
        3,
    );
    r.pop_clip();
    r.pop_clip();

    // Text in both code pages
    let column_x = width / 2 + MARGIN;
    let line = r.measure_text_height(1) + 4;
    let mut y = title_height + MARGIN;
    r.set_code_page(CodePage::Cp437);
    for text in ["CP437:", "┌──────┐", "│ ░▒▓█ │", "└──────┘", "Café αβ ½"] {
        r.draw_text(text, Point::new(column_x, y), Rgba::opaque(180, 255, 180), 1);
        y += line;
    }
    y += line;
    r.set_code_page(CodePage::Windows1252);
    for text in ["Windows-1252:", "Café “quoted” €5", "Ærø — Œuvre"] {
        r.draw_text(text, Point::new(column_x, y), Rgba::opaque(255, 200, 160), 1);
        y += line;
    }

    // Swatches along the bottom
    let swatch = (width - MARGIN * 2) / 6;
    let swatch_y = height - swatch.min(height / 5) - MARGIN;
    let swatches = [
        Rgba::RED,
        Rgba::GREEN,
        Rgba::BLUE,
        Rgba::WHITE,
        Rgba::BLACK,
        Rgba::new(255, 255, 255, 64),
    ];
    for (i, color) in swatches.into_iter().enumerate() {
        let cell = Rect::new(
            MARGIN + i as i32 * swatch,
            swatch_y,
            swatch - 4,
            height - swatch_y - MARGIN,
        );
        r.fill_rect(cell, color);
        r.draw_rect(cell, Rgba::opaque(90, 90, 90), 1);
    }
}

/// Main entry point for the `core-paint` demo.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting core-paint...");

    let config = &*CONFIG;
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.snapshot.output.clone());

    let mut pixel =
        PixelRenderer::from_config(config).context("Failed to create pixel renderer")?;
    let (width, height) = (pixel.width(), pixel.height());
    info!(
        "Surface {}x{} ({:?}), code page {}",
        width,
        height,
        pixel.compositing(),
        pixel.code_page()
    );
    draw_scene(&mut pixel, width, height);

    let mut gpu = GpuRenderer::from_config(RecordingContext::new(width, height), config);
    draw_scene(&mut gpu, width, height);
    let context = gpu.into_context();
    info!(
        "GPU adapter emitted {} calls ({} quads)",
        context.calls().len(),
        context.quads().len()
    );
    let replayed = context
        .rasterize()
        .context("Failed to rasterize recorded GPU calls")?;
    let differing = pixel
        .pixels()
        .chunks_exact(4)
        .zip(replayed.pixels().chunks_exact(4))
        .filter(|(a, b)| a != b)
        .count();
    if differing == 0 {
        info!("Pixel and GPU backends agree on every pixel");
    } else {
        warn!("{} pixels differ between pixel and GPU backends", differing);
    }

    pixel
        .snapshot()
        .write_png(&output)
        .with_context(|| format!("Failed to write snapshot to {}", output))?;

    info!("core-paint finished.");
    Ok(())
}
