// src/snapshot.rs

//! Export of a pixel buffer to image files.
//!
//! A [`Snapshot`] borrows an RGBA buffer in the renderer layout (row-major,
//! top-left origin, 4 bytes per pixel) and hands it to the `image` crate.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::info;

use crate::error::{RenderError, Result};
use crate::renderer::pixel::{PixelRenderer, BYTES_PER_PIXEL};

/// A read-only view of a finished frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    width: u32,
    height: u32,
    pixels: &'a [u8],
}

impl<'a> Snapshot<'a> {
    /// Wraps a raw buffer, checking its length against the dimensions.
    pub fn new(width: i32, height: i32, pixels: &'a [u8]) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(RenderError::InvalidSurfaceSize { width, height });
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(RenderError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    /// Copies the frame into an owned `image` buffer.
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.pixels.to_vec()).ok_or(
            RenderError::BufferSizeMismatch {
                expected: self.width as usize * self.height as usize * BYTES_PER_PIXEL,
                actual: self.pixels.len(),
            },
        )
    }

    /// Writes the frame as a PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_rgba_image()?
            .save_with_format(path, ImageFormat::Png)?;
        info!(
            "Snapshot: wrote {}x{} PNG to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

impl PixelRenderer {
    /// Borrows the current buffer as a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            width: self.width() as u32,
            height: self.height() as u32,
            pixels: self.pixels(),
        }
    }
}
