// src/error.rs

//! Error type for the fallible edges of the crate.
//!
//! Drawing itself never fails: degenerate geometry is a silent no-op. Errors
//! only come from constructing a surface, loading configuration, or exporting
//! a snapshot.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid surface size {width}x{height}: both dimensions must be positive")]
    InvalidSurfaceSize { width: i32, height: i32 },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image export failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
