//! core-paint library crate.
//!
//! A small immediate-mode 2D renderer: flat, gradient and checkerboard fills,
//! 8×8 bitmap text in two code pages, and hierarchical clipping, behind one
//! [`Renderer`] trait with pixel-buffer and GPU backends.

pub mod clip;
pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod geometry;
pub mod renderer;
pub mod snapshot;

pub use clip::ClipStack;
pub use color::Rgba;
pub use error::{RenderError, Result};
pub use font::{BitmapFont, CodePage};
pub use geometry::{Point, Rect};
pub use renderer::{
    Compositing, GlCaps, GlContext, GpuFillMode, GpuRenderer, PixelRenderer, RecordingContext,
    Renderer,
};
pub use snapshot::Snapshot;
