// src/color.rs

//! Defines the 8-bit-per-channel `Rgba` color and the channel interpolation
//! used by gradient fills.

use serde::{Deserialize, Serialize};

/// RGBA color in 32-bit format (8 bits per channel, straight alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to RGBA byte array
    pub const fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Reads a color from the first four bytes of a pixel slice. Callers
    /// pass whole pixels; `From<[u8; 4]>` is the public conversion.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Linear interpolation between `from` and `to`, each channel independently.
    ///
    /// `t` is expected in `0.0..=1.0`. Results are rounded to the nearest
    /// integer and clamped to `0..=255`, so `t == 0.0` yields `from` and
    /// `t == 1.0` yields `to` exactly.
    pub fn lerp(from: Rgba, to: Rgba, t: f32) -> Rgba {
        Rgba {
            r: lerp_channel(from.r, to.r, t),
            g: lerp_channel(from.g, to.g, t),
            b: lerp_channel(from.b, to.b, t),
            a: lerp_channel(from.a, to.a, t),
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let from = from as f32;
    let value = from + (to as f32 - from) * t;
    value.round().clamp(0.0, 255.0) as u8
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Rgba::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_bytes()
    }
}
