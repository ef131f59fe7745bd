// src/font/glyphs.rs

//! Glyph bitmap data and synthesis.
//!
//! Hand-drawn bitmaps below are written **least-significant bit = leftmost
//! pixel** (the layout most 8×8 console fonts are published in) and mirrored
//! once at compile time into the crate's MSB-left layout. Procedural glyphs
//! (box drawing, blocks, shades) are built directly in MSB-left form.

use super::{Glyph, GLYPH_HEIGHT};

/// Shown for byte codes the active page maps to a character with no design.
pub const MISSING_GLYPH: Glyph = [0x00, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

/// Used for control codes and whitespace.
pub const BLANK_GLYPH: Glyph = [0; GLYPH_HEIGHT];

const fn mirror(rows: [u8; GLYPH_HEIGHT]) -> Glyph {
    let mut out = [0u8; GLYPH_HEIGHT];
    let mut i = 0;
    while i < GLYPH_HEIGHT {
        out[i] = rows[i].reverse_bits();
        i += 1;
    }
    out
}

const fn mirror_table<const N: usize>(table: [[u8; GLYPH_HEIGHT]; N]) -> [Glyph; N] {
    let mut out = [[0u8; GLYPH_HEIGHT]; N];
    let mut i = 0;
    while i < N {
        out[i] = mirror(table[i]);
        i += 1;
    }
    out
}

/// Printable ASCII `0x20..=0x7E`, LSB-left.
#[rustfmt::skip]
const ASCII_LSB: [[u8; GLYPH_HEIGHT]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // !
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // "
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // #
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], // $
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], // %
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // &
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // '
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], // (
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], // )
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // *
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ,
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // .
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // /
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // 0
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // 1
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // 2
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // 3
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // 4
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // 5
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // 6
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // 7
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // 8
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // 9
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], // :
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ;
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], // <
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], // =
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], // >
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], // ?
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], // @
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // A
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // B
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], // C
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], // D
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // E
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], // F
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], // G
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // H
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // I
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], // J
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // K
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], // L
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // M
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // N
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // O
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // P
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], // Q
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], // R
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], // S
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // T
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // V
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // W
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // X
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // Y
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // Z
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], // [
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // \
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], // ]
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // _
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // `
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // a
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], // b
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], // c
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // d
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // e
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // f
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // g
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // h
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // i
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // j
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // k
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // l
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // m
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // n
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // o
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // p
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // q
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // r
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // s
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // t
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // u
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // v
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // w
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // x
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // y
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // z
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // {
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // |
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // }
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ~
];

static ASCII: [Glyph; 95] = mirror_table(ASCII_LSB);

/// Symbols, Greek letters and ligatures outside ASCII, LSB-left.
#[rustfmt::skip]
const SYMBOLS_LSB: &[(char, [u8; GLYPH_HEIGHT])] = &[
    ('¡', [0x18, 0x00, 0x18, 0x18, 0x3C, 0x3C, 0x18, 0x00]),
    ('¢', [0x18, 0x18, 0x7E, 0x03, 0x03, 0x7E, 0x18, 0x18]),
    ('£', [0x1C, 0x36, 0x26, 0x0F, 0x06, 0x67, 0x3F, 0x00]),
    ('¤', [0x00, 0x63, 0x3E, 0x36, 0x3E, 0x63, 0x00, 0x00]),
    ('¥', [0x33, 0x33, 0x1E, 0x3F, 0x0C, 0x3F, 0x0C, 0x0C]),
    ('§', [0x3C, 0x06, 0x1E, 0x33, 0x1E, 0x30, 0x1E, 0x0F]),
    ('¨', [0x33, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('©', [0x3E, 0x41, 0x5D, 0x45, 0x5D, 0x41, 0x3E, 0x00]),
    ('ª', [0x3C, 0x36, 0x36, 0x7C, 0x00, 0x7E, 0x00, 0x00]),
    ('«', [0x00, 0xCC, 0x66, 0x33, 0x66, 0xCC, 0x00, 0x00]),
    ('¬', [0x00, 0x00, 0x00, 0x3F, 0x30, 0x30, 0x00, 0x00]),
    ('®', [0x3E, 0x41, 0x5D, 0x5D, 0x4D, 0x55, 0x41, 0x3E]),
    ('¯', [0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('°', [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00]),
    ('±', [0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x3F, 0x00]),
    ('²', [0x0E, 0x18, 0x0C, 0x06, 0x1E, 0x00, 0x00, 0x00]),
    ('³', [0x1E, 0x18, 0x1C, 0x18, 0x1E, 0x00, 0x00, 0x00]),
    ('´', [0x18, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('µ', [0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x03, 0x00]),
    ('¶', [0xFE, 0xDB, 0xDB, 0xDE, 0xD8, 0xD8, 0xD8, 0x00]),
    ('·', [0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x00]),
    ('¸', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x06]),
    ('¹', [0x0C, 0x0E, 0x0C, 0x0C, 0x1E, 0x00, 0x00, 0x00]),
    ('º', [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x3E, 0x00, 0x00]),
    ('»', [0x00, 0x33, 0x66, 0xCC, 0x66, 0x33, 0x00, 0x00]),
    ('¼', [0xC3, 0x63, 0x33, 0xDB, 0xCC, 0x56, 0xF3, 0xC0]),
    ('½', [0xC3, 0x63, 0x33, 0xBD, 0xEC, 0xF6, 0xF3, 0x03]),
    ('¿', [0x0C, 0x00, 0x0C, 0x06, 0x03, 0x33, 0x1E, 0x00]),
    ('Æ', [0x7C, 0x36, 0x33, 0x7F, 0x33, 0x33, 0x73, 0x00]),
    ('Ð', [0x1F, 0x36, 0x66, 0x6F, 0x66, 0x36, 0x1F, 0x00]),
    ('×', [0x00, 0x33, 0x1E, 0x0C, 0x1E, 0x33, 0x00, 0x00]),
    ('Ø', [0x5C, 0x36, 0x73, 0x6B, 0x67, 0x36, 0x1D, 0x00]),
    ('Þ', [0x0F, 0x06, 0x3E, 0x66, 0x3E, 0x06, 0x0F, 0x00]),
    ('ß', [0x00, 0x1E, 0x33, 0x1F, 0x33, 0x1F, 0x03, 0x03]),
    ('æ', [0x00, 0x00, 0xFE, 0x30, 0xFE, 0x33, 0xFE, 0x00]),
    ('ð', [0x18, 0x3C, 0x30, 0x3E, 0x33, 0x33, 0x1E, 0x00]),
    ('÷', [0x00, 0x0C, 0x00, 0x3F, 0x00, 0x0C, 0x00, 0x00]),
    ('ø', [0x00, 0x60, 0x3E, 0x33, 0x3B, 0x37, 0x3E, 0x03]),
    ('þ', [0x00, 0x07, 0x06, 0x3E, 0x66, 0x3E, 0x06, 0x0F]),
    ('Œ', [0x7E, 0x1B, 0x1B, 0x7B, 0x1B, 0x1B, 0x7E, 0x00]),
    ('œ', [0x00, 0x00, 0x7E, 0xDB, 0xFB, 0x1B, 0xFE, 0x00]),
    ('ƒ', [0x70, 0xD8, 0x18, 0x3C, 0x18, 0x18, 0x1B, 0x0E]),
    ('ˆ', [0x0C, 0x1E, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('Γ', [0x3F, 0x33, 0x03, 0x03, 0x03, 0x03, 0x03, 0x00]),
    ('Θ', [0x1C, 0x36, 0x63, 0x7F, 0x63, 0x36, 0x1C, 0x00]),
    ('Σ', [0x3F, 0x33, 0x06, 0x0C, 0x06, 0x33, 0x3F, 0x00]),
    ('Φ', [0x3F, 0x0C, 0x1E, 0x33, 0x33, 0x1E, 0x0C, 0x3F]),
    ('Ω', [0x1C, 0x36, 0x63, 0x63, 0x36, 0x36, 0x77, 0x00]),
    ('α', [0x00, 0x00, 0x6E, 0x3B, 0x13, 0x3B, 0x6E, 0x00]),
    ('δ', [0x38, 0x0C, 0x18, 0x3E, 0x33, 0x33, 0x1E, 0x00]),
    ('ε', [0x1C, 0x06, 0x03, 0x1F, 0x03, 0x06, 0x1C, 0x00]),
    ('π', [0x00, 0x7F, 0x36, 0x36, 0x36, 0x36, 0x36, 0x00]),
    ('σ', [0x00, 0x00, 0x7E, 0x1B, 0x1B, 0x1B, 0x0E, 0x00]),
    ('τ', [0x00, 0x6E, 0x3B, 0x18, 0x18, 0x18, 0x18, 0x00]),
    ('φ', [0x00, 0x00, 0x7E, 0xDB, 0xDB, 0x7E, 0x18, 0x00]),
    ('–', [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00]),
    ('—', [0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00]),
    ('‘', [0x03, 0x06, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('’', [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('“', [0x1B, 0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('”', [0x36, 0x36, 0x1B, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('„', [0x00, 0x00, 0x00, 0x00, 0x00, 0x36, 0x36, 0x1B]),
    ('†', [0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x0C, 0x0C, 0x00]),
    ('‡', [0x0C, 0x3F, 0x0C, 0x0C, 0x0C, 0x3F, 0x0C, 0x00]),
    ('•', [0x00, 0x00, 0x1C, 0x3E, 0x3E, 0x1C, 0x00, 0x00]),
    ('…', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xDB, 0x00]),
    ('‹', [0x00, 0x18, 0x0C, 0x06, 0x0C, 0x18, 0x00, 0x00]),
    ('›', [0x00, 0x06, 0x0C, 0x18, 0x0C, 0x06, 0x00, 0x00]),
    ('ⁿ', [0x00, 0x1F, 0x33, 0x33, 0x33, 0x00, 0x00, 0x00]),
    ('€', [0x3C, 0x66, 0x0F, 0x06, 0x0F, 0x66, 0x3C, 0x00]),
    ('₧', [0x1F, 0x33, 0x33, 0x5F, 0x63, 0xF3, 0x63, 0xE3]),
    ('√', [0xF0, 0x30, 0x30, 0x30, 0x37, 0x36, 0x3C, 0x38]),
    ('∞', [0x00, 0x00, 0x36, 0x49, 0x49, 0x36, 0x00, 0x00]),
    ('∩', [0x00, 0x1E, 0x33, 0x33, 0x33, 0x33, 0x00, 0x00]),
    ('≈', [0x00, 0x6E, 0x3B, 0x00, 0x6E, 0x3B, 0x00, 0x00]),
    ('≡', [0x00, 0x3F, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x00]),
    ('≤', [0x30, 0x18, 0x0C, 0x18, 0x30, 0x00, 0x3F, 0x00]),
    ('≥', [0x0C, 0x18, 0x30, 0x18, 0x0C, 0x00, 0x3F, 0x00]),
    ('⌐', [0x00, 0x00, 0x00, 0x3F, 0x03, 0x03, 0x00, 0x00]),
    ('⌠', [0x70, 0xD8, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18]),
    ('⌡', [0x18, 0x18, 0x18, 0x18, 0x18, 0x1B, 0x0E, 0x00]),
];

/// Characters drawn with another character's bitmap.
const ALIASES: &[(char, char)] = &[
    ('\u{A0}', ' '), // no-break space
    ('\u{AD}', '-'), // soft hyphen
    ('¦', '|'),
    ('˜', '~'),
    ('‚', ','),
    ('∙', '·'),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Grave,
    Acute,
    Circumflex,
    Tilde,
    Diaeresis,
    Ring,
    Caron,
    Cedilla,
}

impl Mark {
    /// Two rows placed above the letter, LSB-left.
    fn rows(self) -> [u8; 2] {
        match self {
            Mark::Grave => [0x06, 0x0C],
            Mark::Acute => [0x18, 0x0C],
            Mark::Circumflex => [0x0C, 0x12],
            Mark::Tilde => [0x16, 0x0D],
            Mark::Diaeresis => [0x33, 0x00],
            Mark::Ring => [0x0C, 0x0C],
            Mark::Caron => [0x12, 0x0C],
            // Drawn below the baseline instead; see `compose`.
            Mark::Cedilla => [0x00, 0x00],
        }
    }
}

/// Latin letters built from an ASCII base and a diacritic.
#[rustfmt::skip]
const COMPOSED: &[(char, char, Mark)] = &[
    ('À', 'A', Mark::Grave), ('Á', 'A', Mark::Acute), ('Â', 'A', Mark::Circumflex),
    ('Ã', 'A', Mark::Tilde), ('Ä', 'A', Mark::Diaeresis), ('Å', 'A', Mark::Ring),
    ('Ç', 'C', Mark::Cedilla),
    ('È', 'E', Mark::Grave), ('É', 'E', Mark::Acute), ('Ê', 'E', Mark::Circumflex),
    ('Ë', 'E', Mark::Diaeresis),
    ('Ì', 'I', Mark::Grave), ('Í', 'I', Mark::Acute), ('Î', 'I', Mark::Circumflex),
    ('Ï', 'I', Mark::Diaeresis),
    ('Ñ', 'N', Mark::Tilde),
    ('Ò', 'O', Mark::Grave), ('Ó', 'O', Mark::Acute), ('Ô', 'O', Mark::Circumflex),
    ('Õ', 'O', Mark::Tilde), ('Ö', 'O', Mark::Diaeresis),
    ('Ù', 'U', Mark::Grave), ('Ú', 'U', Mark::Acute), ('Û', 'U', Mark::Circumflex),
    ('Ü', 'U', Mark::Diaeresis),
    ('Ý', 'Y', Mark::Acute), ('Ÿ', 'Y', Mark::Diaeresis),
    ('Š', 'S', Mark::Caron), ('Ž', 'Z', Mark::Caron),
    ('à', 'a', Mark::Grave), ('á', 'a', Mark::Acute), ('â', 'a', Mark::Circumflex),
    ('ã', 'a', Mark::Tilde), ('ä', 'a', Mark::Diaeresis), ('å', 'a', Mark::Ring),
    ('ç', 'c', Mark::Cedilla),
    ('è', 'e', Mark::Grave), ('é', 'e', Mark::Acute), ('ê', 'e', Mark::Circumflex),
    ('ë', 'e', Mark::Diaeresis),
    ('ì', 'i', Mark::Grave), ('í', 'i', Mark::Acute), ('î', 'i', Mark::Circumflex),
    ('ï', 'i', Mark::Diaeresis),
    ('ñ', 'n', Mark::Tilde),
    ('ò', 'o', Mark::Grave), ('ó', 'o', Mark::Acute), ('ô', 'o', Mark::Circumflex),
    ('õ', 'o', Mark::Tilde), ('ö', 'o', Mark::Diaeresis),
    ('ù', 'u', Mark::Grave), ('ú', 'u', Mark::Acute), ('û', 'u', Mark::Circumflex),
    ('ü', 'u', Mark::Diaeresis),
    ('ý', 'y', Mark::Acute), ('ÿ', 'y', Mark::Diaeresis),
    ('š', 's', Mark::Caron), ('ž', 'z', Mark::Caron),
];

fn ascii_lsb(ch: char) -> Option<[u8; GLYPH_HEIGHT]> {
    let code = ch as u32;
    (0x20..=0x7E)
        .contains(&code)
        .then(|| ASCII_LSB[(code - 0x20) as usize])
}

/// Places `mark` on an ASCII letter. Capitals lose their third row to make
/// room; lowercase letters have two free rows on top already (the dot of
/// `i` is replaced).
fn compose(base: char, mark: Mark) -> Option<Glyph> {
    let rows = ascii_lsb(base)?;
    let mut out = rows;
    if mark == Mark::Cedilla {
        out[GLYPH_HEIGHT - 1] = 0x0C;
        return Some(mirror(out));
    }
    let [top, second] = mark.rows();
    if base.is_ascii_uppercase() {
        out = [top, second, rows[0], rows[1], rows[3], rows[4], rows[5], rows[6]];
    } else {
        out[0] = top;
        out[1] = second;
    }
    Some(mirror(out))
}

/// Line weight of one arm of a box-drawing character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arm {
    None,
    Single,
    Double,
}

/// Box-drawing characters as (up, down, left, right) arms.
#[rustfmt::skip]
const BOX_DRAWING: &[(char, [Arm; 4])] = {
    use Arm::{Double as D, None as N, Single as S};
    &[
        ('─', [N, N, S, S]), ('│', [S, S, N, N]), ('┌', [N, S, N, S]), ('┐', [N, S, S, N]),
        ('└', [S, N, N, S]), ('┘', [S, N, S, N]), ('├', [S, S, N, S]), ('┤', [S, S, S, N]),
        ('┬', [N, S, S, S]), ('┴', [S, N, S, S]), ('┼', [S, S, S, S]),
        ('═', [N, N, D, D]), ('║', [D, D, N, N]), ('╒', [N, S, N, D]), ('╓', [N, D, N, S]),
        ('╔', [N, D, N, D]), ('╕', [N, S, D, N]), ('╖', [N, D, S, N]), ('╗', [N, D, D, N]),
        ('╘', [S, N, N, D]), ('╙', [D, N, N, S]), ('╚', [D, N, N, D]), ('╛', [S, N, D, N]),
        ('╜', [D, N, S, N]), ('╝', [D, N, D, N]), ('╞', [S, S, N, D]), ('╟', [D, D, N, S]),
        ('╠', [D, D, N, D]), ('╡', [S, S, D, N]), ('╢', [D, D, S, N]), ('╣', [D, D, D, N]),
        ('╤', [N, S, D, D]), ('╥', [N, D, S, S]), ('╦', [N, D, D, D]), ('╧', [S, N, D, D]),
        ('╨', [D, N, S, S]), ('╩', [D, N, D, D]), ('╪', [S, S, D, D]), ('╫', [D, D, S, S]),
        ('╬', [D, D, D, D]),
    ]
};

const CENTER: usize = 3;

fn arm_offsets(arm: Arm) -> &'static [usize] {
    match arm {
        Arm::None => &[],
        Arm::Single => &[CENTER],
        Arm::Double => &[CENTER - 1, CENTER + 1],
    }
}

/// Rasterizes a box-drawing character directly in MSB-left form.
fn box_glyph(arms: [Arm; 4]) -> Glyph {
    let [up, down, left, right] = arms;
    let mut glyph = BLANK_GLYPH;
    let vertical_double = up == Arm::Double || down == Arm::Double;
    let horizontal_double = left == Arm::Double || right == Arm::Double;

    let column_bit = |col: usize| 0x80u8 >> col;

    // Vertical arms run from the edge to the far horizontal stroke.
    let up_end = if horizontal_double { CENTER + 1 } else { CENTER };
    let down_start = if horizontal_double { CENTER - 1 } else { CENTER };
    for &col in arm_offsets(up) {
        for row in glyph.iter_mut().take(up_end + 1) {
            *row |= column_bit(col);
        }
    }
    for &col in arm_offsets(down) {
        for row in glyph.iter_mut().skip(down_start) {
            *row |= column_bit(col);
        }
    }

    let left_end = if vertical_double { CENTER + 1 } else { CENTER };
    let right_start = if vertical_double { CENTER - 1 } else { CENTER };
    for &row in arm_offsets(left) {
        for col in 0..=left_end {
            glyph[row] |= column_bit(col);
        }
    }
    for &row in arm_offsets(right) {
        for col in right_start..8 {
            glyph[row] |= column_bit(col);
        }
    }
    glyph
}

/// Block elements and shades, MSB-left.
fn block_glyph(ch: char) -> Option<Glyph> {
    let glyph = match ch {
        '█' => [0xFF; GLYPH_HEIGHT],
        '▀' => [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00],
        '▄' => [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF],
        '▌' => [0xF0; GLYPH_HEIGHT],
        '▐' => [0x0F; GLYPH_HEIGHT],
        '■' => [0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x00, 0x00],
        '░' => [0x22, 0x88, 0x22, 0x88, 0x22, 0x88, 0x22, 0x88],
        '▒' => [0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA],
        '▓' => [0xDD, 0x77, 0xDD, 0x77, 0xDD, 0x77, 0xDD, 0x77],
        _ => return None,
    };
    Some(glyph)
}

/// Looks up or synthesizes the bitmap for `ch`.
///
/// Returns `None` when the font has no design for the character; control
/// characters map to a blank glyph.
pub fn glyph_for(ch: char) -> Option<Glyph> {
    if ch.is_control() {
        return Some(BLANK_GLYPH);
    }
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        return Some(ASCII[(code - 0x20) as usize]);
    }
    if let Some(&(_, target)) = ALIASES.iter().find(|(c, _)| *c == ch) {
        return glyph_for(target);
    }
    if let Some(&(_, rows)) = SYMBOLS_LSB.iter().find(|(c, _)| *c == ch) {
        return Some(mirror(rows));
    }
    if let Some(&(_, base, mark)) = COMPOSED.iter().find(|(c, _, _)| *c == ch) {
        return compose(base, mark);
    }
    if let Some(&(_, arms)) = BOX_DRAWING.iter().find(|(c, _)| *c == ch) {
        return Some(box_glyph(arms));
    }
    block_glyph(ch)
}
