// src/font/code_page.rs

//! Single-byte code pages selectable on a [`BitmapFont`](super::BitmapFont).
//!
//! Both pages agree with ASCII on `0x00..=0x7F`; they differ only in the upper
//! half. A code page is used in both directions: text is *encoded* to glyph
//! codes before drawing, and glyph tables are built by *decoding* each code to
//! the character it stands for.

use serde::{Deserialize, Serialize};

/// Byte emitted for characters the active page cannot represent.
pub const REPLACEMENT_BYTE: u8 = b'?';

/// The two supported 8-bit code pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodePage {
    /// IBM PC / OEM United States (code page 437): accented letters, box
    /// drawing, block elements and a handful of Greek and math symbols.
    #[default]
    Cp437,
    /// Windows Western European (code page 1252): Latin-1 plus typographic
    /// punctuation in `0x80..=0x9F`.
    Windows1252,
}

/// Upper half of code page 437, indexed by `code - 0x80`.
const CP437_HIGH: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', //
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»', //
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐', //
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧', //
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀', //
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩', //
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{A0}',
];

/// `0x80..=0x9F` of Windows-1252. `None` marks the five undefined codes.
const CP1252_C1: [Option<char>; 32] = [
    Some('€'),
    None,
    Some('‚'),
    Some('ƒ'),
    Some('„'),
    Some('…'),
    Some('†'),
    Some('‡'),
    Some('ˆ'),
    Some('‰'),
    Some('Š'),
    Some('‹'),
    Some('Œ'),
    None,
    Some('Ž'),
    None,
    None,
    Some('‘'),
    Some('’'),
    Some('“'),
    Some('”'),
    Some('•'),
    Some('–'),
    Some('—'),
    Some('˜'),
    Some('™'),
    Some('š'),
    Some('›'),
    Some('œ'),
    None,
    Some('ž'),
    Some('Ÿ'),
];

impl CodePage {
    pub const ALL: [CodePage; 2] = [CodePage::Cp437, CodePage::Windows1252];

    /// Human-readable name, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            CodePage::Cp437 => "CP437",
            CodePage::Windows1252 => "Windows-1252",
        }
    }

    /// The character a byte code stands for, or `None` for codes the page
    /// leaves undefined.
    pub fn decode(&self, code: u8) -> Option<char> {
        if code < 0x80 {
            return Some(code as char);
        }
        let high = (code - 0x80) as usize;
        match self {
            CodePage::Cp437 => Some(CP437_HIGH[high]),
            CodePage::Windows1252 => {
                if code < 0xA0 {
                    CP1252_C1[high]
                } else {
                    // 0xA0..=0xFF coincides with U+00A0..=U+00FF
                    char::from_u32(code as u32)
                }
            }
        }
    }

    /// The byte code for `ch`, or `None` when the page has no such character.
    pub fn encode_char(&self, ch: char) -> Option<u8> {
        if ch.is_ascii() {
            return Some(ch as u8);
        }
        match self {
            CodePage::Cp437 => CP437_HIGH
                .iter()
                .position(|&c| c == ch)
                .map(|i| 0x80 + i as u8),
            CodePage::Windows1252 => {
                let cp = ch as u32;
                if (0xA0..=0xFF).contains(&cp) {
                    return Some(cp as u8);
                }
                CP1252_C1
                    .iter()
                    .position(|&c| c == Some(ch))
                    .map(|i| 0x80 + i as u8)
            }
        }
    }

    /// Encodes text one byte per `char`, substituting [`REPLACEMENT_BYTE`]
    /// for anything the page cannot represent.
    pub fn encode<'a>(&self, text: &'a str) -> impl Iterator<Item = u8> + 'a {
        let page = *self;
        text.chars()
            .map(move |ch| page.encode_char(ch).unwrap_or(REPLACEMENT_BYTE))
    }
}

impl std::fmt::Display for CodePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
