// src/font/mod.rs

//! Fixed 8×8 bitmap font with switchable code pages.
//!
//! Text is encoded one byte per `char` through the active [`CodePage`]; each
//! byte indexes a 256-entry glyph table built for that page when the font is
//! constructed. A glyph is eight rows, top row first, each row a `u8` whose
//! **most significant bit is the leftmost pixel**.

pub mod code_page;
mod glyphs;

pub use code_page::{CodePage, REPLACEMENT_BYTE};

use log::debug;

/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: i32 = 8;
/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: usize = 8;
/// Extra horizontal pixels between glyph cells, before scaling.
pub const DEFAULT_GLYPH_SPACING: i32 = 1;

/// Eight rows of an 8×8 glyph, MSB-left.
pub type Glyph = [u8; GLYPH_HEIGHT];

type GlyphTable = [Glyph; 256];

fn build_table(page: CodePage) -> Box<GlyphTable> {
    let mut table = Box::new([glyphs::MISSING_GLYPH; 256]);
    let mut missing = 0usize;
    for (code, slot) in table.iter_mut().enumerate() {
        let glyph = page
            .decode(code as u8)
            .and_then(glyphs::glyph_for)
            .unwrap_or_else(|| {
                missing += 1;
                glyphs::MISSING_GLYPH
            });
        *slot = glyph;
    }
    debug!(
        "BitmapFont: built {} glyph table ({} codes without a design)",
        page, missing
    );
    table
}

/// The 8×8 bitmap font shared by every renderer backend.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    cp437: Box<GlyphTable>,
    windows1252: Box<GlyphTable>,
    code_page: CodePage,
    spacing: i32,
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::new(CodePage::default(), DEFAULT_GLYPH_SPACING)
    }
}

impl BitmapFont {
    /// Builds the glyph tables for every page and selects `code_page`.
    /// Negative spacing is treated as zero.
    pub fn new(code_page: CodePage, spacing: i32) -> Self {
        Self {
            cp437: build_table(CodePage::Cp437),
            windows1252: build_table(CodePage::Windows1252),
            code_page,
            spacing: spacing.max(0),
        }
    }

    pub fn code_page(&self) -> CodePage {
        self.code_page
    }

    /// Switches the page used for subsequent encoding and lookup.
    pub fn set_code_page(&mut self, code_page: CodePage) {
        if code_page != self.code_page {
            debug!("BitmapFont: code page {} -> {}", self.code_page, code_page);
        }
        self.code_page = code_page;
    }

    /// Horizontal gap between glyph cells, before scaling.
    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    /// Distance from one glyph origin to the next at `scale`.
    pub fn advance(&self, scale: i32) -> i32 {
        (GLYPH_WIDTH + self.spacing).saturating_mul(scale)
    }

    /// Bitmap for a byte code in the active page.
    pub fn glyph(&self, code: u8) -> &Glyph {
        let table = match self.code_page {
            CodePage::Cp437 => &self.cp437,
            CodePage::Windows1252 => &self.windows1252,
        };
        &table[code as usize]
    }

    /// Encodes `text` with the active page.
    pub fn encode<'a>(&self, text: &'a str) -> impl Iterator<Item = u8> + 'a {
        self.code_page.encode(text)
    }

    /// Pixel width of `text` at `scale`: one advance per encoded byte,
    /// trailing spacing included. Scales below one count as one.
    pub fn measure_width(&self, text: &str, scale: i32) -> i32 {
        let count = i32::try_from(self.encode(text).count()).unwrap_or(i32::MAX);
        count.saturating_mul(self.advance(scale.max(1)))
    }

    /// Pixel height of one line at `scale`. Scales below one count as one.
    pub fn measure_height(&self, scale: i32) -> i32 {
        (GLYPH_HEIGHT as i32).saturating_mul(scale.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_a_bit_pattern() {
        let font = BitmapFont::default();
        assert_eq!(
            font.glyph(b'A'),
            &[0x30, 0x78, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0x00]
        );
    }

    #[test]
    fn test_space_is_blank_in_both_pages() {
        let mut font = BitmapFont::default();
        assert_eq!(font.glyph(b' '), &[0u8; GLYPH_HEIGHT]);
        font.set_code_page(CodePage::Windows1252);
        assert_eq!(font.glyph(b' '), &[0u8; GLYPH_HEIGHT]);
    }

    #[test]
    fn test_code_page_switch_changes_upper_half() {
        // Contract: 0xC4 is a box-drawing line in CP437 and 'Ä' in 1252
        let mut font = BitmapFont::default();
        let line = *font.glyph(0xC4);
        assert_eq!(line[3], 0xFF);
        font.set_code_page(CodePage::Windows1252);
        let a_umlaut = *font.glyph(0xC4);
        assert_ne!(line, a_umlaut);
        assert_eq!(font.code_page(), CodePage::Windows1252);
    }

    #[test]
    fn test_undefined_code_shows_missing_glyph() {
        let mut font = BitmapFont::default();
        font.set_code_page(CodePage::Windows1252);
        assert_eq!(font.glyph(0x81), &glyphs::MISSING_GLYPH);
    }

    #[test]
    fn test_measure_width_includes_spacing() {
        let font = BitmapFont::default();
        assert_eq!(font.measure_width("", 1), 0);
        assert_eq!(font.measure_width("A", 1), 9);
        assert_eq!(font.measure_width("Hello", 2), 5 * 9 * 2);
        // Zero or negative scale measures as scale 1
        assert_eq!(font.measure_width("Hi", 0), 18);
        assert_eq!(font.measure_width("Hi", -4), 18);
    }

    #[test]
    fn test_measure_width_counts_chars_not_bytes() {
        let font = BitmapFont::default();
        // Two-byte UTF-8 and unmappable chars still cost one cell each
        assert_eq!(font.measure_width("é日", 1), 18);
    }

    #[test]
    fn test_measure_height() {
        let font = BitmapFont::default();
        assert_eq!(font.measure_height(1), 8);
        assert_eq!(font.measure_height(3), 24);
        assert_eq!(font.measure_height(0), 8);
    }

    #[test]
    fn test_custom_spacing() {
        let font = BitmapFont::new(CodePage::Cp437, 0);
        assert_eq!(font.measure_width("abc", 1), 24);
        let font = BitmapFont::new(CodePage::Cp437, -3);
        assert_eq!(font.spacing(), 0);
    }
}
