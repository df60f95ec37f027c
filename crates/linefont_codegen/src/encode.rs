//! Fixed-point encoding of fonts into sentinel terminated arrays.
//!
//! Every glyph becomes one flat array:
//!
//! ```text
//! [advance, p0x, p0y, p1x, p1y, ..., SENTINEL, q0x, q0y, ..., SENTINEL, ..., SENTINEL]
//! ```
//!
//! One sentinel closes each subpath and one more closes the glyph, so a glyph without
//! subpaths is `[advance, SENTINEL]`. A font is a table of `(code point, advance, array)`
//! records in the font's glyph order, closed by a `(0, 0, null)` record. The table is not
//! sorted: consumers find a glyph by scanning it.
use linefont_outline::{Font, Glyph};

use crate::errors::{CodegenError, CodegenResult};
use crate::quantize::{Quantizer, SENTINEL};

/// One encoded glyph with its table record fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedGlyph {
    pub codepoint: u8,
    pub advance: i16,
    /// Flat coordinate array, starting with the advance
    pub data: Vec<i16>,
}

impl EncodedGlyph {
    /// Number of subpaths, counted from the sentinels in the array
    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == SENTINEL).count().saturating_sub(1)
    }
}

/// A font ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFont {
    pub name: String,
    pub symbol: String,
    pub glyphs: Vec<EncodedGlyph>,
}

impl EncodedFont {
    #[must_use]
    pub fn glyph_symbol(&self, codepoint: u8) -> String {
        format!("_font_glyph_{}_{}", self.symbol, codepoint)
    }

    #[must_use]
    pub fn table_symbol(&self) -> String {
        format!("_font_glyphs_{}", self.symbol)
    }

    #[must_use]
    pub fn font_symbol(&self) -> String {
        format!("_font_{}", self.symbol)
    }

    /// Finds a glyph the way the generated table is searched: a linear scan in table order
    #[must_use]
    pub fn lookup(&self, codepoint: u8) -> Option<&EncodedGlyph> {
        self.glyphs.iter().find(|glyph| glyph.codepoint == codepoint)
    }
}

pub fn encode_glyph(glyph: &Glyph, quantizer: &Quantizer) -> CodegenResult<EncodedGlyph> {
    let advance = quantizer.quantize(glyph.advance)?;

    let coordinates: usize = glyph.subpaths.iter().map(|s| s.points().len() * 2 + 1).sum();
    let mut data = Vec::with_capacity(coordinates + 2);
    data.push(advance);

    for subpath in &glyph.subpaths {
        for point in subpath.points() {
            data.push(quantizer.quantize(point.x)?);
            data.push(quantizer.quantize(point.y)?);
        }
        data.push(SENTINEL);
    }
    data.push(SENTINEL);

    Ok(EncodedGlyph {
        codepoint: glyph.codepoint,
        advance,
        data,
    })
}

/// The font name ends up both in a string literal and in identifiers, so it is limited to
/// ASCII letters, digits and underscores.
fn is_identifier_safe(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

pub fn encode_font(font: &Font, quantizer: &Quantizer) -> CodegenResult<EncodedFont> {
    if !is_identifier_safe(&font.name) {
        return Err(CodegenError::InvalidFontName {
            name: font.name.clone(),
        });
    }

    Ok(EncodedFont {
        name: font.name.clone(),
        symbol: font.symbol(),
        glyphs: font
            .glyphs()
            .map(|glyph| encode_glyph(glyph, quantizer))
            .collect::<CodegenResult<_>>()?,
    })
}

/// Symbols of every font written during a run, in the order they were written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    symbols: Vec<String>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, font: &EncodedFont) {
        self.symbols.push(font.font_symbol());
    }

    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
