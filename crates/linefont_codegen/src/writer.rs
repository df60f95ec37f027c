//! C++ source emission for encoded fonts
use std::io::Write;

use anyhow::{Context, Result};
use linefont_outline::Font;
use log::debug;

use crate::encode::{encode_font, EncodedFont, Registry};
use crate::quantize::{Quantizer, SENTINEL};
use crate::scope::Finalize;

const END_OF_LINE: &str = "_END_OF_LINE";

/// Sentinel constant and record shapes shared by every generated table
pub const PREAMBLE: &str = r"#include <stdint.h>

static constexpr int16_t _END_OF_LINE = 0x7FFF;

struct Glyph {
    uint16_t codepoint;
    uint16_t advance;
    const int16_t* lines;
};
struct Font {
    const char* name;
    const Glyph* glyphs;
};
";

/// Writes the coordinate arrays, the glyph table and the font record of one font
pub fn write_font<W: Write>(out: &mut W, font: &EncodedFont) -> std::io::Result<()> {
    for glyph in &font.glyphs {
        write!(out, "static const int16_t {}[] = {{", font.glyph_symbol(glyph.codepoint))?;
        for &value in &glyph.data {
            if value == SENTINEL {
                write!(out, "{END_OF_LINE},")?;
            } else {
                write!(out, "{value},")?;
            }
        }
        writeln!(out, "}};")?;
    }

    writeln!(out, "static const Glyph {}[] = {{", font.table_symbol())?;
    for glyph in &font.glyphs {
        writeln!(
            out,
            "  {{{}, {}, {}}},",
            glyph.codepoint,
            glyph.advance,
            font.glyph_symbol(glyph.codepoint)
        )?;
    }
    writeln!(out, "  {{0, 0, nullptr}},")?;
    writeln!(out, "}};")?;

    writeln!(
        out,
        "static const Font {} = {{\"{}\", {}}};",
        font.font_symbol(),
        font.name,
        font.table_symbol()
    )
}

/// Writes the null terminated list of every registered font
pub fn write_trailer<W: Write>(out: &mut W, registry: &Registry) -> std::io::Result<()> {
    writeln!(out, "static const Font* _all_fonts[] = {{")?;
    for symbol in registry.symbols() {
        writeln!(out, "  &{symbol},")?;
    }
    writeln!(out, "  nullptr,")?;
    writeln!(out, "}};")
}

/// An open output artifact. Fonts are appended one at a time; the registry trailer is
/// written by [`Finalize::finalize`].
pub struct ExportSession<W: Write> {
    out: W,
    quantizer: Quantizer,
    registry: Registry,
    glyph_count: usize,
}

/// What a finished session hands back
#[derive(Debug)]
pub struct ExportReport<W> {
    pub writer: W,
    pub registry: Registry,
    pub glyph_count: usize,
}

impl<W: Write> ExportSession<W> {
    /// Starts a new artifact by writing the preamble
    pub fn begin(mut out: W, quantizer: Quantizer) -> Result<Self> {
        out.write_all(PREAMBLE.as_bytes())?;

        Ok(Self {
            out,
            quantizer,
            registry: Registry::new(),
            glyph_count: 0,
        })
    }

    /// Encodes and appends one font, and registers it for the trailer
    pub fn store(&mut self, font: &Font) -> Result<EncodedFont> {
        let encoded = encode_font(font, &self.quantizer)
            .with_context(|| format!("cannot encode font {}", font.name))?;
        write_font(&mut self.out, &encoded)?;

        debug!("stored font {} with {} glyphs", encoded.name, encoded.glyphs.len());
        self.glyph_count += encoded.glyphs.len();
        self.registry.register(&encoded);

        Ok(encoded)
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }
}

impl<W: Write> Finalize for ExportSession<W> {
    type Output = ExportReport<W>;

    fn finalize(mut self) -> Result<Self::Output> {
        write_trailer(&mut self.out, &self.registry)?;
        self.out.flush()?;

        Ok(ExportReport {
            writer: self.out,
            registry: self.registry,
            glyph_count: self.glyph_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CodegenError;
    use crate::scope::finalize_after;
    use anyhow::anyhow;
    use linefont_outline::{Glyph, Point, Subpath};

    fn font(name: &str) -> Font {
        let mut font = Font::new(name);
        font.insert(Glyph::new(
            b'A',
            600.0,
            vec![
                Subpath::from_points(vec![
                    Point::new(0.0, 0.0),
                    Point::new(100.0, 0.0),
                    Point::new(100.0, 100.0),
                ])
                .unwrap(),
                Subpath::from_points(vec![Point::new(200.0, 200.0), Point::new(300.0, -300.0)]).unwrap(),
            ],
        ));
        font.insert(Glyph::new(b' ', 123.4, vec![]));
        font
    }

    fn render(font: &Font) -> String {
        let mut out = Vec::new();
        write_font(&mut out, &encode_font(font, &Quantizer::default()).unwrap()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn font_layout() {
        let expected = "\
static const int16_t _font_glyph_sans_65[] = {12,0,0,2,0,2,2,_END_OF_LINE,4,4,6,-6,_END_OF_LINE,_END_OF_LINE,};
static const int16_t _font_glyph_sans_32[] = {2,_END_OF_LINE,};
static const Glyph _font_glyphs_sans[] = {
  {65, 12, _font_glyph_sans_65},
  {32, 2, _font_glyph_sans_32},
  {0, 0, nullptr},
};
static const Font _font_sans = {\"Sans\", _font_glyphs_sans};
";
        assert_eq!(render(&font("Sans")), expected);
    }

    #[test]
    fn empty_font_still_has_a_table() {
        let expected = "\
static const Glyph _font_glyphs_empty[] = {
  {0, 0, nullptr},
};
static const Font _font_empty = {\"Empty\", _font_glyphs_empty};
";
        assert_eq!(render(&Font::new("Empty")), expected);
    }

    #[test]
    fn writing_twice_is_identical() {
        let font = font("Sans");
        assert_eq!(render(&font), render(&font));
    }

    #[test]
    fn session_writes_preamble_fonts_and_trailer() {
        let mut session = ExportSession::begin(Vec::new(), Quantizer::default()).unwrap();
        session.store(&font("First")).unwrap();
        session.store(&font("second")).unwrap();
        assert_eq!(session.glyph_count(), 4);
        assert_eq!(session.registry().len(), 2);

        let report = session.finalize().unwrap();
        let output = String::from_utf8(report.writer).unwrap();

        assert!(output.starts_with(PREAMBLE));
        assert!(output.ends_with(
            "static const Font* _all_fonts[] = {\n  &_font_first,\n  &_font_second,\n  nullptr,\n};\n"
        ));
        assert!(output.find("_font_first =").unwrap() < output.find("_font_second =").unwrap());
        assert_eq!(report.glyph_count, 4);
    }

    #[test]
    fn trailer_is_written_when_the_body_fails() {
        let mut out = Vec::new();
        let session = ExportSession::begin(&mut out, Quantizer::default()).unwrap();

        let result = finalize_after(session, |session| {
            session.store(&font("Kept"))?;
            Err(anyhow!("broken glyph"))
        });

        assert_eq!(result.unwrap_err().to_string(), "broken glyph");
        let output = String::from_utf8(out).unwrap();
        assert!(output.ends_with("  &_font_kept,\n  nullptr,\n};\n"));
    }

    #[test]
    fn rejected_font_is_neither_written_nor_registered() {
        let mut session = ExportSession::begin(Vec::new(), Quantizer::default()).unwrap();
        session.store(&font("Kept")).unwrap();

        let err = session.store(&font("Not\"Kept")).unwrap_err();
        assert!(matches!(
            err.root_cause().downcast_ref::<CodegenError>(),
            Some(CodegenError::InvalidFontName { .. })
        ));
        assert_eq!(session.registry().symbols(), &["_font_kept".to_string()]);

        let report = session.finalize().unwrap();
        let output = String::from_utf8(report.writer).unwrap();
        assert!(!output.contains("Not"));
        assert_eq!(report.glyph_count, 2);
    }

    #[test]
    fn empty_run_has_empty_registry() {
        let session = ExportSession::begin(Vec::new(), Quantizer::default()).unwrap();
        let report = finalize_after(session, |_| Ok(())).unwrap();
        let output = String::from_utf8(report.writer).unwrap();
        assert_eq!(
            output,
            format!("{PREAMBLE}static const Font* _all_fonts[] = {{\n  nullptr,\n}};\n")
        );
    }
}
