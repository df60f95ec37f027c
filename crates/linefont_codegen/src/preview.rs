//! SVG preview of converted fonts, one font per row, for eyeballing the conversion
use std::io::Write;

use anyhow::Result;
use linefont_outline::Font;

use crate::scope::Finalize;

const HEADER: &str = r#"<?xml version="1.0" standalone="no"?><svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 2000 1100">
<path d=""#;
const FOOTER: &str = r##"" fill="transparent" stroke="#000" stroke-width=".05em" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

/// Height of one preview row in font units
const ROW_HEIGHT: f64 = 1250.0;

/// Draws every glyph of every font into a single path. The closing markup is written by
/// [`Finalize::finalize`].
pub struct PreviewWriter<W: Write> {
    out: W,
    scale: f64,
    baseline: f64,
}

impl<W: Write> PreviewWriter<W> {
    pub fn begin(mut out: W, scale: f64) -> Result<Self> {
        out.write_all(HEADER.as_bytes())?;

        Ok(Self {
            out,
            scale,
            baseline: ROW_HEIGHT / scale,
        })
    }

    /// Draws all glyphs of `font` on the next row, left to right
    pub fn dump(&mut self, font: &Font) -> Result<()> {
        let mut offset = 0.0;
        for glyph in font.glyphs() {
            for subpath in &glyph.subpaths {
                for (idx, point) in subpath.points().iter().enumerate() {
                    let command = if idx == 0 { 'M' } else { 'L' };
                    write!(
                        self.out,
                        "{command}{} {} ",
                        point.x / self.scale + offset,
                        self.baseline - point.y / self.scale
                    )?;
                }
            }
            offset += glyph.advance / self.scale;
        }

        self.baseline += ROW_HEIGHT / self.scale;
        Ok(())
    }
}

impl<W: Write> Finalize for PreviewWriter<W> {
    type Output = W;

    fn finalize(mut self) -> Result<W> {
        self.out.write_all(FOOTER.as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }
}
