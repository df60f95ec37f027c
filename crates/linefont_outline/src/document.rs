//! Reading glyphs out of SVG font documents
use std::path::Path;

use log::{debug, warn};
use roxmltree::{Document, Node, ParsingOptions};

use crate::errors::{OutlineError, OutlineResult};
use crate::path::parse_path;
use crate::{Font, Glyph, CODEPOINT_LIMIT};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

const ATTR_UNICODE: &str = "unicode";
const ATTR_ADVANCE: &str = "horiz-adv-x";
const ATTR_PATH: &str = "d";

/// Vertical metrics of the `<font-face>` element. They are read for diagnostics only and
/// never end up in the generated tables.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FaceMetrics {
    pub units_per_em: Option<f64>,
    pub ascent: Option<f64>,
    pub descent: Option<f64>,
}

impl FaceMetrics {
    fn from_node(node: Node) -> Self {
        let number = |name: &str| node.attribute(name).and_then(|v| v.trim().parse::<f64>().ok());

        Self {
            units_per_em: number("units-per-em"),
            ascent: number("ascent"),
            descent: number("descent"),
        }
    }
}

/// Returns the code point of a `unicode` attribute when it is a single ASCII character
fn ascii_codepoint(unicode: &str) -> Option<u8> {
    let mut chars = unicode.chars();
    let c = chars.next()?;
    if chars.next().is_some() || (c as u32) >= CODEPOINT_LIMIT {
        return None;
    }
    u8::try_from(c).ok()
}

fn read_glyph(node: Node, codepoint: u8, unicode: &str) -> OutlineResult<Glyph> {
    let raw_advance = node
        .attribute(ATTR_ADVANCE)
        .ok_or_else(|| OutlineError::MissingAttribute {
            attribute: ATTR_ADVANCE,
            codepoint: unicode.to_string(),
        })?;

    let advance = raw_advance
        .trim()
        .parse::<f64>()
        .map_err(|_| OutlineError::MalformedAttribute {
            attribute: ATTR_ADVANCE,
            value: raw_advance.to_string(),
            codepoint: unicode.to_string(),
        })?;

    let subpaths = match node.attribute(ATTR_PATH) {
        Some(data) => parse_path(data, unicode)?,
        None => Vec::new(),
    };

    Ok(Glyph::new(codepoint, advance, subpaths))
}

/// Parses the SVG font document in `source` into a font called `name`.
///
/// Glyphs without a `unicode` attribute, with more than one character in it, or outside of
/// the ASCII range are skipped. Everything else must be well-formed or the whole font fails.
pub fn parse_font(name: &str, source: &str) -> OutlineResult<Font> {
    // Font files commonly carry an SVG 1.1 doctype
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(source, options)?;
    let mut font = Font::new(name);

    for node in document.descendants() {
        if node.has_tag_name((SVG_NAMESPACE, "font-face")) {
            debug!("{name}: face metrics {:?}", FaceMetrics::from_node(node));
            continue;
        }

        if !node.has_tag_name((SVG_NAMESPACE, "glyph")) {
            continue;
        }

        let Some(unicode) = node.attribute(ATTR_UNICODE) else {
            continue;
        };
        let Some(codepoint) = ascii_codepoint(unicode) else {
            warn!("{name}: skipping glyph {unicode:?} outside of the supported range");
            continue;
        };

        let glyph = read_glyph(node, codepoint, unicode)?;
        if font.insert(glyph).is_some() {
            warn!("{name}: duplicate glyph for code point {codepoint}, keeping the last one");
        }
    }

    Ok(font)
}

/// Reads the font document at `path`. The font is named after the file stem.
pub fn read_font(path: &Path) -> OutlineResult<Font> {
    let source = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    parse_font(&name, &source)
}
