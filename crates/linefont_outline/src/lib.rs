//! Stroke font outlines read from SVG font documents.
//!
//! Only straight-line outlines are supported: a glyph is a list of polylines, each one
//! started by a move-to and continued by line-to commands. Glyphs are limited to the
//! printable ASCII range.

use indexmap::IndexMap;

pub mod document;
pub mod errors;
pub mod path;

pub use document::{parse_font, read_font, FaceMetrics};
pub use errors::{OutlineError, OutlineResult};
pub use path::{parse_path, PathCommand};

/// Code points at or above this value are dropped when reading a font
pub const CODEPOINT_LIMIT: u32 = 128;

/// A coordinate in font units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One continuous polyline. Always holds at least the point of the move-to that started it.
#[derive(Debug, Clone, PartialEq)]
pub struct Subpath {
    points: Vec<Point>,
}

impl Subpath {
    #[must_use]
    pub fn new(start: Point) -> Self {
        Self { points: vec![start] }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Builds a subpath from a list of points. Returns `None` for an empty list, since
    /// every subpath starts with a point.
    #[must_use]
    pub fn from_points(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// A single glyph. A glyph without path data (like the space) has no subpaths but still
/// carries its advance width.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub codepoint: u8,
    /// Horizontal advance in font units
    pub advance: f64,
    pub subpaths: Vec<Subpath>,
}

impl Glyph {
    #[must_use]
    pub fn new(codepoint: u8, advance: f64, subpaths: Vec<Subpath>) -> Self {
        Self {
            codepoint,
            advance,
            subpaths,
        }
    }
}

/// A font as read from one document. Glyphs iterate in the order their code point was first
/// seen in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub name: String,
    glyphs: IndexMap<u8, Glyph>,
}

impl Font {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            glyphs: IndexMap::new(),
        }
    }

    /// Symbol prefix used for every generated identifier of this font
    #[must_use]
    pub fn symbol(&self) -> String {
        self.name.to_lowercase()
    }

    /// Inserts the glyph and returns the one it replaced. A replaced glyph keeps its
    /// original position in the iteration order.
    pub fn insert(&mut self, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(glyph.codepoint, glyph)
    }

    #[must_use]
    pub fn get(&self, codepoint: u8) -> Option<&Glyph> {
        self.glyphs.get(&codepoint)
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
