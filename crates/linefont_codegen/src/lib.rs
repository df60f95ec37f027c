//! Generation of statically embeddable glyph tables.
//!
//! Fonts are quantized to `int16_t` coordinates and written as C++ source: one
//! sentinel-terminated array per glyph, one table per font and a null-terminated list
//! of every font in the run.

pub mod encode;
pub mod errors;
pub mod preview;
pub mod quantize;
pub mod scope;
pub mod writer;

pub use encode::{encode_font, encode_glyph, EncodedFont, EncodedGlyph, Registry};
pub use errors::{CodegenError, CodegenResult};
pub use preview::PreviewWriter;
pub use quantize::{Quantizer, DEFAULT_SCALE, SENTINEL};
pub use scope::{finalize_after, Finalize};
pub use writer::{ExportReport, ExportSession, PREAMBLE};
