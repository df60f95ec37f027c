//! Errors raised while turning outlines into glyph tables
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CodegenError {
    #[error("value {value} quantizes to {quantized}, outside of the int16_t coordinate range")]
    OutOfRange { value: f64, quantized: f64 },

    #[error("font name {name:?} cannot be used in a C++ identifier")]
    InvalidFontName { name: String },
}

/// Result that can be returned which holds either T or a `CodegenError`
pub type CodegenResult<T> = Result<T, CodegenError>;
