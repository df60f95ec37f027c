//! Error results that can be returned while reading font outlines
use thiserror::Error;

/// Every error is fatal for the run. The `codepoint` fields carry the raw `unicode`
/// attribute of the glyph that was being read.
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("unsupported path command: {command} {params:?} ({codepoint})")]
    UnsupportedCommand {
        command: char,
        params: String,
        codepoint: String,
    },

    #[error("line-to without a current subpath ({codepoint})")]
    NoCurrentSubpath { codepoint: String },

    #[error("malformed number {token:?} in path data ({codepoint})")]
    MalformedNumber { token: String, codepoint: String },

    #[error("path command {command} expects {expected} numbers, found {found} ({codepoint})")]
    ParameterCount {
        command: char,
        expected: usize,
        found: usize,
        codepoint: String,
    },

    #[error("glyph is missing the {attribute} attribute ({codepoint})")]
    MissingAttribute {
        attribute: &'static str,
        codepoint: String,
    },

    #[error("attribute {attribute} has a non-numeric value {value:?} ({codepoint})")]
    MalformedAttribute {
        attribute: &'static str,
        value: String,
        codepoint: String,
    },

    #[error("xml error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result that can be returned which holds either T or an `OutlineError`
pub type OutlineResult<T> = Result<T, OutlineError>;
