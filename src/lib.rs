//! Linefont converts stroke-only SVG fonts into C++ tables that can be compiled into a
//! renderer, so no font parsing is needed at runtime.
//!
//! The heavy lifting lives in two crates: `linefont_outline` reads glyph outlines and
//! `linefont_codegen` quantizes and writes them. This crate selects the input files and
//! drives a run.

pub mod config;
pub mod driver;

pub use config::{ConfigOverrides, ExportConfig};
pub use driver::{collect_font_files, export_fonts, run, RunSummary};
pub use linefont_codegen as codegen;
pub use linefont_outline as outline;
