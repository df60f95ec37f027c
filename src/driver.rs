//! Runs an export: finds the font documents, converts them in order and writes one artifact
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use linefont_codegen::{finalize_after, ExportSession, PreviewWriter, Quantizer, Registry};
use linefont_outline::read_font;
use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ExportConfig;

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Fonts in the order they were written to the registry
    pub registry: Registry,
    pub glyph_count: usize,
}

impl RunSummary {
    #[must_use]
    pub fn font_count(&self) -> usize {
        self.registry.len()
    }
}

/// Returns every file below the input directory that should be converted.
///
/// Files come in directory traversal order, which differs between platforms and file
/// systems. Set [`ExportConfig::sort`] to get a stable order.
pub fn collect_font_files(config: &ExportConfig) -> Result<Vec<PathBuf>> {
    let mut walker = WalkDir::new(&config.input_dir).follow_links(true);
    if config.sort {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| {
            format!("cannot read input directory {}", config.input_dir.display())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(config.extension.as_str()) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if config.is_excluded(&file_name) {
            debug!("skipping excluded font {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}

/// Converts `paths` in order into `out`, drawing them into `preview` when one is given.
///
/// The registry trailer (and the preview's closing markup) are written even when a font
/// fails to convert; the error is returned afterwards.
pub fn export_fonts<W, P>(
    paths: &[PathBuf],
    out: W,
    preview: Option<P>,
    quantizer: Quantizer,
) -> Result<RunSummary>
where
    W: Write,
    P: Write,
{
    let session = ExportSession::begin(out, quantizer)?;

    let report = finalize_after(session, |session| {
        let preview = preview
            .map(|writer| PreviewWriter::begin(writer, quantizer.scale()))
            .transpose()?;

        finalize_after(preview, |preview| {
            for path in paths {
                info!("{}", path.display());

                let font = read_font(path)
                    .with_context(|| format!("cannot convert font {}", path.display()))?;
                session.store(&font)?;

                if let Some(preview) = preview.as_mut() {
                    preview.dump(&font)?;
                }
            }
            Ok(())
        })?;

        Ok(())
    })?;

    Ok(RunSummary {
        registry: report.registry,
        glyph_count: report.glyph_count,
    })
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Runs a complete export as described by `config`
pub fn run(config: &ExportConfig) -> Result<RunSummary> {
    config.validate()?;

    let paths = collect_font_files(config)?;
    info!(
        "converting {} fonts from {}",
        paths.len(),
        config.input_dir.display()
    );

    let out = create(&config.output)?;
    let preview = match config.preview.as_deref().map(create).transpose() {
        Ok(preview) => preview,
        Err(err) => {
            // Nothing has been written yet, so don't leave an empty artifact behind
            drop(out);
            if let Err(remove_err) = std::fs::remove_file(&config.output) {
                warn!("cannot remove {}: {remove_err}", config.output.display());
            }
            return Err(err);
        }
    };

    let summary = export_fonts(&paths, out, preview, Quantizer::new(config.scale))?;
    info!(
        "wrote {} fonts with {} glyphs to {}",
        summary.font_count(),
        summary.glyph_count,
        config.output.display()
    );

    Ok(summary)
}
