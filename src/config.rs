//! Export configuration, loaded from an optional json file and overridden from the command line
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use linefont_codegen::DEFAULT_SCALE;
use serde::Deserialize;

/// Font that uses curves inside the ASCII range and is therefore never exported
pub const DEFAULT_EXCLUDE: &str = "TwinSans.svg";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory that is searched (recursively) for font documents
    pub input_dir: PathBuf,
    /// Generated C++ source file
    pub output: PathBuf,
    /// Extension (without the dot) of the files to convert
    pub extension: String,
    /// File names that are skipped even when they match the extension
    pub exclude: Vec<String>,
    /// Font units per output unit
    pub scale: f64,
    /// Sort the files by name instead of using the directory traversal order. This makes
    /// the order of the font registry stable across platforms.
    pub sort: bool,
    /// Optional SVG preview of every exported font
    pub preview: Option<PathBuf>,
}

/// Settings given on the command line. Unset fields leave the configuration untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub input_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Replaces the whole exclusion list when not empty
    pub exclude: Vec<String>,
    pub extension: Option<String>,
    pub scale: Option<f64>,
    /// Can only switch sorting on
    pub sort: bool,
    pub preview: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("svg-fonts/fonts"),
            output: PathBuf::from("fonts.cpp"),
            extension: "svg".to_string(),
            exclude: vec![DEFAULT_EXCLUDE.to_string()],
            scale: DEFAULT_SCALE,
            sort: false,
            preview: None,
        }
    }
}

impl ExportConfig {
    /// Parses a json configuration. Missing keys keep their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Applies command line settings on top of this configuration
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(input_dir) = overrides.input_dir {
            self.input_dir = input_dir;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if !overrides.exclude.is_empty() {
            self.exclude = overrides.exclude;
        }
        if let Some(extension) = overrides.extension {
            self.extension = extension;
        }
        if let Some(scale) = overrides.scale {
            self.scale = scale;
        }
        if overrides.sort {
            self.sort = true;
        }
        if overrides.preview.is_some() {
            self.preview = overrides.preview;
        }
    }

    /// Checks the settings before any output is produced
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(anyhow!("scale must be a finite, non-zero number (got {})", self.scale));
        }
        if self.extension.is_empty() {
            return Err(anyhow!("extension must not be empty"));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded == file_name)
    }
}
