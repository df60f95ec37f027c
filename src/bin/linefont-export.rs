use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use linefont::config::{ConfigOverrides, ExportConfig};
use log::LevelFilter;
use simple_logger::SimpleLogger;

#[derive(Debug, Parser)]
#[clap(
    name = "linefont-export",
    version = "0.1.0",
    author = "Linefont",
    about = "Converts stroke-only SVG fonts into a C++ glyph table source file"
)]
struct Cli {
    /// Directory that is searched for font documents
    input_dir: Option<PathBuf>,

    #[clap(short = 'o', long = "output", help = "Generated C++ source file")]
    output: Option<PathBuf>,

    #[clap(short = 'c', long = "config", help = "Json configuration file")]
    config: Option<PathBuf>,

    #[clap(long = "exclude", help = "File name to skip (repeatable, replaces the default list)")]
    exclude: Vec<String>,

    #[clap(long = "extension", help = "Extension of the files to convert")]
    extension: Option<String>,

    #[clap(long = "scale", help = "Font units per output unit")]
    scale: Option<f64>,

    #[clap(long = "sort", help = "Process files sorted by name instead of traversal order")]
    sort: bool,

    #[clap(long = "preview", help = "Also write an SVG preview of all fonts")]
    preview: Option<PathBuf>,

    #[clap(short = 'd', long = "debug", help = "Enable debug logging")]
    debug: bool,

    #[clap(short = 'q', long = "quiet", help = "Only log warnings and errors")]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Result<ExportConfig> {
        let mut config = match &self.config {
            Some(path) => ExportConfig::from_file(path)?,
            None => ExportConfig::default(),
        };

        config.apply_overrides(ConfigOverrides {
            input_dir: self.input_dir,
            output: self.output,
            exclude: self.exclude,
            extension: self.extension,
            scale: self.scale,
            sort: self.sort,
            preview: self.preview,
        });

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    let config = cli.into_config()?;
    linefont::run(&config)?;

    Ok(())
}
