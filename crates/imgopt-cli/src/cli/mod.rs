//! CLI for imgopt: `optimize <url> [width] [height] [filename]`.

mod commands;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use imgopt_core::config;

use commands::run_optimize;

const EXAMPLES: &str = "\
Examples:
  optimize \"https://images.pexels.com/photos/1234/nature.jpg\"
  optimize \"https://images.pexels.com/photos/1234/nature.jpg\" 800
  optimize \"https://images.pexels.com/photos/1234/nature.jpg\" 800 600
  optimize \"https://images.pexels.com/photos/1234/nature.jpg\" 800 600 hero-image";

/// Download, resize, and convert an image to WebP under `public/images/`.
#[derive(Debug, Parser)]
#[command(name = "optimize", version)]
#[command(about = "Download, resize, and convert an image to WebP", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Direct HTTP/HTTPS URL of the source image.
    pub url: String,

    /// Target width in pixels (default 1200).
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Target height in pixels (default: keep aspect ratio).
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Output name without extension (default: derived from the URL).
    pub filename: Option<String>,
}

impl Cli {
    /// Parses `std::env::args`. On failure prints clap's message and returns the
    /// exit code: 0 for `--help`/`--version`, 1 for usage errors.
    pub fn parse_or_exit_code() -> std::result::Result<Self, i32> {
        Self::try_parse().map_err(|err| {
            let _ = err.print();
            usage_exit_code(err.kind())
        })
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);
        run_optimize(&self, &cfg)
    }
}

/// Process exit code for a finished run: 0 on success, 1 on any failure.
pub fn run_exit_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn usage_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests;
