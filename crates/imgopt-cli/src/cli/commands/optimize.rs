//! `optimize <url> [width] [height] [filename]`: fetch, resize, store as WebP.

use anyhow::{Context, Result};
use imgopt_core::config::OptimizeConfig;
use imgopt_core::pipeline::{self, Event};
use imgopt_core::project_root;
use imgopt_core::request::OptimizeRequest;

use crate::cli::Cli;

pub fn run_optimize(cli: &Cli, cfg: &OptimizeConfig) -> Result<()> {
    let now = chrono::Local::now().naive_local();
    let req = OptimizeRequest::resolve(
        &cli.url,
        cli.width,
        cli.height,
        cli.filename.as_deref(),
        cfg,
        now,
    )?;

    let root = project_root::discover().context("cannot determine current directory")?;
    tracing::info!(root = %root.display(), filename = %req.filename, "starting optimize run");

    let report = pipeline::run(&req, cfg, &root, &mut |event| {
        println!("{}", progress_line(&event));
    })?;

    println!();
    println!("Successfully optimized image!");
    println!("  Location: {}", report.relative_path.display());
    Ok(())
}

/// Human-readable stdout line for a pipeline event.
pub(crate) fn progress_line(event: &Event) -> String {
    match event {
        Event::Downloading { url } => format!("Downloading: {url}"),
        Event::Downloaded {
            bytes,
            content_length,
        } => {
            let size = content_length.unwrap_or(*bytes);
            format!("Download size: {:.2} MB", size as f64 / (1024.0 * 1024.0))
        }
        Event::Decoded { width, height, .. } => format!("Original size: {width}x{height}"),
        Event::Resized { width, height } => format!("Resized to: {width}x{height}"),
        Event::Renamed { file_name } => format!("Note: File exists, saving as: {file_name}"),
        Event::Saved { path, size } => {
            format!("Saved: {} ({:.1} KB)", path.display(), *size as f64 / 1024.0)
        }
    }
}
