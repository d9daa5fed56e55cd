//! Drives one run: fetch, decode, resize, then encode and write.
//!
//! Progress is reported through a callback so the CLI decides how to print it.

use std::path::{Path, PathBuf};

use crate::config::OptimizeConfig;
use crate::decode::{self, ColorMode};
use crate::error::OptimizeError;
use crate::fetch;
use crate::request::OptimizeRequest;
use crate::storage;
use crate::transform;

/// Progress notifications, in the order they occur.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Downloading { url: String },
    Downloaded { bytes: u64, content_length: Option<u64> },
    Decoded { width: u32, height: u32, mode: ColorMode },
    Resized { width: u32, height: u32 },
    /// The plain `<name>.webp` was taken; `file_name` is used instead.
    Renamed { file_name: String },
    Saved { path: PathBuf, size: u64 },
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeReport {
    pub path: PathBuf,
    /// `path` relative to the project root (or `path` itself if outside it).
    pub relative_path: PathBuf,
    pub size: u64,
    pub width: u32,
    pub height: u32,
}

/// Downloads `req.url` and stores it under the project's output directory.
pub fn run(
    req: &OptimizeRequest,
    cfg: &OptimizeConfig,
    project_root: &Path,
    on_event: &mut dyn FnMut(Event),
) -> Result<OptimizeReport, OptimizeError> {
    on_event(Event::Downloading {
        url: req.url.clone(),
    });
    let body = fetch::fetch(&req.url, cfg)?;
    on_event(Event::Downloaded {
        bytes: body.bytes.len() as u64,
        content_length: body.content_length,
    });

    process_bytes(&body.bytes, req, cfg, project_root, on_event)
}

/// Everything after the download: decode, resize, encode and write.
pub fn process_bytes(
    bytes: &[u8],
    req: &OptimizeRequest,
    cfg: &OptimizeConfig,
    project_root: &Path,
    on_event: &mut dyn FnMut(Event),
) -> Result<OptimizeReport, OptimizeError> {
    let image = decode::decode_image(bytes)?;
    on_event(Event::Decoded {
        width: image.width(),
        height: image.height(),
        mode: image.mode(),
    });

    let resized = transform::resize(&image, req.width, req.height)?;
    drop(image);
    let (width, height) = resized.dimensions();
    on_event(Event::Resized { width, height });

    let output_dir = cfg.output_dir(project_root);
    let saved = storage::save_webp(&resized, &output_dir, &req.filename, cfg.quality, cfg.method)?;
    if saved.renamed {
        let file_name = saved
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        on_event(Event::Renamed { file_name });
    }
    on_event(Event::Saved {
        path: saved.path.clone(),
        size: saved.size,
    });

    let relative_path = saved
        .path
        .strip_prefix(project_root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| saved.path.clone());

    Ok(OptimizeReport {
        path: saved.path,
        relative_path,
        size: saved.size,
        width,
        height,
    })
}
