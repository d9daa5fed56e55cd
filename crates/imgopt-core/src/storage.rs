//! Output naming, WebP encoding and the final write.
//!
//! Names are picked as `<base>.webp`, `<base>-1.webp`, `<base>-2.webp`, ...
//! and the file is created with `create_new`, so an existing file is never
//! truncated.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::decode::{ColorMode, DecodedImage};
use crate::error::ProcessError;

/// Extension of every output file.
pub const WEBP_EXTENSION: &str = "webp";

/// Largest width or height libwebp can encode.
pub const WEBP_MAX_DIMENSION: u32 = 16383;

/// `<dir>/<base>.webp` for `n == 0`, `<dir>/<base>-<n>.webp` otherwise.
pub fn candidate_path(dir: &Path, base: &str, n: u32) -> PathBuf {
    if n == 0 {
        dir.join(format!("{}.{}", base, WEBP_EXTENSION))
    } else {
        dir.join(format!("{}-{}.{}", base, n, WEBP_EXTENSION))
    }
}

/// First candidate path for which `exists` returns false.
pub fn next_free_path<F>(dir: &Path, base: &str, exists: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let mut n = 0u32;
    loop {
        let candidate = candidate_path(dir, base, n);
        if !exists(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Encodes `image` as lossy WebP. RGBA input keeps its alpha channel.
///
/// `quality` is libwebp's 0-100 scale; `method` is the effort level (0-6).
pub fn encode_webp(image: &DecodedImage, quality: f32, method: i32) -> Result<Vec<u8>, ProcessError> {
    let (width, height) = image.dimensions();
    let encoder = match image.mode() {
        ColorMode::Rgba => webp::Encoder::from_rgba(image.as_bytes(), width, height),
        ColorMode::Rgb => webp::Encoder::from_rgb(image.as_bytes(), width, height),
    };

    let mut config = webp::WebPConfig::new()
        .map_err(|_| ProcessError::Encode("failed to initialize libwebp config".to_string()))?;
    config.lossless = 0;
    config.quality = quality;
    config.method = method;

    let encoded = encoder
        .encode_advanced(&config)
        .map_err(|e| ProcessError::Encode(format!("{:?}", e)))?;
    Ok(encoded.to_vec())
}

/// Writes `data` to a new file at `path`. Fails if `path` already exists.
pub fn write_new(path: &Path, data: &[u8]) -> Result<(), ProcessError> {
    let mut file = File::options()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| ProcessError::io(path, e))?;
    file.write_all(data).map_err(|e| ProcessError::io(path, e))?;
    file.sync_all().map_err(|e| ProcessError::io(path, e))?;
    Ok(())
}

/// A written output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub path: PathBuf,
    /// Size on disk in bytes.
    pub size: u64,
    /// True when a `-N` suffix was needed to avoid an existing file.
    pub renamed: bool,
}

/// Creates `dir` if needed, picks a free name for `base`, encodes and writes.
pub fn save_webp(
    image: &DecodedImage,
    dir: &Path,
    base: &str,
    quality: f32,
    method: i32,
) -> Result<SavedFile, ProcessError> {
    fs::create_dir_all(dir).map_err(|e| ProcessError::io(dir, e))?;

    let path = next_free_path(dir, base, |p| p.exists());
    let renamed = path != candidate_path(dir, base, 0);
    if renamed {
        tracing::info!(path = %path.display(), "output name taken; using suffixed name");
    }

    let data = encode_webp(image, quality, method)?;
    write_new(&path, &data)?;
    let size = fs::metadata(&path)
        .map_err(|e| ProcessError::io(&path, e))?
        .len();

    tracing::info!(path = %path.display(), size, mode = ?image.mode(), "saved webp");
    Ok(SavedFile {
        path,
        size,
        renamed,
    })
}
