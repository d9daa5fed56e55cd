//! URL modeling and filename derivation.
//!
//! Derives the base name (no extension) of the output asset from a custom
//! name, the URL path, or a generated `image_<timestamp>_<hash>` fallback.

mod path;
mod sanitize;

use chrono::NaiveDateTime;
use md5::{Digest, Md5};

pub use path::stem_from_url_path;
pub use sanitize::{sanitize_filename, MAX_NAME_CHARS};

/// Shortest URL-derived name that is used as is.
pub const MIN_URL_NAME_CHARS: usize = 3;

/// Prefix of generated names.
const FALLBACK_PREFIX: &str = "image";

/// Number of hex characters of the URL digest kept in generated names.
const HASH_CHARS: usize = 8;

/// Derives a base name from the URL's last path segment.
///
/// Uses the sanitized stem when it has at least three characters, otherwise
/// falls back to [`fallback_filename`].
///
/// # Examples
///
/// - `https://example.com/photos/sunset.jpg` gives `"sunset"`
/// - `https://example.com/a/x.png` gives `"image_20240102_030405_<8 hex>"`
pub fn derive_filename(url: &str, now: NaiveDateTime) -> String {
    stem_from_url_path(url)
        .and_then(|stem| sanitize_filename(&stem))
        .filter(|name| name.chars().count() >= MIN_URL_NAME_CHARS)
        .unwrap_or_else(|| fallback_filename(url, now))
}

/// Generated name: `image_<YYYYMMDD_HHMMSS>_<first 8 hex chars of MD5(url)>`.
pub fn fallback_filename(url: &str, now: NaiveDateTime) -> String {
    let digest = hex::encode(Md5::digest(url.as_bytes()));
    format!(
        "{}_{}_{}",
        FALLBACK_PREFIX,
        now.format("%Y%m%d_%H%M%S"),
        &digest[..HASH_CHARS]
    )
}

/// Resolves the output base name for a run.
///
/// A custom name wins when it survives sanitizing; otherwise the name comes
/// from the URL (and from there, the generated fallback).
pub fn resolve_filename(url: &str, custom: Option<&str>, now: NaiveDateTime) -> String {
    match custom.and_then(sanitize_filename) {
        Some(name) => name,
        None => {
            if let Some(raw) = custom {
                tracing::warn!("custom filename {:?} is empty after sanitizing; deriving from URL", raw);
            }
            derive_filename(url, now)
        }
    }
}
