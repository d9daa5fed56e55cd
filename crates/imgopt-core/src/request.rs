//! Request resolution: raw arguments to a validated [`OptimizeRequest`].

use chrono::NaiveDateTime;

use crate::config::OptimizeConfig;
use crate::error::OptimizeError;
use crate::url_model;

/// One optimize run: what to fetch, how big to make it, what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeRequest {
    pub url: String,
    /// Target width in pixels (> 0).
    pub width: u32,
    /// Target height in pixels; `None` keeps the source aspect ratio.
    pub height: Option<u32>,
    /// Output base name, sanitized, without extension.
    pub filename: String,
}

impl OptimizeRequest {
    /// Validates the arguments and derives the output base name.
    ///
    /// `width` falls back to `cfg.default_width`. Zero dimensions and URLs
    /// that are not absolute `http`/`https` are usage errors.
    pub fn resolve(
        url: &str,
        width: Option<u32>,
        height: Option<u32>,
        filename: Option<&str>,
        cfg: &OptimizeConfig,
        now: NaiveDateTime,
    ) -> Result<Self, OptimizeError> {
        let parsed = url::Url::parse(url)
            .map_err(|e| OptimizeError::Usage(format!("invalid URL {:?}: {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(OptimizeError::Usage(format!(
                "unsupported URL scheme {:?} (expected http or https)",
                parsed.scheme()
            )));
        }

        let width = width.unwrap_or(cfg.default_width);
        if width == 0 {
            return Err(OptimizeError::Usage("width must be a positive integer".to_string()));
        }
        if height == Some(0) {
            return Err(OptimizeError::Usage("height must be a positive integer".to_string()));
        }

        let filename = url_model::resolve_filename(url, filename, now);
        tracing::debug!(url, width, ?height, filename = %filename, "resolved request");

        Ok(Self {
            url: url.to_string(),
            width,
            height,
            filename,
        })
    }
}
