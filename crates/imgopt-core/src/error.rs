//! Error taxonomy: usage, network, processing.
//!
//! Every variant aborts the run; the CLI maps all of them to exit code 1.
//! Messages carry only their own layer; the cause is in `source()`, so print
//! with `{:#}` (anyhow) to get the full chain.

use std::path::PathBuf;

/// Failure while downloading the source image.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// Transport failure reported by libcurl (connect, DNS, timeout, ...).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
}

/// Failure while decoding, resizing, encoding or writing the image.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("cannot decode image")]
    Decode(#[from] image::ImageError),
    #[error("invalid dimensions {width}x{height}")]
    Dimensions { width: u32, height: u32 },
    #[error("WebP encoding failed: {0}")]
    Encode(String),
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProcessError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Top-level error for one optimize run.
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error("usage: {0}")]
    Usage(String),
    #[error("error downloading image")]
    Network(#[from] FetchError),
    #[error("error processing image")]
    Processing(#[from] ProcessError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(e: OptimizeError) -> String {
        format!("{:#}", anyhow::Error::new(e))
    }

    #[test]
    fn http_error_message() {
        let e = OptimizeError::from(FetchError::Http {
            url: "https://example.com/x.jpg".to_string(),
            code: 404,
        });
        assert_eq!(
            chain(e),
            "error downloading image: GET https://example.com/x.jpg returned HTTP 404"
        );
    }

    #[test]
    fn io_error_names_path() {
        let e = OptimizeError::from(ProcessError::io(
            "/tmp/out.webp",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ));
        assert_eq!(
            chain(e),
            "error processing image: I/O error on /tmp/out.webp: denied"
        );
    }
}
