//! Single-shot HTTP GET of the source image.
//!
//! Uses the curl crate (libcurl) with browser-like headers and a fixed
//! whole-request timeout. The body is buffered in memory; there is no retry.

use crate::config::OptimizeConfig;
use crate::error::FetchError;
use std::str;

/// Downloaded response body plus the headers we report on.
#[derive(Debug, Clone)]
pub struct FetchedBody {
    pub bytes: Vec<u8>,
    /// `Content-Length` of the final response, if sent.
    pub content_length: Option<u64>,
    /// `Content-Type` of the final response, if sent.
    pub content_type: Option<String>,
}

/// `Referer` for a URL: its own scheme, host and port with a trailing slash.
pub fn referer_for(url: &str) -> Result<String, FetchError> {
    let parsed = url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| FetchError::InvalidUrl(format!("{} has no host", url)))?;
    Ok(match parsed.port() {
        Some(port) => format!("{}://{}:{}/", parsed.scheme(), host, port),
        None => format!("{}://{}/", parsed.scheme(), host),
    })
}

/// Request headers sent with the GET (besides `User-Agent`, set via libcurl).
pub fn request_headers(url: &str, cfg: &OptimizeConfig) -> Result<Vec<(String, String)>, FetchError> {
    Ok(vec![
        ("Accept".to_string(), cfg.accept.clone()),
        ("Accept-Language".to_string(), cfg.accept_language.clone()),
        ("Referer".to_string(), referer_for(url)?),
    ])
}

/// GETs `url` and returns the full body. Follows redirects.
/// Any non-2xx final status is an error.
pub fn fetch(url: &str, cfg: &OptimizeConfig) -> Result<FetchedBody, FetchError> {
    let mut body: Vec<u8> = Vec::new();
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.timeout(cfg.timeout())?;
    easy.useragent(&cfg.user_agent)?;

    let mut list = curl::easy::List::new();
    for (k, v) in request_headers(url, cfg)? {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http {
            url: url.to_string(),
            code,
        });
    }

    let (content_length, content_type) = parse_final_headers(&headers);
    tracing::info!(
        url,
        status = code,
        bytes = body.len(),
        content_type = content_type.as_deref().unwrap_or("-"),
        "download complete"
    );

    Ok(FetchedBody {
        bytes: body,
        content_length,
        content_type,
    })
}

/// Extracts `Content-Length` and `Content-Type` from the last response in
/// `lines` (earlier responses are redirects or `100 Continue`).
fn parse_final_headers(lines: &[String]) -> (Option<u64>, Option<String>) {
    let mut content_length = None;
    let mut content_type = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            content_length = None;
            content_type = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse::<u64>().ok();
            }
            if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string());
            }
        }
    }

    (content_length, content_type)
}
