//! Filename extraction from URL path.

/// Extracts the last path segment of `url` without its extension.
///
/// The path is percent-decoded before splitting. Returns `None` if the URL
/// cannot be parsed or the last segment is empty (root or trailing slash).
pub fn stem_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let path = percent_decode(parsed.path());
    let segment = path.rsplit('/').next()?;
    let stem = strip_extension(segment);
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}

/// Removes the final `.ext` from a name. Leading dots do not start an extension
/// (`.hidden` stays as is).
pub(super) fn strip_extension(name: &str) -> &str {
    let body_start = name.len() - name.trim_start_matches('.').len();
    match name[body_start..].rfind('.') {
        Some(idx) => &name[..body_start + idx],
        None => name,
    }
}

/// Percent-decode a URL path; invalid escapes are kept verbatim.
pub(super) fn percent_decode(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(high), Some(low)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
