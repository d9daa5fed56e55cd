//! Filename sanitization for generated asset names.

/// Maximum length of a sanitized name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Characters that are never kept in a filename.
const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Sanitizes a candidate base name (no extension) for use as an asset filename.
///
/// - Drops `< > : " / \ | ? *`
/// - Turns each run of whitespace and/or hyphens into a single `-`
/// - Trims leading/trailing hyphens
/// - Limits length to 100 characters
///
/// Returns `None` when nothing usable is left.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if FORBIDDEN.contains(&c) {
            continue;
        }
        if c == '-' || c.is_whitespace() {
            pending_hyphen = true;
            continue;
        }
        if pending_hyphen && !out.is_empty() {
            out.push('-');
        }
        pending_hyphen = false;
        out.push(c);
    }

    let truncated: String = out.chars().take(MAX_NAME_CHARS).collect();
    let trimmed = truncated.trim_end_matches('-');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
