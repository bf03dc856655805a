//! Stub metadata extraction.
//!
//! A stub file is free-form markdown; the only contract is that it may carry
//! a labelled source URL and, optionally, a double-bracketed clipped date.
//! Extraction is regex-driven with a deterministic first-match policy, so
//! multi-match or malformed input never errors.

use clipper_core::ExtractedReference;
use regex::Regex;
use std::sync::LazyLock;

/// Label token (`URL`, `source` or `src`) followed on the same line by an
/// `http(s)://` URL terminated by whitespace or a closing parenthesis.
static LABELLED_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(URL|source|src)[^\n]*?(https?://[^\s)]+)").expect("LABELLED_URL regex")
});

/// `clipped:`/`clipped::`/`date` label followed by `[[YYYY-MM-DD]]`.
static CLIPPED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(clipped:|clipped::|date).*?\[\[(\d{4}-\d{2}-\d{2})\]\]")
        .expect("CLIPPED_DATE regex")
});

/// Find the source URL in a stub's text. First match wins.
///
/// Returns `None` when no label+URL pair exists, which routes the stub to
/// manual processing.
pub fn extract_url(text: &str) -> Option<String> {
    let captures = LABELLED_URL.captures(text)?;
    Some(strip_utm_params(&captures[2]))
}

/// Find the clipped date in a stub's text. `None` means "use today".
pub fn extract_date(text: &str) -> Option<String> {
    CLIPPED_DATE
        .captures(text)
        .map(|captures| captures[2].to_string())
}

/// Drop every query parameter whose key begins with `utm_`, keeping the
/// remaining query string well-formed (leading `?` restored, `&` separators).
fn strip_utm_params(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let kept: Vec<&str> = query
        .split('&')
        .filter(|param| !param.starts_with("utm_"))
        .collect();
    if kept.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, kept.join("&"))
    }
}

/// Bundle both extractions; `None` when the stub has no source URL.
pub fn extract_reference(text: &str) -> Option<ExtractedReference> {
    extract_url(text).map(|url| ExtractedReference {
        url,
        clipped: extract_date(text),
    })
}
