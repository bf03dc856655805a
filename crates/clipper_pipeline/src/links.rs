//! Markdown link normalization.
//!
//! HTML-to-markdown conversion of pages that wrap images in anchors tends to
//! produce a link whose label is a bare image reference split across
//! newlines. This module collapses that pattern back to the canonical
//! single-line `[![](image)](destination)` form.

use regex::Regex;
use std::sync::LazyLock;

/// `[` + optional whitespace + `![](image)` + optional whitespace + `](dest)`.
static SPLIT_IMAGE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\s*!\[\]\(([^)]+)\)\s*\]\(([^)]+)\)").expect("SPLIT_IMAGE_LINK regex")
});

/// Rewrite every split image link in `text` to its single-line form.
///
/// Idempotent; text without the pattern is returned unchanged.
pub fn normalize_links(text: &str) -> String {
    SPLIT_IMAGE_LINK
        .replace_all(text, "[![](${1})](${2})")
        .into_owned()
}
