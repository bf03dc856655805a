//! YAML frontmatter synthesis.
//!
//! Builds the fixed-key frontmatter block of a clipping, plus the helpers
//! that resolve author/description/keywords metadata out of the fetched
//! document.

use crate::dom::DocumentQuery;
use clipper_core::Article;

/// Characters stripped before a value is embedded in a quoted YAML scalar.
const YAML_QUOTE_CHARS: &[char] = &['"', '\'', '“', '”', '‘', '’'];

/// Strip straight and curly quotes so the value stays a valid quoted scalar.
pub fn sanitize_yaml_string(value: &str) -> String {
    value.chars().filter(|c| !YAML_QUOTE_CHARS.contains(c)).collect()
}

/// Meta author, falling back from `name=author` to `property=author` to the
/// site name. First non-empty content wins.
pub fn resolve_author(document: &impl DocumentQuery) -> Option<String> {
    meta_content(document, "meta[name='author']")
        .or_else(|| meta_content(document, "meta[property='author']"))
        .or_else(|| meta_content(document, "meta[property='og:site_name']"))
}

/// Meta description with the same three-tier fallback as the author.
pub fn resolve_description(document: &impl DocumentQuery) -> Option<String> {
    meta_content(document, "meta[name='description']")
        .or_else(|| meta_content(document, "meta[property='description']"))
        .or_else(|| meta_content(document, "meta[property='og:description']"))
}

/// Comma-separated keywords from the (case-insensitively named) keywords
/// meta tag, trimmed, original order, duplicates kept.
pub fn resolve_keywords(document: &impl DocumentQuery) -> Vec<String> {
    meta_content(document, r#"meta[name="keywords" i]"#)
        .map(|content| {
            content
                .split(',')
                .map(str::trim)
                .filter(|keyword| !keyword.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn meta_content(document: &impl DocumentQuery, selector: &str) -> Option<String> {
    document
        .select_attr(selector, "content")
        .filter(|content| !content.is_empty())
}

/// Render the complete result document: frontmatter, heading, body.
///
/// `clipped` is the already-resolved `YYYY-MM-DD` date and `body` the
/// converted markdown article.
pub fn synthesize(article: &Article, clipped: &str, body: &str) -> String {
    let title = sanitize_yaml_string(&article.title);
    let description = article
        .description
        .as_deref()
        .map(sanitize_yaml_string)
        .unwrap_or_default();
    let author = article
        .author
        .as_deref()
        .map(|name| format!("\"[[{}]]\"", name))
        .unwrap_or_default();

    let mut tags = vec!["tags:".to_string(), "  - AI".to_string()];
    tags.extend(article.keywords.iter().map(|keyword| format!("  - {}", keyword)));

    let mut out = String::new();
    out.push_str("---\n");
    out.push_str("category: \"[[Clippings]]\"\n");
    out.push_str(&format!("author: {}\n", author));
    out.push_str(&format!("title: \"{}\"\n", title));
    out.push_str(&format!("source: {}\n", article.url));
    out.push_str(&format!("clipped: {}\n", clipped));
    out.push_str(&format!("description: \"{}\"\n", description));
    out.push_str("summary: \"\"\n");
    out.push_str(&tags.join("\n"));
    out.push('\n');
    out.push_str("publish: false\n");
    out.push_str("---\n\n");
    out.push_str(&format!("# {}\n", title));
    out.push_str(body);
    out
}
