//! Narrow DOM query capability.

use scraper::{Html, Selector};

/// Read-only document access: `querySelector` plus `getAttribute`, fused
/// into one call so callers never hold element references.
pub trait DocumentQuery {
    /// Attribute value of the first element matching `selector`, trimmed.
    fn select_attr(&self, selector: &str, attr: &str) -> Option<String>;
}

impl DocumentQuery for Html {
    fn select_attr(&self, selector: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        self.select(&selector)
            .next()?
            .value()
            .attr(attr)
            .map(|value| value.trim().to_string())
    }
}
