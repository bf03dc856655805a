use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata of a fetched web page, as far as the clipping format cares.
///
/// Built by the fetcher from the parsed document and consumed immediately
/// by the frontmatter synthesizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub html_content: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
}

/// What a stub file told us about its source page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedReference {
    pub url: String,
    /// Clipped date as `YYYY-MM-DD`, when the stub carries one.
    pub clipped: Option<String>,
}

/// Final rendered clipping, ready to be written to the result directory.
#[derive(Debug, Clone)]
pub struct ResultDocument {
    pub file_content: String,
    pub sanitized_title: String,
}

/// Terminal state of one stub file after a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    /// No URL-bearing line found; the stub was moved to the manual directory.
    NoUrlFound,
    /// Converted successfully; the stub was moved to the processed directory.
    Converted { result_path: PathBuf },
    /// Fetch or conversion failed; the stub stays where it was.
    FetchFailed { reason: String },
}
