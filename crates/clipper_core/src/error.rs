use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Document parse error: {0}")]
    Parse(String),

    #[error("No readable content: {0}")]
    Extraction(String),

    #[error("Markdown rendering error: {0}")]
    Render(String),

    #[error("Bootstrap error: {0}")]
    Bootstrap(String),

    #[error("Glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, Error>;
