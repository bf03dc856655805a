pub mod dom;
pub mod fetcher;
pub mod fixer;
pub mod frontmatter;
pub mod links;
pub mod pipeline;
pub mod stub;

pub use fetcher::{ArticleFetcher, HttpFetcher};
pub use fixer::fix_links;
pub use pipeline::Pipeline;

pub mod prelude {
    pub use super::fetcher::ArticleFetcher;
    pub use clipper_core::{Error, PipelineConfig, ProcessingOutcome, Result};
}
