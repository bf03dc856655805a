pub mod config;
pub mod error;
pub mod types;

pub use config::{PipelineConfig, ResultNaming};
pub use error::Error;
pub use types::{Article, ExtractedReference, ProcessingOutcome, ResultDocument};

pub type Result<T> = std::result::Result<T, Error>;
