//! The per-file processing state machine.
//!
//! Discovers pending stub files, drives the fetcher for each one and
//! relocates the stub according to the outcome. Failures are isolated per
//! file: one bad stub never stops the rest of the run.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use glob::glob;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{error, info, warn};

use clipper_core::{Error, PipelineConfig, ProcessingOutcome, Result, ResultDocument, ResultNaming};

use crate::fetcher::ArticleFetcher;
use crate::stub;

pub struct Pipeline<F: ArticleFetcher> {
    config: PipelineConfig,
    fetcher: F,
}

impl<F: ArticleFetcher> Pipeline<F> {
    pub fn new(config: PipelineConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process every pending stub under the configured root, sequentially.
    ///
    /// Fails only when the destination directories cannot be created or the
    /// stub glob pattern is invalid; everything after that is per-file.
    pub async fn run(&self) -> Result<Vec<ProcessingOutcome>> {
        self.bootstrap().await?;

        let files = self.discover()?;
        info!("Found {} pending stub file(s)", files.len());

        let mut outcomes = Vec::with_capacity(files.len());
        for file in &files {
            if let Some(outcome) = self.process_file(file).await {
                outcomes.push(outcome);
            }
        }
        Ok(outcomes)
    }

    /// Create the three destination directories if absent. A failure here is
    /// fatal to the run: no stub can be relocated safely afterwards.
    async fn bootstrap(&self) -> Result<()> {
        for dir in self.config.destination_dirs() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| Error::Bootstrap(format!("cannot create {}: {}", dir.display(), e)))?;
        }
        Ok(())
    }

    /// Pending stubs, sorted for a deterministic processing order.
    fn discover(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.config.root.join("*.md");
        let mut files: Vec<PathBuf> = glob(&pattern.to_string_lossy())?
            .filter_map(std::result::Result::ok)
            .collect();
        files.sort();
        Ok(files)
    }

    /// Drive one stub to a terminal state. Returns `None` when the stub
    /// could not even be read (logged, file left untouched).
    async fn process_file(&self, path: &Path) -> Option<ProcessingOutcome> {
        let text = match fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read stub {}: {}", path.display(), e);
                self.log_failure(&format!("Failed to read stub {}: {}", path.display(), e))
                    .await;
                return None;
            }
        };

        let Some(reference) = stub::extract_reference(&text) else {
            info!(
                "No URL found in {}. Moving to {}.",
                path.display(),
                self.config.manual_dir.display()
            );
            if let Err(e) = self.relocate(path, &self.config.manual_dir).await {
                self.log_failure(&format!(
                    "Failed to move {} to manual processing: {}",
                    path.display(),
                    e
                ))
                .await;
                return None;
            }
            return Some(ProcessingOutcome::NoUrlFound);
        };

        match self
            .fetcher
            .fetch(&reference.url, reference.clipped.as_deref())
            .await
        {
            Ok(document) => match self.finish(path, &document).await {
                Ok(result_path) => {
                    info!("New file has been written to {}", result_path.display());
                    Some(ProcessingOutcome::Converted { result_path })
                }
                Err(e) => {
                    self.log_failure(&format!(
                        "Failed to store result for {}: {}",
                        path.display(),
                        e
                    ))
                    .await;
                    None
                }
            },
            Err(e) => {
                let reason = e.to_string();
                warn!("Failed to process {}: {}", path.display(), reason);
                self.log_failure(&format!(
                    "Failed to process URL {} from file {}: {}",
                    reference.url,
                    path.display(),
                    reason
                ))
                .await;
                Some(ProcessingOutcome::FetchFailed { reason })
            }
        }
    }

    /// Move the original stub to `Processed/`, then write the rendered
    /// clipping to the result directory.
    async fn finish(&self, path: &Path, document: &ResultDocument) -> Result<PathBuf> {
        let processed_path = self.relocate(path, &self.config.processed_dir).await?;
        info!("Original file has been moved to {}", processed_path.display());

        let result_path = self
            .config
            .result_dir
            .join(self.result_file_name(path, document));
        fs::write(&result_path, &document.file_content).await?;
        Ok(result_path)
    }

    /// Single atomic rename into `dir`, keeping the stub's own file name.
    async fn relocate(&self, path: &Path, dir: &Path) -> Result<PathBuf> {
        let Some(name) = path.file_name() else {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "stub path has no file name",
            )));
        };
        let target = dir.join(name);
        fs::rename(path, &target).await?;
        Ok(target)
    }

    fn result_file_name(&self, path: &Path, document: &ResultDocument) -> PathBuf {
        match self.config.result_naming {
            ResultNaming::StubBasename => path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("clipping.md")),
            ResultNaming::SanitizedTitle => {
                let name: String = document
                    .sanitized_title
                    .chars()
                    .map(|c| if matches!(c, '/' | '\\' | ':') { '-' } else { c })
                    .collect();
                PathBuf::from(format!("{}.md", name.trim()))
            }
        }
    }

    /// Append one `[<ISO-8601>] <message>` entry to the failure log.
    /// Logging never fails the run.
    async fn log_failure(&self, message: &str) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let entry = format!("[{}] {}\n", timestamp, message);
        match fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.error_log)
            .await
        {
            Ok(mut file) => {
                if let Err(e) = file.write_all(entry.as_bytes()).await {
                    error!("Failed to append to failure log: {}", e);
                }
            }
            Err(e) => error!(
                "Failed to open failure log {}: {}",
                self.config.error_log.display(),
                e
            ),
        }
    }
}
