use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Naming policy for files written to the result directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultNaming {
    /// Reuse the stub file's own name.
    StubBasename,
    /// Derive the name from the sanitized article title.
    SanitizedTitle,
}

/// Explicit directory layout and policies for one pipeline run.
///
/// All paths are absolute or relative to the process working directory;
/// nothing in the pipeline assumes a current-directory layout beyond what
/// is written here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory scanned for pending `*.md` stub files.
    pub root: PathBuf,
    /// Where successfully converted stubs are moved.
    pub processed_dir: PathBuf,
    /// Where rendered clippings are written.
    pub result_dir: PathBuf,
    /// Where stubs without an extractable URL are moved.
    pub manual_dir: PathBuf,
    /// Append-only failure log.
    pub error_log: PathBuf,
    pub result_naming: ResultNaming,
}

impl PipelineConfig {
    /// Standard layout: `Processed/`, `Result/` and `ToProcessManually/`
    /// as subdirectories of the stub root, `error.log` next to them.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            processed_dir: root.join("Processed"),
            result_dir: root.join("Result"),
            manual_dir: root.join("ToProcessManually"),
            error_log: root.join("error.log"),
            result_naming: ResultNaming::StubBasename,
            root,
        }
    }

    /// The three directories created on demand before a run.
    pub fn destination_dirs(&self) -> [&Path; 3] {
        [&self.processed_dir, &self.result_dir, &self.manual_dir]
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::for_root("Ressources")
    }
}
