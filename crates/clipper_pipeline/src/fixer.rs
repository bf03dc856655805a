//! Standalone batch link fixer.
//!
//! Runs the link normalizer over every markdown file under a root,
//! including files already moved to the state directories.

use std::fs;
use std::path::Path;

use glob::glob;
use tracing::{info, warn};

use clipper_core::Result;

use crate::links::normalize_links;

/// Rewrite every `*.md` file under `root` (recursively) whose content the
/// link normalizer changes. Returns the number of rewritten files;
/// unreadable or unwritable files are skipped with a warning.
pub fn fix_links(root: &Path) -> Result<usize> {
    let pattern = root.join("**").join("*.md");
    let mut rewritten = 0;

    for entry in glob(&pattern.to_string_lossy())? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable path: {}", e);
                continue;
            }
        };
        let original = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                continue;
            }
        };

        let fixed = normalize_links(&original);
        if fixed != original {
            if let Err(e) = fs::write(&path, fixed) {
                warn!("Failed to rewrite {}: {}", path.display(), e);
                continue;
            }
            info!("New file has been written to {}", path.display());
            rewritten += 1;
        }
    }

    Ok(rewritten)
}
