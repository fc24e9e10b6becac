//! Root module inspection
//!
//! Terraform loads every `*.tf` and `*.tf.json` file at the top level of a
//! root module. Nested directories are separate modules and are not read.

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const CONFIG_PATTERNS: &[&str] = &["*.tf", "*.tf.json"];

fn config_globset() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in CONFIG_PATTERNS {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// List the configuration files of a root module, sorted by path
///
/// # Errors
/// Returns an error if `dir` does not exist or is not a directory
pub fn discover_config_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Module directory not found: {}", dir.display());
    }

    let globset = config_globset()?;
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| globset.is_match(entry.file_name()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    Ok(files)
}
