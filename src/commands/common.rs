//! Common utility functions for command handlers
//!
//! This module contains shared helper functions used across multiple commands.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::integrations::terraform::TerraformOptions;

/// Environment variable overriding the terraform binary
pub const TERRAFORM_ENV: &str = "TFCHECK_TERRAFORM";

/// Resolve the terraform binary
///
/// Priority (highest to lowest):
/// 1. CLI flag (`--terraform`)
/// 2. `TFCHECK_TERRAFORM` environment variable
/// 3. `[integration.terraform] binary` from the global config
#[must_use]
pub fn resolve_binary(cli_binary: Option<&Path>, config: &Config) -> PathBuf {
    if let Some(binary) = cli_binary {
        return binary.to_path_buf();
    }

    if let Some(binary) = std::env::var_os(TERRAFORM_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(binary);
    }

    PathBuf::from(&config.integrations.terraform.binary)
}

/// Build terraform options from CLI arguments and configuration
///
/// The module directory is the positional argument when given (relative to
/// the current directory), otherwise the configured `module.dir`.
///
/// # Errors
/// Returns an error if the current directory cannot be determined
pub fn resolve_options(
    cli_dir: Option<&Path>,
    cli_binary: Option<&Path>,
    config: &Config,
) -> Result<TerraformOptions> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = cli_dir.map_or_else(|| config.resolve_module_dir(&cwd), |dir| cwd.join(dir));

    Ok(TerraformOptions::new(normalize_path_lexically(&dir))
        .with_binary(anchor_binary(resolve_binary(cli_binary, config), &cwd))
        .with_no_color(config.module.no_color))
}

/// Make a relative binary path like `bin/terraform` absolute against `cwd`
///
/// terraform runs inside the module directory, so a relative path would
/// otherwise be looked up there. Bare names stay untouched for PATH lookup.
#[must_use]
pub fn anchor_binary(binary: PathBuf, cwd: &Path) -> PathBuf {
    if binary.is_absolute() || binary.components().count() < 2 {
        binary
    } else {
        normalize_path_lexically(&cwd.join(binary))
    }
}

/// Normalize a path by processing `.` and `..` components without touching the filesystem
#[must_use]
pub fn normalize_path_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            _ => normalized.push(component),
        }
    }
    normalized
}

/// Format a path for display, replacing the home directory with `~`
#[must_use]
pub fn display_path(path: &Path) -> String {
    let normalized = normalize_path_lexically(path);

    if let Some(home) = dirs::home_dir() {
        if let Ok(rel) = normalized.strip_prefix(&home) {
            let rel_str = rel.display().to_string();
            if rel_str.is_empty() {
                return "~".to_string();
            }
            return format!("~/{rel_str}");
        }
    }
    normalized.display().to_string()
}
