//! Init command - Write configuration templates

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::color;
use crate::commands::common::display_path;
use crate::config::Config;

/// Which configuration files `init` writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitScope {
    Both,
    Global,
    Local,
}

impl InitScope {
    /// Map the mutually exclusive `--global` / `--local` flags to a scope
    #[must_use]
    pub const fn from_flags(global: bool, local: bool) -> Self {
        match (global, local) {
            (true, false) => Self::Global,
            (false, true) => Self::Local,
            _ => Self::Both,
        }
    }

    const fn includes_global(self) -> bool {
        matches!(self, Self::Both | Self::Global)
    }

    const fn includes_local(self) -> bool {
        matches!(self, Self::Both | Self::Local)
    }
}

/// Result of writing one template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Created,
    Kept,
}

/// Write `template` to `path` unless it exists and `force` is off
///
/// # Errors
/// Returns an error if the parent directory or file cannot be written
pub fn write_template(path: &Path, template: &str, force: bool) -> Result<WriteStatus> {
    if path.exists() && !force {
        return Ok(WriteStatus::Kept);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    std::fs::write(path, template)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    Ok(WriteStatus::Created)
}

fn report(status: WriteStatus, label: &str, path: &Path, color_mode: color::ColorMode) {
    match status {
        WriteStatus::Created => eprintln!(
            "{}",
            color::success(
                color_mode,
                format!("Created {label} config: {}", display_path(path))
            )
        ),
        WriteStatus::Kept => {
            eprintln!(
                "{}",
                color::warn(
                    color_mode,
                    format!("{label} config already exists: {}", display_path(path))
                )
            );
            eprintln!("Use --force to overwrite");
        }
    }
}

fn global_path() -> Result<PathBuf> {
    Config::global_config_path().context(
        "Could not determine global config path (HOME directory not found). \
         Set HOME or an absolute XDG_CONFIG_HOME.",
    )
}

/// Initialize configuration files
///
/// # Errors
/// Returns an error if:
/// - Global config path cannot be determined
/// - File write fails
pub fn cmd_init(scope: InitScope, force: bool, color_mode: color::ColorMode) -> Result<()> {
    if scope.includes_global() {
        let path = global_path()?;
        let status = write_template(&path, Config::template_global(), force)?;
        report(status, "Global", &path, color_mode);
    }

    if scope.includes_local() {
        let path = Config::local_config_path();
        let status = write_template(&path, Config::template_local(), force)?;
        report(status, "Local", &path, color_mode);
    }

    Ok(())
}
