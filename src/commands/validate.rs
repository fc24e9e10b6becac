//! Validate command - Initialize a root module without backend and validate it

use anyhow::Result;
use std::path::Path;

use crate::color;
use crate::commands::common::{display_path, resolve_options};
use crate::config::Config;
use crate::domain::module::discover_config_files;
use crate::domain::report::StepFailure;
use crate::integrations::terraform::{RealTerraformClient, TerraformOptions};
use crate::service::ValidationService;

/// Check that the module directory exists and announce what will be validated
///
/// # Errors
/// Returns an error if the module directory does not exist
pub fn preflight(options: &TerraformOptions, color_mode: color::ColorMode) -> Result<()> {
    let files = discover_config_files(&options.dir)?;

    if files.is_empty() {
        eprintln!(
            "{}",
            color::warn(
                color_mode,
                format!(
                    "No configuration files in {}; validating an empty module",
                    display_path(&options.dir)
                )
            )
        );
    } else {
        let noun = if files.len() == 1 { "file" } else { "files" };
        eprintln!(
            "{}",
            color::info(
                color_mode,
                format!(
                    "Validating {} {}",
                    display_path(&options.dir),
                    color::dim(color_mode, format!("({} configuration {noun})", files.len()))
                )
            )
        );
    }

    Ok(())
}

/// Bail with an actionable message when terraform cannot be executed
///
/// # Errors
/// Returns an error if the terraform binary is not available
pub fn ensure_terraform(
    service: &ValidationService<RealTerraformClient>,
    options: &TerraformOptions,
) -> Result<()> {
    if !service.terraform_available(options) {
        anyhow::bail!(
            "terraform not found: {}. Install Terraform, or point --terraform / TFCHECK_TERRAFORM at the binary.",
            options.binary.display()
        );
    }
    Ok(())
}

/// Run `init -backend=false` followed by `validate` against a module
///
/// # Errors
/// Returns an error if:
/// - Configuration cannot be loaded
/// - Module directory does not exist
/// - Terraform is not available
/// - Either terraform step exits non-zero
pub fn cmd_validate(
    dir: Option<&Path>,
    binary: Option<&Path>,
    color_mode: color::ColorMode,
) -> Result<()> {
    let config = Config::load()?;
    let options = resolve_options(dir, binary, &config)?;
    let service = ValidationService::new(RealTerraformClient, color_mode);

    preflight(&options, color_mode)?;
    ensure_terraform(&service, &options)?;

    if let Err(StepFailure { step, message }) = service.validate_module(&options) {
        anyhow::bail!(
            "terraform {step} failed for {}\n{message}",
            display_path(&options.dir)
        );
    }

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!("Configuration is valid: {}", display_path(&options.dir))
        )
    );
    Ok(())
}
