#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default Terraform executable name, looked up on PATH
pub const DEFAULT_BINARY: &str = "terraform";

/// Options for a Terraform invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerraformOptions {
    /// Terraform executable (name on PATH or explicit path)
    pub binary: PathBuf,
    /// Root module directory; used as the working directory
    pub dir: PathBuf,
    /// Append `-no-color` to every invocation
    pub no_color: bool,
}

impl TerraformOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_BINARY),
            dir: dir.into(),
            no_color: true,
        }
    }

    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    #[must_use]
    pub const fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Build the full argument list for a subcommand
    pub fn format_args(&self, args: &[&str]) -> Vec<String> {
        let mut formatted: Vec<String> = args.iter().map(|arg| (*arg).to_string()).collect();
        if self.no_color {
            formatted.push("-no-color".to_string());
        }
        formatted
    }
}

/// Captured output of a successful Terraform invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// stdout followed by stderr, skipping empty streams
    pub fn combined(&self) -> String {
        [self.stdout.trim_end(), self.stderr.trim_end()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Terraform client interface
pub trait TerraformClient {
    /// Run `terraform <args>` in `options.dir`
    ///
    /// Fails when the process cannot be spawned or exits non-zero. The
    /// error message carries the captured stdout and stderr.
    fn run(&self, options: &TerraformOptions, args: &[&str]) -> Result<CommandOutput>;

    /// Check if the configured binary can be executed
    fn is_available(&self, options: &TerraformOptions) -> bool;
}

/// Real terraform implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerraformClient;

impl TerraformClient for RealTerraformClient {
    fn run(&self, options: &TerraformOptions, args: &[&str]) -> Result<CommandOutput> {
        let subcommand = args.first().copied().unwrap_or_default();
        let output = Command::new(&options.binary)
            .args(options.format_args(args))
            .current_dir(&options.dir)
            .output()
            .with_context(|| {
                format!(
                    "Failed to execute {} {subcommand}",
                    options.binary.display()
                )
            })?;

        let captured = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !output.status.success() {
            let status = output
                .status
                .code()
                .map_or_else(|| "signal".to_string(), |code| code.to_string());
            anyhow::bail!(
                "terraform {subcommand} failed (exit status {status}):\n{}",
                captured.combined()
            );
        }

        Ok(captured)
    }

    fn is_available(&self, options: &TerraformOptions) -> bool {
        is_terraform_available(&options.binary)
    }
}

/// Check if terraform is available at the given binary path or name
pub fn is_terraform_available(binary: &Path) -> bool {
    Command::new(binary)
        .arg("version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Initialize the module with backend initialization disabled
pub fn init_without_backend<T: TerraformClient + ?Sized>(
    client: &T,
    options: &TerraformOptions,
) -> Result<CommandOutput> {
    client.run(options, &["init", "-backend=false"])
}

/// Run static validation; no input variables are passed
pub fn validate<T: TerraformClient + ?Sized>(
    client: &T,
    options: &TerraformOptions,
) -> Result<CommandOutput> {
    client.run(options, &["validate"])
}
