//! Configuration schema and type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::integrations::terraform::DEFAULT_BINARY;

/// Configuration for tfcheck
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub module: ModuleConfig,
    #[serde(default, alias = "integration")]
    pub integrations: IntegrationsConfig,
    /// Directory of the local config file this was loaded from
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Root module settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Root module directory
    /// Relative paths are resolved from the directory holding the config file
    #[serde(default = "default_dir")]
    pub dir: String,
    /// Pass `-no-color` to terraform
    #[serde(default = "default_no_color")]
    pub no_color: bool,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            no_color: default_no_color(),
        }
    }
}

fn default_dir() -> String {
    ".".to_string()
}

const fn default_no_color() -> bool {
    true
}

/// Integration configurations
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntegrationsConfig {
    #[serde(default)]
    pub terraform: TerraformConfig,
}

/// terraform integration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerraformConfig {
    /// Executable name on PATH or absolute path
    #[serde(default = "default_binary")]
    pub binary: String,
}

impl Default for TerraformConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

fn default_binary() -> String {
    DEFAULT_BINARY.to_string()
}

/// Template for global configuration file
const TEMPLATE_GLOBAL: &str = r#"# tfcheck global configuration
# Location: ~/.config/tfcheck/config.toml
#
# This file contains default settings applied to every module.
# Project-specific settings in .tfcheck.toml will override [module].

[module]
# Root module directory
# Relative paths are resolved from the directory holding this file
dir = "."
# Pass -no-color to terraform so captured output has no ANSI codes
no_color = true

[integration.terraform]
# Terraform executable (name on PATH or absolute path)
# Overridden by --terraform or the TFCHECK_TERRAFORM environment variable
binary = "terraform"
"#;

/// Template for local configuration file
const TEMPLATE_LOCAL: &str = r#"# tfcheck project configuration
# Location: .tfcheck.toml (directory where tfcheck is run)
#
# This file overrides global settings for this project.

[module]
# Root module directory, relative to this file
# A test directory next to the module would use dir = "../"
# dir = "."
no_color = true

# Note: integration configuration (terraform binary) is only available in global config
#       (~/.config/tfcheck/config.toml)
"#;

impl Config {
    /// Get the global configuration template
    #[must_use]
    pub const fn template_global() -> &'static str {
        TEMPLATE_GLOBAL
    }

    /// Get the local configuration template
    #[must_use]
    pub const fn template_local() -> &'static str {
        TEMPLATE_LOCAL
    }
}
