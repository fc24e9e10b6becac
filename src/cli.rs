// CommandFactory is used by tests via Cli::command()
#[allow(unused_imports)]
use clap::CommandFactory;

use clap::{Parser, Subcommand};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use std::ffi::OsStr;
use std::path::PathBuf;

use crate::domain::scenario::SCENARIOS;

/// Terraform root module validation runner
#[derive(Parser, Debug)]
#[command(name = "tfcheck", author, version, about, long_about = None)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,

    /// Terraform executable (overrides TFCHECK_TERRAFORM and config)
    #[arg(long, value_name = "PATH", global = true)]
    pub terraform: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run `terraform init -backend=false` then `terraform validate`
    Validate {
        /// Root module directory (defaults to config `module.dir`)
        dir: Option<PathBuf>,
    },
    /// Run the scenario suite; placeholder scenarios are reported as skipped
    Run {
        /// Scenarios to run (all when omitted)
        #[arg(num_args = 0.., value_name = "SCENARIO", add = ArgValueCompleter::new(list_scenarios))]
        scenarios: Vec<String>,
        /// Root module directory (defaults to config `module.dir`)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        /// Print the suite report as JSON on stdout
        #[arg(long)]
        json: bool,
    },
    /// List scenarios
    Ls,
    /// Write starter config files (global and local unless one is chosen)
    Init {
        /// Write only the global config under $XDG_CONFIG_HOME/tfcheck
        #[arg(long, conflicts_with = "local")]
        global: bool,
        /// Write only .tfcheck.toml in the current directory
        #[arg(long, conflicts_with = "global")]
        local: bool,
        /// Replace files that already exist
        #[arg(short, long)]
        force: bool,
    },
    /// Print the line that enables completion for a shell
    Completion {
        /// bash, zsh or fish
        shell: String,
    },
}

/// Scenario names for completion, filtered by prefix
#[must_use]
pub fn list_scenarios(current: &OsStr) -> Vec<CompletionCandidate> {
    let prefix = current.to_string_lossy();
    SCENARIOS
        .iter()
        .filter(|scenario| scenario.name.starts_with(&*prefix))
        .map(|scenario| CompletionCandidate::new(scenario.name))
        .collect()
}
