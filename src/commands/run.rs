//! Run command - Execute the scenario suite and report each outcome

use anyhow::{Context, Result};
use std::path::Path;

use crate::color;
use crate::commands::common::resolve_options;
use crate::commands::validate::{ensure_terraform, preflight};
use crate::config::Config;
use crate::domain::report::Outcome;
use crate::domain::scenario::select_scenarios;
use crate::integrations::terraform::RealTerraformClient;
use crate::service::ValidationService;

/// Run the selected scenarios (all when `names` is empty)
///
/// Placeholder scenarios are reported as skipped and never need terraform.
///
/// # Errors
/// Returns an error if:
/// - A scenario name is unknown
/// - The validation scenario is selected and the module or terraform is missing
/// - Any scenario failed
pub fn cmd_run(
    names: &[String],
    dir: Option<&Path>,
    binary: Option<&Path>,
    json: bool,
    color_mode: color::ColorMode,
) -> Result<()> {
    let scenarios = select_scenarios(names)?;
    let config = Config::load()?;
    let options = resolve_options(dir, binary, &config)?;
    let service = ValidationService::new(RealTerraformClient, color_mode);

    if scenarios.iter().any(|scenario| !scenario.is_skipped()) {
        preflight(&options, color_mode)?;
        ensure_terraform(&service, &options)?;
    }

    let report = service.run_suite(scenarios, &options, |result| {
        eprintln!("{}", result.render(color_mode));
        if let Outcome::Failed { message, .. } = &result.outcome {
            let lines: Vec<&str> = message.lines().collect();
            for (index, line) in lines.iter().enumerate() {
                eprintln!(
                    "{}",
                    color::tree_item(color_mode, line, index + 1 == lines.len(), 1)
                );
            }
        }
    });

    if json {
        let output =
            serde_json::to_string_pretty(&report).context("Failed to serialize suite report")?;
        println!("{output}");
    }

    let summary = report.summary();
    if report.is_success() {
        eprintln!("{}", color::success(color_mode, summary));
        Ok(())
    } else {
        anyhow::bail!("Suite failed: {summary}");
    }
}
