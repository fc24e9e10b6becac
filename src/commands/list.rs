//! List command - Display the scenario catalogue

use anyhow::Result;
use std::io::IsTerminal;

use crate::color;
use crate::domain::scenario::{Scenario, ScenarioKind, SCENARIOS};

/// Format scenarios as aligned table lines
#[must_use]
pub fn format_scenario_table(scenarios: &[Scenario], color_mode: color::ColorMode) -> Vec<String> {
    let name_width = scenarios.iter().map(|s| s.name.len()).max().unwrap_or(0);

    scenarios
        .iter()
        .map(|scenario| {
            let padded = format!("{:<name_width$}", scenario.name);
            let kind = color_mode.colorize_kind(scenario.kind_label(), scenario.is_skipped());
            let detail = match scenario.kind {
                ScenarioKind::Validation => scenario.description.to_string(),
                ScenarioKind::Skipped { reason } => format!(
                    "{} {}",
                    scenario.description,
                    color::dim(color_mode, format!("({reason})"))
                ),
            };
            format!(
                "{}  {kind}  {detail}",
                color_mode.colorize_scenario(&padded)
            )
        })
        .collect()
}

/// List all scenarios
///
/// Interactive: table to stderr. Piped: scenario names to stdout.
///
/// # Errors
/// Never fails today; returns `Result` for consistency with other commands
pub fn cmd_list(color_mode: color::ColorMode) -> Result<()> {
    if std::io::stdout().is_terminal() {
        for line in format_scenario_table(SCENARIOS, color_mode) {
            eprintln!("{line}");
        }
    } else {
        for scenario in SCENARIOS {
            println!("{}", scenario.name);
        }
    }
    Ok(())
}
