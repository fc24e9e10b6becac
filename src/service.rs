#![allow(clippy::missing_errors_doc)]
use anyhow::Result;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

use crate::color;
use crate::domain::report::{
    format_duration, Outcome, ScenarioResult, Step, StepFailure, SuiteReport,
};
use crate::domain::scenario::{Scenario, ScenarioKind};
use crate::integrations::terraform::{
    init_without_backend, validate, CommandOutput, TerraformClient, TerraformOptions,
};

/// Validation service that runs scenarios through a terraform client
pub struct ValidationService<T>
where
    T: TerraformClient,
{
    client: T,
    color_mode: color::ColorMode,
}

impl<T> ValidationService<T>
where
    T: TerraformClient,
{
    /// Create a new validation service
    pub const fn new(client: T, color_mode: color::ColorMode) -> Self {
        Self { client, color_mode }
    }

    /// Check that the terraform binary can be executed
    pub fn terraform_available(&self, options: &TerraformOptions) -> bool {
        self.client.is_available(options)
    }

    /// Initialize without backend, then validate
    ///
    /// Stops at the first failing step. Validation is never attempted
    /// after a failed init.
    pub fn validate_module(&self, options: &TerraformOptions) -> Result<(), StepFailure> {
        let fail = |step| {
            move |err: anyhow::Error| StepFailure {
                step,
                message: format!("{err:#}"),
            }
        };

        self.run_step(Step::Init, false, || {
            init_without_backend(&self.client, options)
        })
        .map_err(fail(Step::Init))?;
        self.run_step(Step::Validate, true, || validate(&self.client, options))
            .map_err(fail(Step::Validate))?;
        Ok(())
    }

    /// Run a single scenario
    ///
    /// Skipped scenarios never touch the terraform client.
    pub fn run_scenario(&self, scenario: &Scenario, options: &TerraformOptions) -> ScenarioResult {
        let start = Instant::now();
        let outcome = match scenario.kind {
            ScenarioKind::Skipped { reason } => {
                return ScenarioResult::new(
                    scenario.name,
                    Outcome::Skipped {
                        reason: reason.to_string(),
                    },
                    Duration::ZERO,
                );
            }
            ScenarioKind::Validation => self
                .validate_module(options)
                .map_or_else(Outcome::from, |()| Outcome::Passed),
        };
        ScenarioResult::new(scenario.name, outcome, start.elapsed())
    }

    /// Run scenarios sequentially, in the given order
    ///
    /// `on_result` is called after each scenario finishes.
    pub fn run_suite<'a, I, F>(
        &self,
        scenarios: I,
        options: &TerraformOptions,
        mut on_result: F,
    ) -> SuiteReport
    where
        I: IntoIterator<Item = &'a Scenario>,
        F: FnMut(&ScenarioResult),
    {
        let mut report = SuiteReport::new(Utc::now());
        for scenario in scenarios {
            let result = self.run_scenario(scenario, options);
            on_result(&result);
            report.push(result);
        }
        report
    }

    fn run_step<F>(&self, step: Step, is_last: bool, run: F) -> Result<CommandOutput>
    where
        F: FnOnce() -> Result<CommandOutput>,
    {
        let label = match step {
            Step::Init => "terraform init -backend=false",
            Step::Validate => "terraform validate",
        };

        // Show progress indicator if TTY
        let spinner = if self.color_mode.should_colorize() {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                pb.set_style(style);
            }
            pb.set_message(format!("Running {label}"));
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let start = Instant::now();
        let result = run();
        let elapsed = start.elapsed();

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        let timing = color::dim(self.color_mode, format_duration(elapsed));
        let message = if result.is_ok() {
            color::success(self.color_mode, format!("{label} {timing}")).to_string()
        } else {
            color::error(self.color_mode, format!("{label} {timing}")).to_string()
        };
        eprintln!(
            "{}",
            color::tree_item(self.color_mode, message.trim_end(), is_last, 1)
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::{find_scenario, SCENARIOS, VALIDATION_SCENARIO};
    use crate::integrations::terraform::tests::MockTerraformClient;

    fn service(client: MockTerraformClient) -> ValidationService<MockTerraformClient> {
        ValidationService::new(client, color::ColorMode::Never)
    }

    #[test]
    fn test_validate_module_runs_init_then_validate() {
        let service = service(MockTerraformClient::new());
        assert_eq!(service.validate_module(&TerraformOptions::new("../")), Ok(()));
        assert_eq!(service.client.subcommands(), vec!["init", "validate"]);
    }

    #[test]
    fn test_validate_module_passes_backend_flag() {
        let service = service(MockTerraformClient::new());
        service
            .validate_module(&TerraformOptions::new("../"))
            .unwrap();
        assert_eq!(
            service.client.calls.borrow()[0],
            vec!["init", "-backend=false", "-no-color"]
        );
    }

    #[test]
    fn test_init_failure_stops_before_validate() {
        let service = service(MockTerraformClient::new().failing_on("init"));
        let failure = service
            .validate_module(&TerraformOptions::new("."))
            .unwrap_err();
        assert_eq!(failure.step, Step::Init);
        assert_eq!(service.client.subcommands(), vec!["init"]);
    }

    #[test]
    fn test_validate_failure_surfaces_output() {
        let service = service(MockTerraformClient::new().failing_on("validate"));
        let failure = service
            .validate_module(&TerraformOptions::new("."))
            .unwrap_err();
        assert_eq!(failure.step, Step::Validate);
        assert!(failure.message.contains("Missing required argument"));
    }

    #[test]
    fn test_validation_scenario_maps_step_failure_to_outcome() {
        let service = service(MockTerraformClient::new().failing_on("init"));
        let scenario = find_scenario(VALIDATION_SCENARIO).unwrap();
        let result = service.run_scenario(scenario, &TerraformOptions::new("."));
        assert!(matches!(
            result.outcome,
            Outcome::Failed {
                step: Step::Init,
                ..
            }
        ));
    }

    #[test]
    fn test_terraform_available_delegates_to_client() {
        let options = TerraformOptions::new(".");
        assert!(service(MockTerraformClient::new()).terraform_available(&options));
        assert!(!service(MockTerraformClient::new().unavailable()).terraform_available(&options));
    }

    #[test]
    fn test_skipped_scenario_does_not_call_terraform() {
        let service = service(MockTerraformClient::new().failing_on("init"));
        let scenario = find_scenario("terraform-plan").unwrap();
        let result = service.run_scenario(scenario, &TerraformOptions::new("."));
        assert!(matches!(result.outcome, Outcome::Skipped { .. }));
        assert_eq!(result.duration_ms, 0);
        assert!(service.client.calls.borrow().is_empty());
    }

    #[test]
    fn test_skipped_scenarios_never_fail_even_without_terraform() {
        let service = service(MockTerraformClient::new().unavailable().failing_on("init"));
        let skipped = SCENARIOS.iter().filter(|s| s.is_skipped());
        let report = service.run_suite(skipped, &TerraformOptions::new("."), |_| {});
        assert_eq!(report.skipped(), 3);
        assert_eq!(report.passed(), 0);
        assert!(report.is_success());
    }

    #[test]
    fn test_run_suite_all_scenarios() {
        let service = service(MockTerraformClient::new());
        let mut seen = Vec::new();
        let report = service.run_suite(SCENARIOS, &TerraformOptions::new("."), |result| {
            seen.push(result.name.clone());
        });
        assert_eq!(seen.len(), 4);
        assert_eq!(report.results.len(), 4);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.skipped(), 3);
        assert!(report.is_success());
        let names: Vec<_> = report.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "basic-infrastructure",
                VALIDATION_SCENARIO,
                "terraform-plan",
                "basic-fixture"
            ]
        );
    }

    #[test]
    fn test_run_suite_with_failure() {
        let service = service(MockTerraformClient::new().failing_on("validate"));
        let report = service.run_suite(SCENARIOS, &TerraformOptions::new("."), |_| {});
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
    }
}
