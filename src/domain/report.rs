//! Scenario outcomes and the suite report

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

use crate::color;

/// A Terraform step within the validation scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Init,
    Validate,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Validate => write!(f, "validate"),
        }
    }
}

/// A terraform step that exited non-zero, with its captured output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub step: Step,
    pub message: String,
}

impl From<StepFailure> for Outcome {
    fn from(failure: StepFailure) -> Self {
        Self::Failed {
            step: failure.step,
            message: failure.message,
        }
    }
}

/// Result of a single scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed { step: Step, message: String },
    Skipped { reason: String },
}

impl Outcome {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed { .. } => "failed",
            Self::Skipped { .. } => "skipped",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub duration_ms: u64,
}

impl ScenarioResult {
    pub fn new(name: impl Into<String>, outcome: Outcome, duration: Duration) -> Self {
        Self {
            name: name.into(),
            outcome,
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Styled one-line summary for terminal output
    #[must_use]
    pub fn render(&self, color_mode: color::ColorMode) -> String {
        let timing = format_duration(Duration::from_millis(self.duration_ms));
        let line = match &self.outcome {
            Outcome::Passed => color::success(
                color_mode,
                format!("{} {}", self.name, color::dim(color_mode, timing)),
            )
            .to_string(),
            Outcome::Failed { step, .. } => color::error(
                color_mode,
                format!(
                    "{} (terraform {step} failed) {}",
                    self.name,
                    color::dim(color_mode, timing)
                ),
            )
            .to_string(),
            Outcome::Skipped { reason } => color::warn(
                color_mode,
                format!(
                    "{} {}",
                    self.name,
                    color::dim(color_mode, format!("skipped: {reason}"))
                ),
            )
            .to_string(),
        };
        line.trim_end().to_string()
    }
}

/// Report for a suite run
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub started_at: String,
    pub results: Vec<ScenarioResult>,
}

impl SuiteReport {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at: started_at.to_rfc3339(),
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, result: ScenarioResult) {
        self.results.push(result);
    }

    fn count(&self, label: &str) -> usize {
        self.results
            .iter()
            .filter(|result| result.outcome.label() == label)
            .count()
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.count("passed")
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count("failed")
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count("skipped")
    }

    /// True when no scenario failed
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.results.iter().any(|result| result.outcome.is_failure())
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }
}

/// Format duration for display (only if >= 100ms)
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 100 {
        String::new()
    } else if millis < 1000 {
        format!("({millis}ms)")
    } else {
        let secs = duration.as_secs_f64();
        format!("({secs:.1}s)")
    }
}
