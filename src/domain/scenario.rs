//! Scenario catalogue
//!
//! The suite has one runnable check and a set of placeholder scenarios
//! that need live cloud credentials. Placeholders are always reported as
//! skipped with their fixed reason.

use serde::Serialize;

/// What running a scenario does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScenarioKind {
    /// `init -backend=false` followed by `validate`
    Validation,
    /// Never executed; reported as skipped
    Skipped { reason: &'static str },
}

/// A named entry in the suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(flatten)]
    pub kind: ScenarioKind,
}

impl Scenario {
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.kind, ScenarioKind::Skipped { .. })
    }

    /// Short label for listings
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self.kind {
            ScenarioKind::Validation => "run",
            ScenarioKind::Skipped { .. } => "skip",
        }
    }
}

/// Name of the only runnable scenario
pub const VALIDATION_SCENARIO: &str = "terraform-validation";

/// All scenarios, in execution order
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "basic-infrastructure",
        description: "Deploy the resource group, networking and base resources",
        kind: ScenarioKind::Skipped {
            reason: "requires Azure authentication and creates expensive resources",
        },
    },
    Scenario {
        name: VALIDATION_SCENARIO,
        description: "Initialize without backend and validate configuration syntax",
        kind: ScenarioKind::Validation,
    },
    Scenario {
        name: "terraform-plan",
        description: "Plan against the configured backend and check for errors",
        kind: ScenarioKind::Skipped {
            reason: "requires Azure backend configuration and authentication",
        },
    },
    Scenario {
        name: "basic-fixture",
        description: "Deploy the reduced networking fixture",
        kind: ScenarioKind::Skipped {
            reason: "requires Azure authentication and creates real resources",
        },
    },
];

/// Look up a scenario by name
#[must_use]
pub fn find_scenario(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.name == name)
}

/// Resolve a list of names into scenarios, keeping catalogue order
///
/// An empty list selects every scenario. Duplicates are collapsed.
///
/// # Errors
/// Returns an error naming the first unknown scenario
pub fn select_scenarios(names: &[String]) -> anyhow::Result<Vec<&'static Scenario>> {
    if names.is_empty() {
        return Ok(SCENARIOS.iter().collect());
    }

    if let Some(unknown) = names.iter().find(|name| find_scenario(name).is_none()) {
        let known: Vec<&str> = SCENARIOS.iter().map(|s| s.name).collect();
        anyhow::bail!(
            "Unknown scenario: {unknown}. Available scenarios: {}",
            known.join(", ")
        );
    }

    Ok(SCENARIOS
        .iter()
        .filter(|scenario| names.iter().any(|name| name == scenario.name))
        .collect())
}
