//! Placeholder scenarios that need real Azure credentials
//!
//! They stay ignored; `cargo test -- --ignored` only confirms each one is
//! still catalogued as skipped with the same reason.

use tfcheck::domain::scenario::{find_scenario, ScenarioKind, SCENARIOS};

fn assert_skipped_with(name: &str, expected: &'static str) {
    let scenario = find_scenario(name).unwrap();
    assert_eq!(
        scenario.kind,
        ScenarioKind::Skipped { reason: expected },
        "{name}"
    );
}

#[test]
#[ignore = "requires Azure authentication and creates expensive resources"]
fn test_basic_infrastructure() {
    assert_skipped_with(
        "basic-infrastructure",
        "requires Azure authentication and creates expensive resources",
    );
}

#[test]
#[ignore = "requires Azure backend configuration and authentication"]
fn test_terraform_plan() {
    assert_skipped_with(
        "terraform-plan",
        "requires Azure backend configuration and authentication",
    );
}

#[test]
#[ignore = "requires Azure authentication and creates real resources"]
fn test_basic_fixture() {
    assert_skipped_with(
        "basic-fixture",
        "requires Azure authentication and creates real resources",
    );
}

#[test]
fn test_only_placeholders_are_skipped() {
    let skipped: Vec<&str> = SCENARIOS
        .iter()
        .filter(|scenario| scenario.is_skipped())
        .map(|scenario| scenario.name)
        .collect();
    assert_eq!(
        skipped,
        vec!["basic-infrastructure", "terraform-plan", "basic-fixture"]
    );
}
