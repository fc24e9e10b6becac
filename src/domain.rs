// Domain module
// Scenario catalogue, outcomes and root module inspection

pub mod module;
pub mod report;
pub mod scenario;
