//! Configuration module
//!
//! This module handles loading and managing tfcheck configuration from TOML files.

pub mod loader;
pub mod schema;

// Library API; the binary itself only needs `Config`
#[allow(unused_imports)]
pub use schema::{Config, IntegrationsConfig, ModuleConfig, TerraformConfig};
