// Command handlers module
// This module contains all CLI command implementations

pub mod common;
pub mod completion;
pub mod init;
pub mod list;
pub mod run;
pub mod validate;
