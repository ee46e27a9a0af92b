//! Testing infrastructure for fauxdict integration tests.
//!
//! - `TestWorld`: isolated data directory plus a CLI runner
//! - `fixtures`: word list payloads and config files
//! - `assertions`: checks over the JSON envelope printed with `--format json`

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
