//! Common test utilities for manifest integration tests.
//!
//! - `TestEnv`: isolated temp directory with manifests, static files and config
//! - Fixtures: reusable manifest and asset content
#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
