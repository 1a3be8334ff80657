//! Test modules for wildpath.
//!
//! Cross-module unit tests live here; tests for a single type sit next to it.
//! - Configuration loading and validation
//! - Error conversion and reporting
//! - The batch pipeline driven from configuration files
//! - Shared fixtures and proptest strategies

pub mod io_tests;

pub use test_utils::{path_strategy, pattern_strategy, TestFixture};
