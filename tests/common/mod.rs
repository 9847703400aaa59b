//! Common test utilities for cdp contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temporary home directory
//! - Assertion macros: `assert_output_contains!`, `assert_exit_code!`
//! - Fixtures: Reusable store contents

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod env;
pub mod fixtures;
pub mod windows;

pub use env::*;
pub use fixtures::*;
