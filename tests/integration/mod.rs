//! Integration tests for android-template-hook.
//!
//! These tests drive validation and the hook against a mock host and
//! temporary project directories.

pub mod cli_tests;
pub mod validation_tests;
