//! Hook engine module.
//!
//! Provides step orchestration, project tree verification and requirements
//! generation.

pub mod hook;
pub mod requirements;
pub mod structure;
