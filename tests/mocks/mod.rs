//! Mock implementations for testing without a real Android toolchain.
//!
//! This module provides a scriptable host that can simulate a fully set up
//! workstation, a bare machine, or a broken Java install.

pub mod host;

pub use host::*;
