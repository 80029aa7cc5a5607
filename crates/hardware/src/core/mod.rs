//! LS-8 processor core.
//!
//! This module contains the machine and its architectural state:
//! 1. **Arch:** Register file and condition flags.
//! 2. **CPU:** The [`Machine`], its fetch-decode-execute loop, and the instruction handlers.

/// Architectural state (GPRs and flags).
pub mod arch;

/// The machine and its execution loop.
pub mod cpu;

pub use cpu::{Machine, Next};
