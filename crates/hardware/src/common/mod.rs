//! Common types and constants shared by every part of the emulator.
//!
//! This module provides:
//! 1. **Constants:** Memory size, register count, and stack defaults.
//! 2. **Error Handling:** The fatal error taxonomy returned by loading and execution.

/// Machine-wide constants.
pub mod constants;

/// Error types for loading, configuration, and execution.
pub mod error;

pub use constants::{MAX_MEMORY_SIZE, MEMORY_SIZE, NUM_REGISTERS, STACK_POINTER_INIT};
pub use error::{Result, VmError};
