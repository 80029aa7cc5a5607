//! LS-8 architectural state.
//!
//! This module contains the programmer-visible register state:
//! 1. **GPRs:** The eight byte-wide general-purpose registers, including the stack pointer.
//! 2. **Flags:** The `00000LGE` condition register written by `CMP`.

/// Condition flag register.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;
