//! LS-8 emulator library.
//!
//! This crate implements the LS-8, a small 8-bit educational computer:
//! 1. **Memory:** A flat, bounds-checked byte array holding program and stack.
//! 2. **Core:** Eight byte registers, the flag register, and the fetch-decode-execute loop.
//! 3. **ISA:** Opcode table, decoding into typed instructions, and disassembly.
//! 4. **Simulation:** Text program loader, configuration, and run statistics.

/// Common types and constants (sizes, errors).
pub mod common;
/// Emulator configuration.
pub mod config;
/// Processor core (architectural state and the machine).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Main memory.
pub mod memory;
/// Program loader and whole-run entry points.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Error type for every fallible operation in the crate.
pub use crate::common::VmError;
/// Root configuration type; use `Config::default()` or [`Config::from_json`].
pub use crate::config::Config;
/// The LS-8 machine; construct with `Machine::new`.
pub use crate::core::Machine;
/// Main memory type.
pub use crate::memory::Memory;
