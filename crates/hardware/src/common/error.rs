//! Fatal Error Definitions.
//!
//! Every error the emulator can raise ends the run. This module provides:
//! 1. **Taxonomy:** One variant per failure class (loading, decode, register, memory, output, config).
//! 2. **Exit Status:** The process exit code each failure maps to.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or executing an LS-8 program.
///
/// None of these are recoverable: the machine stops at the first one and the
/// error is surfaced to the caller unchanged.
#[derive(Debug, Error)]
pub enum VmError {
    /// The program file is missing or could not be read.
    #[error("program file '{}' could not be read: {source}", path.display())]
    ProgramNotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A program line is not an 8-bit binary literal.
    #[error("line {line}: '{text}' is not an 8-bit binary literal")]
    MalformedProgram {
        /// One-based line number in the program text.
        line: usize,
        /// The offending token with comments and whitespace removed.
        text: String,
    },

    /// The fetched opcode has no instruction assigned to it.
    #[error("unknown instruction {opcode:#010b} at address {addr:#04x}")]
    UnknownInstruction {
        /// Raw opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        addr: usize,
    },

    /// A register operand is outside `R0`-`R7`.
    #[error("invalid register index {index} in instruction at address {addr:#04x}")]
    InvalidRegister {
        /// Raw operand byte.
        index: u8,
        /// Address of the instruction carrying the operand.
        addr: usize,
    },

    /// A memory access fell outside the memory array.
    #[error("memory address {addr:#x} is out of bounds (memory size {size})")]
    OutOfBounds {
        /// Requested address.
        addr: usize,
        /// Size of the memory that was accessed.
        size: usize,
    },

    /// The output sink rejected a write.
    #[error("failed to write program output: {0}")]
    Output(#[from] io::Error),

    /// The configuration is malformed or holds an unsupported value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl VmError {
    /// Process exit status for this error.
    ///
    /// A missing program file exits with `2`; every other failure exits with `1`.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ProgramNotFound { .. } => 2,
            _ => 1,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = VmError> = std::result::Result<T, E>;
