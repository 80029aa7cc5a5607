//! LS-8 Instruction Set Definitions.
//!
//! Contains the opcode table, the register-index type, decoding from memory
//! into typed instructions, and a disassembler for traces and state dumps.

/// Register index type and reserved register names.
pub mod abi;

/// Decoding of opcode and operand bytes into [`instruction::Instruction`].
pub mod decode;

/// Instruction disassembler for traces and diagnostics.
pub mod disasm;

/// Instruction header bit fields and the typed instruction enum.
pub mod instruction;

/// Opcode byte values for every implemented instruction.
pub mod opcodes;

pub use abi::Reg;
pub use decode::decode;
pub use instruction::{Instruction, InstructionBits, InstructionClass};
