//! Global Machine Constants.
//!
//! Sizes and reset values for the LS-8 memory and register file.

/// Canonical size of main memory in bytes.
pub const MEMORY_SIZE: usize = 256;

/// Largest memory the machine can address.
///
/// Registers, jump targets, and return addresses are all one byte wide, so
/// nothing beyond address `0xFF` is reachable.
pub const MAX_MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGISTERS: usize = 8;

/// Register index reserved for the stack pointer.
pub const SP_INDEX: u8 = 7;

/// Reset value of the stack pointer; the stack grows down from here.
pub const STACK_POINTER_INIT: u8 = 0xF4;

/// Address the program image is loaded at and execution starts from.
pub const PROGRAM_START: usize = 0;
