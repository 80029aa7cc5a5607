//! Instruction Disassembler for the LS-8.
//!
//! Renders the instruction at an address as text for trace lines and error
//! dumps.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! use ls8_core::memory::Memory;
//!
//! let mut memory = Memory::new(256);
//! memory.load(&[0b1000_0010, 0, 8]).unwrap();
//! assert_eq!(disassemble(&memory, 0), "LDI R0, 8");
//! ```

use crate::isa::decode::decode;
use crate::memory::Memory;

/// Disassembles the instruction at `addr`.
///
/// Returns the mnemonic form, e.g. `"ADD R0, R1"`, or `"unknown 0x.."` when
/// the bytes there do not decode.
pub fn disassemble(memory: &Memory, addr: usize) -> String {
    decode(memory, addr).map_or_else(
        |_| format!("unknown {:#04x}", memory.peek(addr).unwrap_or(0)),
        |inst| inst.to_string(),
    )
}
