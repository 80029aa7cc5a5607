//! LS-8 General-Purpose Register File.
//!
//! This module implements the register file for the LS-8. It performs the following:
//! 1. **Storage:** Maintains eight byte registers (`R0`-`R7`).
//! 2. **Stack Pointer:** Exposes `R7` as the stack pointer.
//! 3. **Debugging:** Renders the complete register state for traces and dumps.

use crate::common::constants::NUM_REGISTERS;
use crate::isa::abi::Reg;

/// General-Purpose Register file.
///
/// Every register is an unsigned byte; arithmetic on register values wraps
/// modulo 256 and is performed by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a register file with all registers zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    #[inline]
    pub const fn read(&self, reg: Reg) -> u8 {
        self.regs[reg.index()]
    }

    /// Writes a register.
    #[inline]
    pub const fn write(&mut self, reg: Reg, value: u8) {
        self.regs[reg.index()] = value;
    }

    /// Current stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.read(Reg::SP)
    }

    /// Sets the stack pointer (`R7`).
    #[inline]
    pub const fn set_sp(&mut self, value: u8) {
        self.write(Reg::SP, value);
    }

    /// All register values, `R0` first.
    pub const fn values(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// Formats the registers as `R0=00 R1=00 ...` in hex.
    pub fn dump(&self) -> String {
        Reg::all()
            .map(|reg| format!("{reg}={:02X}", self.read(reg)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
