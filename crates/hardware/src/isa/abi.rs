//! Register Naming.
//!
//! The LS-8 has eight byte-wide registers, `R0`-`R7`. `R7` doubles as the
//! stack pointer. Register operands in the instruction stream are validated
//! into a [`Reg`] at decode time so execution never sees an out-of-range index.

use std::fmt;

use crate::common::constants::{NUM_REGISTERS, SP_INDEX};

/// A validated general-purpose register index in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reg(u8);

impl Reg {
    /// `R0`.
    pub const R0: Self = Self(0);
    /// `R1`.
    pub const R1: Self = Self(1);
    /// `R2`.
    pub const R2: Self = Self(2);
    /// `R3`.
    pub const R3: Self = Self(3);
    /// `R4`.
    pub const R4: Self = Self(4);
    /// `R5`.
    pub const R5: Self = Self(5);
    /// `R6`.
    pub const R6: Self = Self(6);
    /// `R7`, the stack pointer.
    pub const SP: Self = Self(SP_INDEX);

    /// Validates a raw operand byte as a register index.
    ///
    /// # Returns
    ///
    /// `Some(Reg)` for `0..=7`, `None` otherwise.
    pub const fn new(raw: u8) -> Option<Self> {
        if (raw as usize) < NUM_REGISTERS {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Register number as stored in the instruction stream.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Register number as an array index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates `R0` through `R7` in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NUM_REGISTERS as u8).map(Self)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
