//! Stack Operations.
//!
//! The stack lives in main memory and grows downward from the reset value of
//! `R7`. A push pre-decrements `SP`; a pop post-increments it. Both wrap
//! modulo 256 like any other register arithmetic.

use std::io::Write;

use super::Machine;
use crate::common::Result;

impl<O: Write> Machine<O> {
    /// Pushes `value`: `SP -= 1; memory[SP] = value`.
    ///
    /// Memory is written before `SP` is updated, so a failed write leaves
    /// the stack pointer untouched.
    ///
    /// # Errors
    ///
    /// [`VmError::OutOfBounds`](crate::common::VmError::OutOfBounds) if the new `SP` is outside memory.
    pub fn push_value(&mut self, value: u8) -> Result<()> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.memory.write(sp as usize, value)?;
        self.regs.set_sp(sp);
        self.stats.observe_stack(self.stack_base, sp);
        Ok(())
    }

    /// Pops the top of the stack: `value = memory[SP]; SP += 1`.
    ///
    /// # Errors
    ///
    /// [`VmError::OutOfBounds`](crate::common::VmError::OutOfBounds) if `SP` is outside memory.
    pub fn pop_value(&mut self) -> Result<u8> {
        let sp = self.regs.sp();
        let value = self.memory.read(sp as usize)?;
        self.regs.set_sp(sp.wrapping_add(1));
        Ok(value)
    }
}
