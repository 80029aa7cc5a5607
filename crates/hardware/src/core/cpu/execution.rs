//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch/Decode:** Reads the opcode at the PC and decodes it with its operands.
//! 2. **Execute:** Applies the instruction's effect to registers, flags, memory, and output.
//! 3. **PC Update:** Applies the single [`Next`] decision returned by execute.
//! 4. **Observability:** Emits trace lines and records run statistics.

use std::io::Write;

use super::Machine;
use crate::common::{Result, VmError};
use crate::core::arch::flags::Flags;
use crate::isa::abi::Reg;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::stats::RunStats;

/// How the PC moves after an instruction executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Next {
    /// Advance past the instruction by its encoded length.
    Advance,
    /// Continue at the given address.
    Jump(usize),
    /// Stop the machine.
    Halt,
}

impl<O: Write> Machine<O> {
    /// Runs until `HLT` or the first fatal error.
    ///
    /// # Returns
    ///
    /// The statistics for the run when the machine halts normally.
    ///
    /// # Errors
    ///
    /// Any [`VmError`] raised by decode or execute. The machine state is left
    /// as it was at the start of the failing cycle.
    pub fn run(&mut self) -> Result<RunStats> {
        while !self.halted {
            if let Err(e) = self.step() {
                tracing::error!(pc = self.pc, error = %e, "machine stopped");
                return Err(e);
            }
        }
        tracing::debug!(pc = self.pc, cycles = self.stats.cycles, "halted");
        Ok(self.stats.clone())
    }

    /// Executes a single instruction.
    ///
    /// Does nothing and returns [`Next::Halt`] once the machine has halted.
    ///
    /// # Errors
    ///
    /// Any [`VmError`] raised while decoding or executing the instruction.
    pub fn step(&mut self) -> Result<Next> {
        if self.halted {
            return Ok(Next::Halt);
        }

        if self.trace {
            tracing::debug!(target: "ls8::trace", "{}", self.trace_line());
        }

        let inst = decode(&self.memory, self.pc)?;
        let next = self.execute(inst)?;
        self.stats.record(inst, next);

        match next {
            Next::Advance => self.pc += inst.size(),
            Next::Jump(target) => self.pc = target,
            Next::Halt => self.halted = true,
        }
        Ok(next)
    }

    /// Applies one decoded instruction and reports how the PC should move.
    ///
    /// The PC itself is never modified here; [`Machine::step`] applies the
    /// returned [`Next`].
    ///
    /// # Errors
    ///
    /// * [`VmError::Output`] if `PRN` cannot write to the output sink.
    /// * [`VmError::OutOfBounds`] if a stack access or `CALL` return address
    ///   falls outside memory.
    pub fn execute(&mut self, inst: Instruction) -> Result<Next> {
        let next = match inst {
            Instruction::Ldi { reg, value } => {
                self.regs.write(reg, value);
                Next::Advance
            }
            Instruction::Prn { reg } => {
                writeln!(self.output, "{}", self.regs.read(reg))?;
                Next::Advance
            }
            Instruction::Hlt => Next::Halt,

            Instruction::Add { a, b } => self.alu(a, b, u8::wrapping_add),
            Instruction::Sub { a, b } => self.alu(a, b, u8::wrapping_sub),
            Instruction::Mul { a, b } => self.alu(a, b, u8::wrapping_mul),
            Instruction::Cmp { a, b } => {
                self.flags = Flags::compare(self.regs.read(a), self.regs.read(b));
                Next::Advance
            }

            Instruction::Push { reg } => {
                // `SP -= 1` happens before the register is read, so pushing R7
                // stores the decremented stack pointer.
                let value = if reg == Reg::SP {
                    self.regs.sp().wrapping_sub(1)
                } else {
                    self.regs.read(reg)
                };
                self.push_value(value)?;
                Next::Advance
            }
            Instruction::Pop { reg } => {
                let sp = self.regs.sp();
                let value = self.memory.read(sp as usize)?;
                self.regs.write(reg, value);
                self.regs.set_sp(self.regs.sp().wrapping_add(1));
                Next::Advance
            }

            Instruction::Call { reg } => {
                let return_addr = self.pc + inst.size();
                let encoded = u8::try_from(return_addr).map_err(|_| VmError::OutOfBounds {
                    addr: return_addr,
                    size: self.memory.len(),
                })?;
                let target = self.regs.read(reg);
                self.push_value(encoded)?;
                Next::Jump(target as usize)
            }
            Instruction::Ret => Next::Jump(self.pop_value()? as usize),

            Instruction::Jmp { reg } => Next::Jump(self.regs.read(reg) as usize),
            Instruction::Jeq { reg } => self.jump_if(self.flags.equal(), reg),
            Instruction::Jne { reg } => self.jump_if(!self.flags.equal(), reg),
        };
        Ok(next)
    }

    fn alu(&mut self, a: Reg, b: Reg, op: fn(u8, u8) -> u8) -> Next {
        let result = op(self.regs.read(a), self.regs.read(b));
        self.regs.write(a, result);
        Next::Advance
    }

    const fn jump_if(&self, condition: bool, reg: Reg) -> Next {
        if condition {
            Next::Jump(self.regs.read(reg) as usize)
        } else {
            Next::Advance
        }
    }
}
