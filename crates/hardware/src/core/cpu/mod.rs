//! Machine Definition and Initialization.
//!
//! This module defines [`Machine`], the single owner of all LS-8 state. It coordinates:
//! 1. **State:** Memory, registers, program counter, and flags.
//! 2. **Output:** The sink `PRN` writes decimal values to.
//! 3. **Diagnostics:** Trace lines and state dumps.

/// Fetch-decode-execute loop and instruction handlers.
pub mod execution;

/// Stack push/pop helpers shared by `PUSH`, `POP`, `CALL`, and `RET`.
pub mod stack;

use std::io::Write;

use crate::common::Result;
use crate::common::constants::PROGRAM_START;
use crate::config::Config;
use crate::core::arch::flags::Flags;
use crate::core::arch::gpr::Gpr;
use crate::isa::disasm::disassemble;
use crate::memory::Memory;
use crate::stats::RunStats;

pub use execution::Next;

/// The LS-8 machine.
///
/// Owns memory, the register file, the PC, and the flag register for the
/// whole run. `O` is the output collaborator that `PRN` writes to.
#[derive(Debug)]
pub struct Machine<O: Write> {
    /// Main memory (program image and stack).
    pub memory: Memory,
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: Gpr,
    /// Address of the next instruction to fetch.
    pub pc: usize,
    /// Condition flags from the most recent `CMP`.
    pub flags: Flags,
    /// Set once `HLT` executes.
    pub halted: bool,
    /// Emit a trace line for every cycle.
    pub trace: bool,
    /// Statistics for the current run.
    pub stats: RunStats,
    stack_base: u8,
    output: O,
}

impl<O: Write> Machine<O> {
    /// Creates a machine with zeroed memory and registers, `SP` at its reset
    /// value, and the PC at address 0.
    ///
    /// # Errors
    ///
    /// [`VmError::Config`](crate::common::VmError::Config) if the configuration is invalid.
    pub fn new(config: &Config, output: O) -> Result<Self> {
        config.validate()?;

        let mut regs = Gpr::new();
        regs.set_sp(config.initial_sp);

        Ok(Self {
            memory: Memory::new(config.memory_size),
            regs,
            pc: PROGRAM_START,
            flags: Flags::default(),
            halted: false,
            trace: config.trace_instructions,
            stats: RunStats::default(),
            stack_base: config.initial_sp,
            output,
        })
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// [`VmError::OutOfBounds`](crate::common::VmError::OutOfBounds) if the image is larger than memory.
    pub fn load_program(&mut self, image: &[u8]) -> Result<()> {
        self.memory.load(image)?;
        tracing::debug!(bytes = image.len(), "program loaded");
        Ok(())
    }

    /// The output sink.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Mutable access to the output sink.
    pub const fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Value the stack pointer held at reset.
    pub const fn stack_base(&self) -> u8 {
        self.stack_base
    }

    /// Formats the per-cycle trace line for the instruction at the PC.
    ///
    /// Layout: `TRACE: PC | op a b | R0..R7 | FL | disassembly`, all hex.
    pub fn trace_line(&self) -> String {
        let byte = |offset: usize| self.memory.peek(self.pc + offset).unwrap_or(0);
        let regs: Vec<String> = self
            .regs
            .values()
            .iter()
            .map(|v| format!("{v:02X}"))
            .collect();
        format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} | {} | {} | {}",
            self.pc,
            byte(0),
            byte(1),
            byte(2),
            regs.join(" "),
            self.flags,
            disassemble(&self.memory, self.pc)
        )
    }

    /// Formats the PC, flags, registers, and the top of the stack.
    pub fn dump_state(&self) -> String {
        let sp = self.regs.sp() as usize;
        let stack_end = (self.stack_base as usize).max(sp);
        format!(
            "PC = {:#04x} ({})\nFL = {} ({:#010b})\n{}\nSTACK [{:#04x}..{:#04x}):\n{}",
            self.pc,
            disassemble(&self.memory, self.pc),
            self.flags,
            self.flags.bits(),
            self.regs.dump(),
            sp,
            stack_end,
            self.memory.dump(sp, stack_end - sp)
        )
    }
}
