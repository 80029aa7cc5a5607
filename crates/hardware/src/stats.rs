//! Run statistics collection and reporting.
//!
//! This module tracks what a program did while it ran. It provides:
//! 1. **Cycles:** Instructions executed.
//! 2. **Instruction mix:** Counts by class (data, ALU, stack, flow, system).
//! 3. **Control flow:** Jumps, calls, and returns that redirected the PC.
//! 4. **Stack:** Deepest stack excursion below the initial stack pointer.

use crate::core::cpu::Next;
use crate::isa::instruction::{Instruction, InstructionClass};

/// Statistics for a single program run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Instructions executed, including the final `HLT`.
    pub cycles: u64,
    /// Count of `LDI` and `PRN`.
    pub inst_data: u64,
    /// Count of `ADD`, `SUB`, `MUL`, and `CMP`.
    pub inst_alu: u64,
    /// Count of `PUSH` and `POP`.
    pub inst_stack: u64,
    /// Count of jumps, calls, and returns, taken or not.
    pub inst_flow: u64,
    /// Count of `HLT`.
    pub inst_system: u64,
    /// Flow instructions that assigned the PC.
    pub jumps_taken: u64,
    /// Largest number of bytes the stack held at once.
    pub peak_stack_depth: u8,
}

impl RunStats {
    /// Records one executed instruction and the PC decision it produced.
    pub fn record(&mut self, inst: Instruction, next: Next) {
        self.cycles += 1;
        match inst.class() {
            InstructionClass::Data => self.inst_data += 1,
            InstructionClass::Alu => self.inst_alu += 1,
            InstructionClass::Stack => self.inst_stack += 1,
            InstructionClass::Flow => self.inst_flow += 1,
            InstructionClass::System => self.inst_system += 1,
        }
        if let Next::Jump(_) = next {
            self.jumps_taken += 1;
        }
    }

    /// Updates the peak stack depth from the current stack pointer.
    ///
    /// Depth is measured modulo 256, like the stack pointer itself.
    pub fn observe_stack(&mut self, stack_base: u8, sp: u8) {
        self.peak_stack_depth = self.peak_stack_depth.max(stack_base.wrapping_sub(sp));
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "cycles={} data={} alu={} stack={} flow={} system={} jumps_taken={} peak_stack={}",
            self.cycles,
            self.inst_data,
            self.inst_alu,
            self.inst_stack,
            self.inst_flow,
            self.inst_system,
            self.jumps_taken,
            self.peak_stack_depth
        )
    }
}
