//! LS-8 Opcodes.
//!
//! Opcode bytes follow the `AABCDDDD` layout: `AA` is the operand count,
//! `B` marks ALU operations, `C` marks instructions that set the PC, and
//! `DDDD` identifies the operation within its group.

/// Load immediate: `LDI reg, value`.
pub const LDI: u8 = 0b1000_0010;

/// Print register as decimal: `PRN reg`.
pub const PRN: u8 = 0b0100_0111;

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;

/// Wrapping add: `ADD regA, regB`.
pub const ADD: u8 = 0b1010_0000;

/// Wrapping subtract: `SUB regA, regB`.
pub const SUB: u8 = 0b1010_0001;

/// Wrapping multiply: `MUL regA, regB`.
pub const MUL: u8 = 0b1010_0010;

/// Compare two registers and set the flag register: `CMP regA, regB`.
pub const CMP: u8 = 0b1010_0111;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Call the subroutine at the address held in a register.
pub const CALL: u8 = 0b0101_0000;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Unconditional jump to the address held in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the equal flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// Every implemented opcode.
pub const ALL: [u8; 14] = [
    LDI, PRN, HLT, ADD, SUB, MUL, CMP, PUSH, POP, CALL, RET, JMP, JEQ, JNE,
];
