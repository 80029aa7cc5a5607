//! Instruction Encoding and Representation.
//!
//! Provides bit extraction for the LS-8 opcode header and the typed
//! [`Instruction`] that the decoder produces and the machine executes.

use std::fmt;

use super::abi::Reg;
use super::opcodes;

/// Shift that brings the operand-count field (bits 7-6) down to bit 0.
pub const OPERAND_COUNT_SHIFT: u8 = 6;
/// Bit marking an ALU operation (bit 5).
pub const ALU_BIT: u8 = 0b0010_0000;
/// Bit marking an instruction that assigns the PC itself (bit 4).
pub const SETS_PC_BIT: u8 = 0b0001_0000;

/// Trait for extracting header fields from an opcode byte.
pub trait InstructionBits {
    /// Number of operand bytes following the opcode (bits 7-6).
    fn operand_count(&self) -> usize;

    /// Whether the opcode is an ALU operation (bit 5).
    fn is_alu(&self) -> bool;

    /// Whether the instruction assigns the PC itself (bit 4).
    fn sets_pc(&self) -> bool;

    /// Encoded length in bytes: the opcode plus its operands.
    fn encoded_len(&self) -> usize {
        1 + self.operand_count()
    }
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        (self >> OPERAND_COUNT_SHIFT) as usize
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_BIT != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_BIT != 0
    }
}

/// Broad instruction category, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstructionClass {
    /// Register loads and output (`LDI`, `PRN`).
    Data,
    /// Arithmetic and compare.
    Alu,
    /// `PUSH` and `POP`.
    Stack,
    /// Jumps, calls, and returns.
    Flow,
    /// `HLT`.
    System,
}

/// A fully decoded LS-8 instruction with typed operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `reg = value`.
    Ldi {
        /// Destination register.
        reg: Reg,
        /// Immediate literal.
        value: u8,
    },
    /// Print `reg` in decimal.
    Prn {
        /// Register to print.
        reg: Reg,
    },
    /// Stop the machine.
    Hlt,
    /// `a = a + b`, wrapping.
    Add {
        /// Destination and first operand.
        a: Reg,
        /// Second operand.
        b: Reg,
    },
    /// `a = a - b`, wrapping.
    Sub {
        /// Destination and first operand.
        a: Reg,
        /// Second operand.
        b: Reg,
    },
    /// `a = a * b`, wrapping.
    Mul {
        /// Destination and first operand.
        a: Reg,
        /// Second operand.
        b: Reg,
    },
    /// Set exactly one of L, G, E from `a` versus `b`.
    Cmp {
        /// Left-hand operand.
        a: Reg,
        /// Right-hand operand.
        b: Reg,
    },
    /// Push `reg` onto the stack.
    Push {
        /// Source register.
        reg: Reg,
    },
    /// Pop the top of the stack into `reg`.
    Pop {
        /// Destination register.
        reg: Reg,
    },
    /// Push the return address and jump to `reg`.
    Call {
        /// Register holding the subroutine address.
        reg: Reg,
    },
    /// Pop the return address into the PC.
    Ret,
    /// Jump to `reg`.
    Jmp {
        /// Register holding the target.
        reg: Reg,
    },
    /// Jump to `reg` if the equal flag is set.
    Jeq {
        /// Register holding the target.
        reg: Reg,
    },
    /// Jump to `reg` if the equal flag is clear.
    Jne {
        /// Register holding the target.
        reg: Reg,
    },
}

impl Instruction {
    /// Opcode byte this instruction encodes to.
    pub const fn opcode(self) -> u8 {
        match self {
            Self::Ldi { .. } => opcodes::LDI,
            Self::Prn { .. } => opcodes::PRN,
            Self::Hlt => opcodes::HLT,
            Self::Add { .. } => opcodes::ADD,
            Self::Sub { .. } => opcodes::SUB,
            Self::Mul { .. } => opcodes::MUL,
            Self::Cmp { .. } => opcodes::CMP,
            Self::Push { .. } => opcodes::PUSH,
            Self::Pop { .. } => opcodes::POP,
            Self::Call { .. } => opcodes::CALL,
            Self::Ret => opcodes::RET,
            Self::Jmp { .. } => opcodes::JMP,
            Self::Jeq { .. } => opcodes::JEQ,
            Self::Jne { .. } => opcodes::JNE,
        }
    }

    /// Encoded length in bytes, taken from the opcode header.
    pub fn size(self) -> usize {
        self.opcode().encoded_len()
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Ldi { .. } => "LDI",
            Self::Prn { .. } => "PRN",
            Self::Hlt => "HLT",
            Self::Add { .. } => "ADD",
            Self::Sub { .. } => "SUB",
            Self::Mul { .. } => "MUL",
            Self::Cmp { .. } => "CMP",
            Self::Push { .. } => "PUSH",
            Self::Pop { .. } => "POP",
            Self::Call { .. } => "CALL",
            Self::Ret => "RET",
            Self::Jmp { .. } => "JMP",
            Self::Jeq { .. } => "JEQ",
            Self::Jne { .. } => "JNE",
        }
    }

    /// Category used for instruction-mix statistics.
    ///
    /// ALU and PC-setting instructions are recognised from their header bits.
    pub fn class(self) -> InstructionClass {
        let opcode = self.opcode();
        if opcode.is_alu() {
            return InstructionClass::Alu;
        }
        if opcode.sets_pc() {
            return InstructionClass::Flow;
        }
        match self {
            Self::Push { .. } | Self::Pop { .. } => InstructionClass::Stack,
            Self::Hlt => InstructionClass::System,
            _ => InstructionClass::Data,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = self.mnemonic();
        match *self {
            Self::Ldi { reg, value } => write!(f, "{mnemonic} {reg}, {value}"),
            Self::Add { a, b } | Self::Sub { a, b } | Self::Mul { a, b } | Self::Cmp { a, b } => {
                write!(f, "{mnemonic} {a}, {b}")
            }
            Self::Prn { reg }
            | Self::Push { reg }
            | Self::Pop { reg }
            | Self::Call { reg }
            | Self::Jmp { reg }
            | Self::Jeq { reg }
            | Self::Jne { reg } => write!(f, "{mnemonic} {reg}"),
            Self::Hlt | Self::Ret => f.write_str(mnemonic),
        }
    }
}
