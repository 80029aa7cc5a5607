//! LS-8 Instruction Decoder.
//!
//! Turns the opcode byte at an address, plus however many operand bytes its
//! header announces, into a typed [`Instruction`]. Register operands are
//! validated here, so every `Reg` that reaches execution is in range.

use crate::common::{Result, VmError};
use crate::isa::abi::Reg;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::opcodes;
use crate::memory::Memory;

/// Fetches and decodes the instruction at `pc`.
///
/// The opcode is checked against the instruction table before any operand
/// byte is read, so an unknown opcode is reported as such even at the very
/// end of memory.
///
/// # Errors
///
/// * [`VmError::OutOfBounds`] if the opcode or an operand lies outside memory.
/// * [`VmError::UnknownInstruction`] if the opcode is not implemented.
/// * [`VmError::InvalidRegister`] if a register operand is not `R0`-`R7`.
pub fn decode(memory: &Memory, pc: usize) -> Result<Instruction> {
    let opcode = memory.read(pc)?;
    if !opcodes::ALL.contains(&opcode) {
        return Err(VmError::UnknownInstruction { opcode, addr: pc });
    }

    let mut operands = [0u8; 2];
    for (offset, slot) in operands
        .iter_mut()
        .take(opcode.operand_count())
        .enumerate()
    {
        *slot = memory.read(pc + 1 + offset)?;
    }

    decode_parts(opcode, operands, pc)
}

/// Decodes an opcode and its raw operand bytes.
///
/// Operand bytes the opcode does not use are ignored. `addr` is only used to
/// annotate errors.
///
/// # Errors
///
/// [`VmError::UnknownInstruction`] or [`VmError::InvalidRegister`].
pub fn decode_parts(opcode: u8, operands: [u8; 2], addr: usize) -> Result<Instruction> {
    let [a, b] = operands;
    let reg = |raw: u8| Reg::new(raw).ok_or(VmError::InvalidRegister { index: raw, addr });

    let inst = match opcode {
        opcodes::LDI => Instruction::Ldi {
            reg: reg(a)?,
            value: b,
        },
        opcodes::PRN => Instruction::Prn { reg: reg(a)? },
        opcodes::HLT => Instruction::Hlt,
        opcodes::ADD => Instruction::Add {
            a: reg(a)?,
            b: reg(b)?,
        },
        opcodes::SUB => Instruction::Sub {
            a: reg(a)?,
            b: reg(b)?,
        },
        opcodes::MUL => Instruction::Mul {
            a: reg(a)?,
            b: reg(b)?,
        },
        opcodes::CMP => Instruction::Cmp {
            a: reg(a)?,
            b: reg(b)?,
        },
        opcodes::PUSH => Instruction::Push { reg: reg(a)? },
        opcodes::POP => Instruction::Pop { reg: reg(a)? },
        opcodes::CALL => Instruction::Call { reg: reg(a)? },
        opcodes::RET => Instruction::Ret,
        opcodes::JMP => Instruction::Jmp { reg: reg(a)? },
        opcodes::JEQ => Instruction::Jeq { reg: reg(a)? },
        opcodes::JNE => Instruction::Jne { reg: reg(a)? },
        _ => return Err(VmError::UnknownInstruction { opcode, addr }),
    };

    Ok(inst)
}
