//! Decoded instructions.
//!
//! Register operands are raw bytes; range checking against the register
//! file happens at execution time.

use thiserror::Error;

use super::opcode::Opcode;

/// Errors from decoding a byte slice into an instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no bytes to decode")]
    Empty,
    #[error("unknown opcode {0:#04x}")]
    UnknownOpcode(u8),
    #[error("{opcode} needs {needed} bytes, only {available} available")]
    Truncated {
        opcode: Opcode,
        needed: usize,
        available: usize,
    },
}

/// A single instruction with its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Nop,
    Hlt,
    Ret,
    Push(u8),
    Pop(u8),
    Prn(u8),
    Call(u8),
    Jmp(u8),
    Jeq(u8),
    Jne(u8),
    Ldi { reg: u8, value: u8 },
    Add(u8, u8),
    Mul(u8, u8),
    Cmp(u8, u8),
}

impl Instruction {
    /// Build an instruction from its opcode and operand bytes.
    ///
    /// Operands beyond the opcode's arity are ignored.
    pub fn from_parts(opcode: Opcode, operands: [u8; 2]) -> Self {
        let [a, b] = operands;
        match opcode {
            Opcode::Nop => Self::Nop,
            Opcode::Hlt => Self::Hlt,
            Opcode::Ret => Self::Ret,
            Opcode::Push => Self::Push(a),
            Opcode::Pop => Self::Pop(a),
            Opcode::Prn => Self::Prn(a),
            Opcode::Call => Self::Call(a),
            Opcode::Jmp => Self::Jmp(a),
            Opcode::Jeq => Self::Jeq(a),
            Opcode::Jne => Self::Jne(a),
            Opcode::Ldi => Self::Ldi { reg: a, value: b },
            Opcode::Add => Self::Add(a, b),
            Opcode::Mul => Self::Mul(a, b),
            Opcode::Cmp => Self::Cmp(a, b),
        }
    }

    /// Decode the instruction at the start of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let &first = bytes.first().ok_or(DecodeError::Empty)?;
        let opcode = Opcode::from_byte(first).ok_or(DecodeError::UnknownOpcode(first))?;
        if bytes.len() < opcode.size() {
            return Err(DecodeError::Truncated {
                opcode,
                needed: opcode.size(),
                available: bytes.len(),
            });
        }

        let mut operands = [0u8; 2];
        operands[..opcode.operand_count()].copy_from_slice(&bytes[1..opcode.size()]);
        Ok(Self::from_parts(opcode, operands))
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            Self::Nop => Opcode::Nop,
            Self::Hlt => Opcode::Hlt,
            Self::Ret => Opcode::Ret,
            Self::Push(_) => Opcode::Push,
            Self::Pop(_) => Opcode::Pop,
            Self::Prn(_) => Opcode::Prn,
            Self::Call(_) => Opcode::Call,
            Self::Jmp(_) => Opcode::Jmp,
            Self::Jeq(_) => Opcode::Jeq,
            Self::Jne(_) => Opcode::Jne,
            Self::Ldi { .. } => Opcode::Ldi,
            Self::Add(..) => Opcode::Add,
            Self::Mul(..) => Opcode::Mul,
            Self::Cmp(..) => Opcode::Cmp,
        }
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        self.opcode().size()
    }

    /// Append the encoded instruction to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(self.opcode().to_byte());
        match *self {
            Self::Nop | Self::Hlt | Self::Ret => {}
            Self::Push(r)
            | Self::Pop(r)
            | Self::Prn(r)
            | Self::Call(r)
            | Self::Jmp(r)
            | Self::Jeq(r)
            | Self::Jne(r) => out.push(r),
            Self::Ldi { reg, value } => out.extend([reg, value]),
            Self::Add(a, b) | Self::Mul(a, b) | Self::Cmp(a, b) => out.extend([a, b]),
        }
    }
}
