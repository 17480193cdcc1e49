//! Arithmetic-logic unit.

use super::flags::Flags;

/// Operations the ALU supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Mul,
    Cmp,
}

/// Result of an ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOutcome {
    /// Store into the first operand register.
    Write(u8),
    /// Replace the flags register; registers are untouched.
    Flags(Flags),
}

impl AluOp {
    /// Apply to the values of the two operand registers.
    ///
    /// Arithmetic wraps modulo 256, matching the register width.
    pub fn apply(self, a: u8, b: u8) -> AluOutcome {
        match self {
            Self::Add => AluOutcome::Write(a.wrapping_add(b)),
            Self::Mul => AluOutcome::Write(a.wrapping_mul(b)),
            Self::Cmp => AluOutcome::Flags(Flags::compare(a, b)),
        }
    }
}
