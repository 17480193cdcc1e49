//! Opcode catalog.
//!
//! Byte layout:
//! - Bits 7-6: Operand count (0, 1 or 2)
//! - Bit 5: ALU operation
//! - Bit 4: Sets the program counter
//! - Bits 3-0: Instruction identifier

/// Instruction opcode.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Opcode {
    /// No operation.
    Nop = 0b0000_0000,
    /// Stop the machine.
    Hlt = 0b0000_0001,
    /// Pop the return address into PC.
    Ret = 0b0001_0001,
    /// Push a register onto the stack.
    Push = 0b0100_0101,
    /// Pop the top of the stack into a register.
    Pop = 0b0100_0110,
    /// Print a register as a decimal line.
    Prn = 0b0100_0111,
    /// Push the return address and jump to the address in a register.
    Call = 0b0101_0000,
    Jmp = 0b0101_0100,
    Jeq = 0b0101_0101,
    Jne = 0b0101_0110,
    /// Load an immediate into a register.
    Ldi = 0b1000_0010,
    Add = 0b1010_0000,
    Mul = 0b1010_0010,
    Cmp = 0b1010_0111,
}

impl Opcode {
    /// Decode from bytecode byte. Returns `None` for bytes outside the catalog.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0b0000_0000 => Some(Self::Nop),
            0b0000_0001 => Some(Self::Hlt),
            0b0001_0001 => Some(Self::Ret),
            0b0100_0101 => Some(Self::Push),
            0b0100_0110 => Some(Self::Pop),
            0b0100_0111 => Some(Self::Prn),
            0b0101_0000 => Some(Self::Call),
            0b0101_0100 => Some(Self::Jmp),
            0b0101_0101 => Some(Self::Jeq),
            0b0101_0110 => Some(Self::Jne),
            0b1000_0010 => Some(Self::Ldi),
            0b1010_0000 => Some(Self::Add),
            0b1010_0010 => Some(Self::Mul),
            0b1010_0111 => Some(Self::Cmp),
            _ => None,
        }
    }

    /// Encode to bytecode byte.
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes following the opcode.
    pub fn operand_count(self) -> usize {
        (self.to_byte() >> 6) as usize
    }

    /// Encoded size in bytes (opcode plus operands).
    pub fn size(self) -> usize {
        1 + self.operand_count()
    }

    /// Assembly mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Hlt => "HLT",
            Self::Ret => "RET",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Prn => "PRN",
            Self::Call => "CALL",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Ldi => "LDI",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Cmp => "CMP",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
