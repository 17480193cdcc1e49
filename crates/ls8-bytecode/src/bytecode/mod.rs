//! LS-8 bytecode format.
//!
//! Every instruction is one opcode byte followed by zero, one or two
//! operand bytes. The operand count is fixed per opcode and encoded in
//! the opcode's two high bits.

mod dump;
mod instruction;
mod opcode;
mod program;

#[cfg(test)]
mod instruction_tests;
#[cfg(test)]
mod program_tests;

pub use dump::{dump, format_instruction};
pub use instruction::{DecodeError, Instruction};
pub use opcode::Opcode;
pub use program::{MEMORY_SIZE, Program, ProgramError};
