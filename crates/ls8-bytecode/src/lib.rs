//! Instruction set and program images for the LS-8 machine.
//!
//! This crate contains:
//! - The instruction catalog (Opcode, Instruction)
//! - Program images and the textual loader (Program, ProgramError)
//! - Runtime helpers (Colors, disassembly dump)

pub mod bytecode;
pub mod colors;


// Re-export commonly used items at crate root
pub use bytecode::{
    DecodeError, Instruction, MEMORY_SIZE, Opcode, Program, ProgramError, dump,
    format_instruction,
};
pub use colors::Colors;
