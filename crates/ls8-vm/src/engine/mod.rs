//! Runtime engine for executing LS-8 programs.
//!
//! The machine fetches the opcode at PC, decodes its fixed-arity operands,
//! and executes the instruction against memory, registers and flags until
//! it halts or faults.

mod alu;
mod error;
mod flags;
mod machine;
mod memory;
mod registers;
mod trace;

#[cfg(test)]
mod flags_tests;

pub use alu::{AluOp, AluOutcome};
pub use error::RuntimeError;
pub use flags::Flags;
pub use machine::{FuelLimits, Halt, Machine, MachineBuilder};
pub use memory::Memory;
pub use registers::{RegisterFile, SP};
pub use trace::{NoopTracer, PrintTracer, PrintTracerBuilder, Tracer};
