//! Execution engine for LS-8 programs.
//!
//! This crate provides the machine that runs an LS-8 program image:
//! memory, register file, ALU, and the fetch-decode-execute loop.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    AluOp, AluOutcome, Flags, FuelLimits, Halt, Machine, MachineBuilder, Memory,
    NoopTracer, PrintTracer, PrintTracerBuilder, RegisterFile, RuntimeError, SP, Tracer,
};
