//! Execution tracing.
//!
//! The `Tracer` trait is invoked by the machine after every fetch and after
//! each PRN. Tracers only observe; they never change machine state.
//!
//! `NoopTracer` is a zero-sized type whose methods are empty and inlined,
//! so `Machine::run` pays nothing for the hook. `PrintTracer` writes one
//! line per instruction in the classic LS-8 trace layout:
//!
//! ```text
//! TRACE: PC | B0 B1 B2 | R0 R1 R2 R3 R4 R5 R6 R7
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use ls8_bytecode::Colors;

use super::error::RuntimeError;
use super::machine::{Halt, Machine};

/// Memory bytes shown per trace line, starting at PC.
const WINDOW: usize = 3;

/// Observer for machine execution.
pub trait Tracer {
    /// Called after the opcode at PC is fetched, before it executes.
    fn trace_fetch(&mut self, machine: &Machine);

    /// Called after PRN writes `value`.
    fn trace_output(&mut self, _value: u8) {}

    /// Called when the machine stops.
    fn trace_halt(&mut self, _halt: Halt) {}

    /// Called when a fatal error aborts the run.
    fn trace_fault(&mut self, _error: &RuntimeError) {}
}

/// Tracer that does nothing.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_fetch(&mut self, _machine: &Machine) {}

    #[inline(always)]
    fn trace_output(&mut self, _value: u8) {}

    #[inline(always)]
    fn trace_halt(&mut self, _halt: Halt) {}

    #[inline(always)]
    fn trace_fault(&mut self, _error: &RuntimeError) {}
}

/// Builder for `PrintTracer`.
#[derive(Default)]
pub struct PrintTracerBuilder {
    colored: bool,
}

impl PrintTracerBuilder {
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Build a tracer that writes each line to `out` as it happens.
    pub fn build_with<W: Write>(self, out: W) -> PrintTracer<W> {
        PrintTracer {
            out,
            colors: Colors::new(self.colored),
            error: None,
        }
    }
}

/// Tracer that writes a human-readable line per event.
///
/// Lines are written immediately, so trace output interleaves with the
/// program's own output. The first write error stops further tracing and
/// is returned by [`PrintTracer::finish`].
pub struct PrintTracer<W = io::Stderr> {
    out: W,
    colors: Colors,
    error: Option<io::Error>,
}

impl PrintTracer {
    pub fn builder() -> PrintTracerBuilder {
        PrintTracerBuilder::default()
    }
}

impl<W: Write> PrintTracer<W> {
    /// Flush the writer and report the first write error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}") {
            self.error = Some(e);
        }
    }
}

impl<W: Write> Tracer for PrintTracer<W> {
    fn trace_fetch(&mut self, machine: &Machine) {
        let c = &self.colors;
        let pc = machine.pc();
        let mut line = format!(
            "{}TRACE:{} {}{:02X}{} {}|{}",
            c.dim, c.reset, c.blue, pc, c.reset, c.dim, c.reset
        );

        let window = machine.memory().window(pc, WINDOW);
        for i in 0..WINDOW {
            match window.get(i) {
                Some(byte) => write!(line, " {byte:02X}").unwrap(),
                None => line.push_str(" --"),
            }
        }

        write!(line, " {}|{}", c.dim, c.reset).unwrap();
        for value in machine.registers().as_array() {
            write!(line, " {value:02X}").unwrap();
        }
        self.emit(&line);
    }

    fn trace_halt(&mut self, halt: Halt) {
        let c = &self.colors;
        let line = match halt {
            Halt::Halted => format!("{}HALT{}", c.blue, c.reset),
            Halt::UnknownInstruction { opcode, pc } => format!(
                "{}UNKNOWN{} instruction {:#04X} at address {:02X}",
                c.blue, c.reset, opcode, pc
            ),
        };
        self.emit(&line);
    }

    fn trace_fault(&mut self, error: &RuntimeError) {
        let c = &self.colors;
        let line = format!("{}FAULT{} {}", c.blue, c.reset, error);
        self.emit(&line);
    }
}
