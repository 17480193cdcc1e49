//! Run a program with an instruction trace.
//!
//! Trace lines stream to stderr as instructions are fetched, so they
//! interleave with PRN output on a shared terminal.

use std::io::{self, Write};
use std::path::PathBuf;

use ls8_vm::{Halt, Machine, PrintTracer};

use super::run_common::{self, CommandError};

pub struct TraceArgs {
    pub program_path: PathBuf,
    pub fuel: Option<u32>,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let program = run_common::load_program(&args.program_path)
        .unwrap_or_else(|e| run_common::exit_with(e));
    let mut machine = run_common::build_machine(&program, args.fuel);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = trace_to(&mut machine, &mut out, io::stderr().lock(), args.color);
    run_common::conclude(result);
}

/// Run `machine`, writing PRN output to `out` and trace lines to `trace`.
pub fn trace_to<O: Write, T: Write>(
    machine: &mut Machine,
    out: &mut O,
    trace: T,
    colored: bool,
) -> Result<Halt, CommandError> {
    let mut tracer = PrintTracer::builder().colored(colored).build_with(trace);
    let result = machine.run_with(out, &mut tracer);
    let flushed = out.flush().and(tracer.finish().map(drop));
    run_common::settle(result, flushed)
}
