//! Shared logic for run, trace and dump commands.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use ls8_bytecode::{Program, ProgramError};
use ls8_vm::{FuelLimits, Halt, Machine, RuntimeError};
use thiserror::Error;
use tracing::debug;

/// Exit code for unreadable or malformed programs and usage errors.
pub const EXIT_LOAD: i32 = 1;
/// Exit code for a machine fault.
pub const EXIT_FAULT: i32 = 2;
/// Exit code for a program that stopped on an unknown instruction.
pub const EXIT_UNKNOWN_INSTRUCTION: i32 = 3;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("'{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ProgramError,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Runtime(_) | CommandError::Output(_) => EXIT_FAULT,
            CommandError::Load { .. } | CommandError::Stdin(_) | CommandError::Json(_) => {
                EXIT_LOAD
            }
        }
    }
}

/// Print the error and exit with its code.
pub fn exit_with(err: CommandError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(err.exit_code())
}

/// Load a program from a file, or from stdin when the path is `-`.
pub fn load_program(path: &Path) -> Result<Program, CommandError> {
    let program = if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(CommandError::Stdin)?;
        Program::parse(&text)
    } else {
        Program::from_file(path)
    }
    .map_err(|source| CommandError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = program.len(), "program loaded");
    Ok(program)
}

/// Build a machine with the program loaded and the optional fuel limit.
pub fn build_machine(program: &Program, fuel: Option<u32>) -> Machine {
    let limits = match fuel {
        Some(fuel) => FuelLimits::new().exec_fuel(fuel),
        None => FuelLimits::new(),
    };
    Machine::builder().program(program).limits(limits).build()
}

/// Exit code for a run that stopped without faulting.
pub fn halt_exit_code(halt: Halt) -> i32 {
    match halt {
        Halt::Halted => 0,
        Halt::UnknownInstruction { .. } => EXIT_UNKNOWN_INSTRUCTION,
    }
}

/// Human-readable note for a halt that isn't a clean HLT.
pub fn halt_message(halt: Halt) -> Option<String> {
    match halt {
        Halt::Halted => None,
        Halt::UnknownInstruction { opcode, pc } => Some(format!(
            "unknown instruction {:#010b} ({:#04X}) at address {:02X}",
            opcode, opcode, pc
        )),
    }
}

/// Combine a run result with the final flush of its output.
///
/// A fault is reported ahead of a flush failure.
pub fn settle(
    result: Result<Halt, RuntimeError>,
    flushed: io::Result<()>,
) -> Result<Halt, CommandError> {
    let halt = result?;
    flushed.map_err(CommandError::Output)?;
    Ok(halt)
}

/// Report a finished run and exit with the matching code.
pub fn finish(result: Result<Halt, RuntimeError>, flushed: io::Result<()>) {
    conclude(settle(result, flushed));
}

/// Report a settled run and exit with the matching code.
pub fn conclude(outcome: Result<Halt, CommandError>) {
    match outcome {
        Ok(halt) => {
            if let Some(msg) = halt_message(halt) {
                eprintln!("error: {}", msg);
            }
            let code = halt_exit_code(halt);
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => exit_with(e),
    }
}
