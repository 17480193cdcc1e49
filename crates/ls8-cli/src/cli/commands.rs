//! Command builders for the CLI.
//!
//! run/trace/dump accept each other's flags, with the irrelevant ones hidden
//! from `--help`, so switching subcommands never needs the flags edited.

use clap::Command;

use super::args::*;

/// Add hidden execution args (for commands that don't execute).
fn with_hidden_exec_args(cmd: Command) -> Command {
    cmd.arg(fuel_arg().hide(true))
}

/// Add hidden report args (for commands that don't produce JSON).
fn with_hidden_report_args(cmd: Command) -> Command {
    cmd.arg(json_arg().hide(true)).arg(compact_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("ls8")
        .about("Emulator for the LS-8 8-bit computer")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(run_command())
        .subcommand(trace_command())
        .subcommand(dump_command())
}

/// Run a program.
pub fn run_command() -> Command {
    let cmd = Command::new("run")
        .about("Run a program, printing PRN output")
        .override_usage("  ls8 run <PROGRAM> [--fuel <N>] [--json]")
        .after_help(
            r#"EXAMPLES:
  ls8 run print8.ls8                 # PRN output on stdout
  ls8 run mult.ls8 --fuel 1000       # stop runaway loops
  ls8 run call.ls8 --json            # JSON report
  cat stack.ls8 | ls8 run -          # read from stdin"#,
        )
        .arg(program_path_arg())
        .arg(fuel_arg())
        .arg(json_arg())
        .arg(compact_arg());

    // Hidden unified flags
    cmd.arg(color_arg().hide(true))
}

/// Run a program with a per-instruction trace on stderr.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Run a program, tracing every instruction to stderr")
        .override_usage("  ls8 trace <PROGRAM> [--fuel <N>]")
        .after_help(
            r#"EXAMPLES:
  ls8 trace print8.ls8               # trace on stderr, output on stdout
  ls8 trace mult.ls8 2>trace.txt     # keep the trace
  ls8 trace loop.ls8 --fuel 200      # stop after 200 instructions"#,
        )
        .arg(program_path_arg())
        .arg(trace_fuel_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_report_args(cmd)
}

/// Disassemble a program.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Disassemble a program")
        .override_usage("  ls8 dump <PROGRAM>")
        .after_help(
            r#"EXAMPLES:
  ls8 dump call.ls8                  # address, bytes, instruction"#,
        )
        .arg(program_path_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_report_args(with_hidden_exec_args(cmd))
}
