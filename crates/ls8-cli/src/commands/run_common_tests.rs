use std::io::{self, Write};
use std::path::Path;

use indoc::indoc;
use ls8_vm::{Halt, RuntimeError};

use super::run_common::{
    CommandError, EXIT_FAULT, EXIT_LOAD, EXIT_UNKNOWN_INSTRUCTION, build_machine, halt_exit_code,
    halt_message, load_program, settle,
};

const PRINT8: &str = indoc! {"
    # print8.ls8
    10000010 # LDI R0,8
    00000000
    00001000
    01000111 # PRN R0
    00000000
    00000001 # HLT
"};

#[test]
fn load_program_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PRINT8.as_bytes()).unwrap();

    let program = load_program(file.path()).unwrap();
    assert_eq!(program.as_bytes(), &[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
}

#[test]
fn load_missing_file_names_path() {
    let err = load_program(Path::new("/nonexistent/prog.ls8")).unwrap_err();
    assert!(matches!(err, CommandError::Load { .. }));
    assert_eq!(err.exit_code(), EXIT_LOAD);
    assert!(err.to_string().starts_with("'/nonexistent/prog.ls8': "));
}

#[test]
fn load_malformed_program_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"10000010\n2\n").unwrap();

    let err = load_program(file.path()).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_LOAD);
}

#[test]
fn runtime_errors_exit_with_fault_code() {
    let err = CommandError::from(RuntimeError::InvalidRegister(9));
    assert_eq!(err.exit_code(), EXIT_FAULT);
    assert_eq!(err.to_string(), "runtime error: register R9 out of range");
}

#[test]
fn machine_respects_fuel() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PRINT8.as_bytes()).unwrap();
    let program = load_program(file.path()).unwrap();

    let mut limited = build_machine(&program, Some(1));
    assert!(matches!(
        limited.run(&mut std::io::sink()),
        Err(RuntimeError::ExecFuelExhausted(1))
    ));

    let mut unlimited = build_machine(&program, None);
    let mut out = Vec::new();
    assert_eq!(unlimited.run(&mut out).unwrap(), Halt::Halted);
    assert_eq!(out, b"8\n");
}

#[test]
fn halt_codes_and_messages() {
    assert_eq!(halt_exit_code(Halt::Halted), 0);
    assert_eq!(halt_message(Halt::Halted), None);

    let unknown = Halt::UnknownInstruction { opcode: 0b0000_0010, pc: 0x1A };
    assert_eq!(halt_exit_code(unknown), EXIT_UNKNOWN_INSTRUCTION);
    assert_eq!(
        halt_message(unknown).unwrap(),
        "unknown instruction 0b00000010 (0x02) at address 1A"
    );
}

#[test]
fn flush_failure_is_reported() {
    let broken = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
    let err = settle(Ok(Halt::Halted), Err(broken)).unwrap_err();

    assert!(matches!(err, CommandError::Output(_)));
    assert_eq!(err.exit_code(), EXIT_FAULT);
    assert_eq!(err.to_string(), "failed to write output: closed");
}

#[test]
fn fault_takes_precedence_over_flush_failure() {
    let broken = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
    let err = settle(Err(RuntimeError::InvalidRegister(9)), Err(broken)).unwrap_err();
    assert!(matches!(err, CommandError::Runtime(RuntimeError::InvalidRegister(9))));
}

#[test]
fn clean_flush_keeps_halt() {
    let unknown = Halt::UnknownInstruction { opcode: 0xFF, pc: 0 };
    assert_eq!(settle(Ok(unknown), Ok(())).unwrap(), unknown);
}
