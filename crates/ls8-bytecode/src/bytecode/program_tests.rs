//! Tests for program images and the textual loader.

use std::io::Write as _;

use indoc::indoc;

use super::instruction::Instruction;
use super::program::{MEMORY_SIZE, Program, ProgramError};

const PRINT8: &str = indoc! {"
    # print8.ls8: Print the number 8 on the screen

    10000010 # LDI R0,8
    00000000
    00001000
    01000111 # PRN R0
    00000000
    00000001 # HLT
"};

#[test]
fn parse_skips_comments_and_blank_lines() {
    let program = Program::parse(PRINT8).unwrap();
    assert_eq!(
        program.as_bytes(),
        [0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]
    );
}

#[test]
fn parse_accepts_short_binary_literals() {
    let program = Program::parse("1\n  11  \n0").unwrap();
    assert_eq!(program.as_bytes(), [1, 3, 0]);
}

#[test]
fn parse_rejects_non_binary_tokens() {
    let err = Program::parse("00000001\n\n10000020 # bad\n").unwrap_err();
    match err {
        ProgramError::InvalidByte { line, token } => {
            assert_eq!(line, 3);
            assert_eq!(token, "10000020");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_rejects_wide_literals() {
    let err = Program::parse("100000000").unwrap_err();
    assert!(matches!(err, ProgramError::InvalidByte { line: 1, .. }));
}

#[test]
fn parse_rejects_oversized_programs() {
    let text = "00000000\n".repeat(MEMORY_SIZE + 1);
    let err = Program::parse(&text).unwrap_err();
    assert!(matches!(err, ProgramError::TooLarge(257)));
    assert_eq!(err.to_string(), "program is 257 bytes, memory holds 256");
}

#[test]
fn parse_fills_memory_exactly() {
    let text = "00000000\n".repeat(MEMORY_SIZE);
    assert_eq!(Program::parse(&text).unwrap().len(), MEMORY_SIZE);
}

#[test]
fn from_bytes_checks_size() {
    assert!(Program::from_bytes(vec![0; MEMORY_SIZE]).is_ok());
    assert!(matches!(
        Program::from_bytes(vec![0; MEMORY_SIZE + 3]),
        Err(ProgramError::TooLarge(259))
    ));
}

#[test]
fn assemble_concatenates_encodings() {
    let program = Program::assemble(&[
        Instruction::Ldi { reg: 0, value: 5 },
        Instruction::Prn(0),
        Instruction::Hlt,
    ])
    .unwrap();

    assert_eq!(program.as_bytes(), [0b1000_0010, 0, 5, 0b0100_0111, 0, 1]);
    assert!(!program.is_empty());
}

#[test]
fn from_file_reads_and_parses() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PRINT8.as_bytes()).unwrap();

    let program = Program::from_file(file.path()).unwrap();
    assert_eq!(program.len(), 6);
}

#[test]
fn from_file_reports_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = Program::from_file(dir.path().join("missing.ls8")).unwrap_err();
    assert!(matches!(err, ProgramError::Io(_)));
}
