use std::io::{self, Write};

use ls8_bytecode::{Instruction, Program};
use ls8_vm::{Halt, Machine, RuntimeError};

use super::report::{OutputRecorder, RunReport, StopReason};

fn report_for(program: &Program) -> RunReport {
    let mut machine = Machine::with_program(program);
    let mut recorder = OutputRecorder::default();
    let result = machine.run_with(&mut io::sink(), &mut recorder);
    RunReport::new(&machine, &result, recorder.into_values())
}

#[test]
fn halted_report() {
    let program = Program::assemble(&[
        Instruction::Ldi { reg: 0, value: 8 },
        Instruction::Prn(0),
        Instruction::Hlt,
    ])
    .unwrap();

    let report = report_for(&program);
    assert_eq!(report.stop, StopReason::Halted);
    insta::assert_snapshot!(report.to_json(false).unwrap(), @r#"{"output":[8],"stop":{"reason":"halted"},"steps":3,"pc":6,"registers":[8,0,0,0,0,0,0,244],"flags":0}"#);
}

#[test]
fn unknown_instruction_report() {
    let program = Program::from_bytes(vec![0xFF]).unwrap();

    let report = report_for(&program);
    insta::assert_snapshot!(report.to_json(false).unwrap(), @r#"{"output":[],"stop":{"reason":"unknown_instruction","opcode":255,"pc":0},"steps":1,"pc":0,"registers":[0,0,0,0,0,0,0,244],"flags":0}"#);
}

#[test]
fn fault_report_keeps_output_so_far() {
    let program = Program::assemble(&[
        Instruction::Ldi { reg: 0, value: 3 },
        Instruction::Cmp(0, 0),
        Instruction::Prn(0),
        Instruction::Ldi { reg: 9, value: 1 },
    ])
    .unwrap();

    let report = report_for(&program);
    assert_eq!(report.output, vec![3]);
    assert_eq!(report.flags, 0b0000_0001);
    assert_eq!(
        report.stop,
        StopReason::Fault {
            message: "register R9 out of range".to_owned()
        }
    );
}

#[test]
fn pretty_report_is_multiline() {
    let program = Program::assemble(&[Instruction::Hlt]).unwrap();
    let json = report_for(&program).to_json(true).unwrap();
    assert!(json.starts_with("{\n  \"output\": []"));
}

#[test]
fn recorder_keeps_every_printed_value() {
    let program = Program::assemble(&[
        Instruction::Ldi { reg: 0, value: 0 },
        Instruction::Ldi { reg: 1, value: 255 },
        Instruction::Prn(0),
        Instruction::Prn(1),
        Instruction::Prn(0),
        Instruction::Hlt,
    ])
    .unwrap();

    assert_eq!(report_for(&program).output, vec![0, 255, 0]);
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn recorder_skips_value_that_failed_to_print() {
    let program = Program::assemble(&[
        Instruction::Ldi { reg: 0, value: 42 },
        Instruction::Prn(0),
        Instruction::Hlt,
    ])
    .unwrap();

    let mut machine = Machine::with_program(&program);
    let mut recorder = OutputRecorder::default();
    let result = machine.run_with(&mut FailingWriter, &mut recorder);

    assert!(matches!(result, Err(RuntimeError::Output(_))));
    assert!(recorder.into_values().is_empty());
}

#[test]
fn recorder_sees_values_from_plain_output() {
    let program = Program::assemble(&[
        Instruction::Ldi { reg: 3, value: 9 },
        Instruction::Prn(3),
        Instruction::Hlt,
    ])
    .unwrap();

    let mut machine = Machine::with_program(&program);
    let mut recorder = OutputRecorder::default();
    let mut text = Vec::new();
    assert_eq!(machine.run_with(&mut text, &mut recorder).unwrap(), Halt::Halted);

    assert_eq!(text, b"9\n");
    assert_eq!(recorder.into_values(), vec![9]);
}
