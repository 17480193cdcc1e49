//! Tests for instruction decoding and encoding.

use super::instruction::{DecodeError, Instruction};
use super::opcode::Opcode;

fn encode(instr: Instruction) -> Vec<u8> {
    let mut out = Vec::new();
    instr.encode_into(&mut out);
    out
}

#[test]
fn decode_ldi() {
    let instr = Instruction::decode(&[0b1000_0010, 0, 8]).unwrap();
    assert_eq!(instr, Instruction::Ldi { reg: 0, value: 8 });
    assert_eq!(instr.size(), 3);
}

#[test]
fn decode_ignores_trailing_bytes() {
    let instr = Instruction::decode(&[0b0100_0111, 3, 0xFF, 0xFF]).unwrap();
    assert_eq!(instr, Instruction::Prn(3));
}

#[test]
fn decode_unknown_opcode() {
    assert_eq!(
        Instruction::decode(&[0xFF]),
        Err(DecodeError::UnknownOpcode(0xFF))
    );
}

#[test]
fn decode_truncated() {
    let err = Instruction::decode(&[0b1010_0000, 1]).unwrap_err();
    assert_eq!(
        err,
        DecodeError::Truncated {
            opcode: Opcode::Add,
            needed: 3,
            available: 2,
        }
    );
    assert_eq!(err.to_string(), "ADD needs 3 bytes, only 2 available");
}

#[test]
fn decode_empty() {
    assert_eq!(Instruction::decode(&[]), Err(DecodeError::Empty));
}

#[test]
fn from_parts_respects_arity() {
    assert_eq!(
        Instruction::from_parts(Opcode::Hlt, [7, 7]),
        Instruction::Hlt
    );
    assert_eq!(
        Instruction::from_parts(Opcode::Jmp, [2, 7]),
        Instruction::Jmp(2)
    );
    assert_eq!(
        Instruction::from_parts(Opcode::Mul, [1, 2]),
        Instruction::Mul(1, 2)
    );
}

#[test]
fn encode_matches_catalog() {
    assert_eq!(encode(Instruction::Hlt), [0b0000_0001]);
    assert_eq!(encode(Instruction::Push(1)), [0b0100_0101, 1]);
    assert_eq!(
        encode(Instruction::Cmp(0, 1)),
        [0b1010_0111, 0, 1]
    );
    assert_eq!(
        encode(Instruction::Ldi { reg: 2, value: 200 }),
        [0b1000_0010, 2, 200]
    );
}

#[test]
fn encode_then_decode_every_opcode() {
    for op in (0..=u8::MAX).filter_map(Opcode::from_byte) {
        let instr = Instruction::from_parts(op, [3, 4]);
        let bytes = encode(instr);
        assert_eq!(bytes.len(), op.size());
        assert_eq!(Instruction::decode(&bytes), Ok(instr));
    }
}

#[test]
fn encode_appends() {
    let mut out = vec![0xAA];
    Instruction::Prn(2).encode_into(&mut out);
    Instruction::Hlt.encode_into(&mut out);
    assert_eq!(out, [0xAA, 0b0100_0111, 2, 0b0000_0001]);
}
