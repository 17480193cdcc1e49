//! Human-readable disassembly for debugging.
//!
//! One line per instruction: address, raw bytes, then the decoded form.
//! Bytes that do not decode (unknown opcodes, instructions cut off by the
//! end of the image) are listed one at a time as `.byte` directives.

use std::fmt::Write as _;

use crate::colors::Colors;

use super::instruction::Instruction;
use super::program::Program;

/// Width of the raw-bytes column: three bytes as `XX XX XX`.
const BYTES_WIDTH: usize = 8;

/// Generate a disassembly listing of the program image.
pub fn dump(program: &Program, colors: Colors) -> String {
    let c = &colors;
    let bytes = program.as_bytes();
    let mut out = String::new();

    let mut addr = 0;
    while addr < bytes.len() {
        let (len, text) = match Instruction::decode(&bytes[addr..]) {
            Ok(instr) => (instr.size(), format_instruction(&instr, colors)),
            Err(_) => (
                1,
                format!("{}.byte{} {}{:#04X}{}", c.dim, c.reset, c.green, bytes[addr], c.reset),
            ),
        };

        let raw = bytes[addr..addr + len]
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            out,
            "{}{:02X}  {:<BYTES_WIDTH$}{}  {}",
            c.dim, addr, raw, c.reset, text
        )
        .unwrap();

        addr += len;
    }

    out
}

/// Format a single instruction: mnemonic, registers as `R<n>`, immediates in decimal.
pub fn format_instruction(instr: &Instruction, colors: Colors) -> String {
    let c = &colors;
    let mnemonic = format!("{}{}{}", c.blue, instr.opcode().mnemonic(), c.reset);

    match *instr {
        Instruction::Nop | Instruction::Hlt | Instruction::Ret => mnemonic,
        Instruction::Push(r)
        | Instruction::Pop(r)
        | Instruction::Prn(r)
        | Instruction::Call(r)
        | Instruction::Jmp(r)
        | Instruction::Jeq(r)
        | Instruction::Jne(r) => format!("{mnemonic} R{r}"),
        Instruction::Ldi { reg, value } => {
            format!("{mnemonic} R{reg}, {}{value}{}", c.green, c.reset)
        }
        Instruction::Add(a, b) | Instruction::Mul(a, b) | Instruction::Cmp(a, b) => {
            format!("{mnemonic} R{a}, R{b}")
        }
    }
}
