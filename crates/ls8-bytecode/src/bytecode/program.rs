//! Program images and the textual loader.
//!
//! The textual format is one byte per line written in binary, with `#`
//! starting a comment:
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```
//!
//! Blank and comment-only lines are skipped and do not take an address.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::instruction::Instruction;

/// Size of the machine's address space in bytes.
pub const MEMORY_SIZE: usize = 256;

/// Errors from building or loading a program image.
#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("program is {0} bytes, memory holds {MEMORY_SIZE}")]
    TooLarge(usize),
    #[error("line {line}: invalid byte `{token}`, expected up to 8 binary digits")]
    InvalidByte { line: usize, token: String },
    #[error("failed to read program: {0}")]
    Io(#[from] std::io::Error),
}

/// A program image to be copied into memory starting at address 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    bytes: Vec<u8>,
}

impl Program {
    /// Wrap a raw image.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, ProgramError> {
        let bytes = bytes.into();
        if bytes.len() > MEMORY_SIZE {
            return Err(ProgramError::TooLarge(bytes.len()));
        }
        Ok(Self { bytes })
    }

    /// Encode a sequence of instructions into an image.
    pub fn assemble(instructions: &[Instruction]) -> Result<Self, ProgramError> {
        let mut bytes = Vec::new();
        for instr in instructions {
            instr.encode_into(&mut bytes);
        }
        Self::from_bytes(bytes)
    }

    /// Parse the textual binary format.
    pub fn parse(text: &str) -> Result<Self, ProgramError> {
        let mut bytes = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let code = line.split('#').next().unwrap_or_default().trim();
            if code.is_empty() {
                continue;
            }
            bytes.push(parse_binary_byte(code).ok_or_else(|| ProgramError::InvalidByte {
                line: idx + 1,
                token: code.to_owned(),
            })?);
        }
        Self::from_bytes(bytes)
    }

    /// Read and parse a program file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProgramError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn parse_binary_byte(token: &str) -> Option<u8> {
    if token.len() > 8 || !token.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(token, 2).ok()
}
