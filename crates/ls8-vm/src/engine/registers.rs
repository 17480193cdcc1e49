//! General-purpose register file.

use super::error::RuntimeError;

/// Number of registers.
pub const REGISTER_COUNT: usize = 8;

/// Register reserved as the stack pointer.
pub const SP: u8 = 7;

/// Initial stack pointer: the stack grows down from here.
const SP_INIT: u8 = 0xF4;

/// Eight byte-sized registers, `R7` doubling as the stack pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    pub fn new() -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP as usize] = SP_INIT;
        Self { regs }
    }

    #[inline]
    pub fn get(&self, index: u8) -> Result<u8, RuntimeError> {
        self.regs
            .get(index as usize)
            .copied()
            .ok_or(RuntimeError::InvalidRegister(index))
    }

    #[inline]
    pub fn set(&mut self, index: u8, value: u8) -> Result<(), RuntimeError> {
        let reg = self
            .regs
            .get_mut(index as usize)
            .ok_or(RuntimeError::InvalidRegister(index))?;
        *reg = value;
        Ok(())
    }

    /// Current stack pointer (`R7`).
    #[inline]
    pub fn sp(&self) -> u8 {
        self.regs[SP as usize]
    }

    #[inline]
    pub fn set_sp(&mut self, value: u8) {
        self.regs[SP as usize] = value;
    }

    pub fn as_array(&self) -> &[u8; REGISTER_COUNT] {
        &self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
