//! Flat byte-addressed memory.

use ls8_bytecode::{MEMORY_SIZE, Program};

use super::error::RuntimeError;

/// Fixed 256-byte memory, zero-initialized.
///
/// The stack shares this address space, growing down from the initial SP.
#[derive(Clone)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Read the byte at `address`.
    #[inline]
    pub fn read(&self, address: usize) -> Result<u8, RuntimeError> {
        self.cells
            .get(address)
            .copied()
            .ok_or(RuntimeError::AddressOutOfRange(address))
    }

    /// Write `value` at `address`.
    #[inline]
    pub fn write(&mut self, address: usize, value: u8) -> Result<(), RuntimeError> {
        let cell = self
            .cells
            .get_mut(address)
            .ok_or(RuntimeError::AddressOutOfRange(address))?;
        *cell = value;
        Ok(())
    }

    /// Copy a program image into memory starting at address 0.
    pub fn load(&mut self, program: &Program) {
        // Program images never exceed MEMORY_SIZE.
        let bytes = program.as_bytes();
        self.cells[..bytes.len()].copy_from_slice(bytes);
    }

    /// Up to `len` bytes starting at `address`, clipped to the end of memory.
    pub fn window(&self, address: usize, len: usize) -> &[u8] {
        let start = address.min(MEMORY_SIZE);
        let end = address.saturating_add(len).min(MEMORY_SIZE);
        &self.cells[start..end]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        f.debug_struct("Memory")
            .field("used", &&self.cells[..used])
            .finish()
    }
}
