//! Main Memory.
//!
//! A flat, zero-initialised array of byte cells holding both the program
//! image and the downward-growing stack. Every access is bounds-checked and
//! an out-of-range address is a fatal [`VmError::OutOfBounds`].

use crate::common::{Result, VmError};

/// Flat byte-addressed memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: Box<[u8]>,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![0; size].into_boxed_slice(),
        }
    }

    /// Size of the memory in bytes.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the memory has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// [`VmError::OutOfBounds`] if `addr >= len()`.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8> {
        self.cells
            .get(addr)
            .copied()
            .ok_or_else(|| self.out_of_bounds(addr))
    }

    /// Writes `value` to `addr`.
    ///
    /// # Errors
    ///
    /// [`VmError::OutOfBounds`] if `addr >= len()`.
    #[inline]
    pub fn write(&mut self, addr: usize, value: u8) -> Result<()> {
        let size = self.len();
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(VmError::OutOfBounds { addr, size })?;
        *cell = value;
        Ok(())
    }

    /// Reads the byte at `addr` without raising an error.
    ///
    /// Used by diagnostics that must not fail while describing a failure.
    pub fn peek(&self, addr: usize) -> Option<u8> {
        self.cells.get(addr).copied()
    }

    /// Copies a program image into consecutive cells starting at address 0.
    ///
    /// Nothing is written when the image does not fit.
    ///
    /// # Errors
    ///
    /// [`VmError::OutOfBounds`] naming the first address past the end of memory.
    pub fn load(&mut self, image: &[u8]) -> Result<()> {
        if image.len() > self.len() {
            return Err(self.out_of_bounds(self.len()));
        }
        self.cells[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Formats `len` cells starting at `start` as a hex dump, 16 bytes per row.
    ///
    /// The window is clipped to the end of memory.
    pub fn dump(&self, start: usize, len: usize) -> String {
        let end = start.saturating_add(len).min(self.len());
        let start = start.min(end);
        self.cells[start..end]
            .chunks(16)
            .enumerate()
            .map(|(row, bytes)| {
                let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02X}")).collect();
                format!("{:02X}: {}", start + row * 16, hex.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn out_of_bounds(&self, addr: usize) -> VmError {
        VmError::OutOfBounds {
            addr,
            size: self.len(),
        }
    }
}
