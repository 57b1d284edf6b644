use crate::emulator::errors::CpuError;

/// Number of byte cells in the LS-8 address space.
pub const RAM_SIZE: usize = 256;

/// Flat random-access memory, 256 byte cells addressable by an 8-bit index.
///
/// Both instructions and the stack live here. Accesses are bounds-checked;
/// an out-of-range address is a reported [`CpuError::AddressOutOfRange`],
/// never a silent wrap.
#[derive(Debug)]
pub struct Ram {
    cells: [u8; RAM_SIZE],
}

impl Ram {
    /// Creates zeroed memory.
    pub fn new() -> Self {
        Self {
            cells: [0; RAM_SIZE],
        }
    }

    /// Returns the byte stored at `address`.
    pub fn read(&self, address: usize) -> Result<u8, CpuError> {
        self.cells
            .get(address)
            .copied()
            .ok_or(CpuError::AddressOutOfRange { address })
    }

    /// Stores `value` at `address`.
    pub fn write(&mut self, address: usize, value: u8) -> Result<(), CpuError> {
        let cell = self
            .cells
            .get_mut(address)
            .ok_or(CpuError::AddressOutOfRange { address })?;
        *cell = value;
        Ok(())
    }

    /// Copies a program into memory starting at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<(), CpuError> {
        if program.len() > RAM_SIZE {
            return Err(CpuError::ProgramTooLarge {
                size: program.len(),
                limit: RAM_SIZE,
            });
        }
        self.cells[..program.len()].copy_from_slice(program);
        Ok(())
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}
