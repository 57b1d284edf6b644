use crate::emulator::errors::CpuError;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Index of the register reserved as the stack pointer.
pub const SP: u8 = 7;

/// Stack pointer value at startup: empty stack at the top of memory.
pub const STACK_TOP: u8 = 0xF4;

/// Register file holding eight byte-sized registers.
///
/// Register 7 is reserved as the stack pointer and initialized to
/// [`STACK_TOP`]; the stack grows downward from there. Register operands
/// come from untrusted program bytes, so `get`/`set` are bounds-checked.
#[derive(Debug)]
pub struct Registers {
    regs: [u8; REGISTER_COUNT],
}

impl Registers {
    /// Creates a register file with all registers zeroed except the stack
    /// pointer.
    pub fn new() -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP as usize] = STACK_TOP;
        Self { regs }
    }

    /// Returns the value in register `index`.
    ///
    /// Returns [`CpuError::InvalidRegisterIndex`] if `index` is out of bounds.
    pub fn get(&self, index: u8) -> Result<u8, CpuError> {
        self.regs
            .get(index as usize)
            .copied()
            .ok_or(CpuError::InvalidRegisterIndex { index })
    }

    /// Stores `value` into register `index`.
    ///
    /// Returns [`CpuError::InvalidRegisterIndex`] if `index` is out of bounds.
    pub fn set(&mut self, index: u8, value: u8) -> Result<(), CpuError> {
        let slot = self
            .regs
            .get_mut(index as usize)
            .ok_or(CpuError::InvalidRegisterIndex { index })?;
        *slot = value;
        Ok(())
    }

    /// Returns the stack pointer (register 7).
    pub fn sp(&self) -> u8 {
        self.regs[SP as usize]
    }

    /// Sets the stack pointer (register 7).
    pub fn set_sp(&mut self, value: u8) {
        self.regs[SP as usize] = value;
    }

    /// Returns a copy of all register values, for tracing and tests.
    pub fn snapshot(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
