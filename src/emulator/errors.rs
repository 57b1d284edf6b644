use ls8_derive::Error;

/// Errors that can occur while loading or executing an LS-8 program.
///
/// Every variant is a program-correctness error, not a transient condition:
/// the policy is detect, report with enough context to locate the faulting
/// instruction, and terminate.
#[derive(Debug, Error)]
pub enum CpuError {
    /// Fetched byte has no entry in the instruction set.
    #[error("unknown opcode {opcode:#04x} at address {pc:#04x}")]
    UnknownOpcode { opcode: u8, pc: usize },
    /// ALU invoked for an instruction that is not an arithmetic operation.
    #[error("unsupported ALU operation: {mnemonic}")]
    UnsupportedAluOperation { mnemonic: &'static str },
    /// DIV with a zero-valued divisor register.
    #[error("division by zero at address {pc:#04x}")]
    DivisionByZero { pc: usize },
    /// Memory access outside the 256-byte address space.
    #[error("memory address {address:#x} out of range")]
    AddressOutOfRange { address: usize },
    /// Register operand outside the eight-register file.
    #[error("register index {index} out of bounds")]
    InvalidRegisterIndex { index: u8 },
    /// Loaded program does not fit in memory.
    #[error("program is {size} bytes but memory holds {limit}")]
    ProgramTooLarge { size: usize, limit: usize },
    /// File read or output write failure.
    #[error("io error: {0}")]
    Io(String),
}
