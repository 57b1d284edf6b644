//! LS-8 microcomputer emulator.
//!
//! An 8-bit virtual machine with 256 bytes of memory, eight general-purpose
//! registers, and a downward-growing stack at the top of memory. Programs
//! are loaded from text files of binary literals and executed by a
//! fetch-decode-execute loop until `HLT`.
//!
//! # Architecture
//!
//! - **Memory**: 256 byte cells holding both instructions and the stack
//! - **Registers**: eight byte-sized registers; `R7` is the stack pointer
//! - **Instruction format**: one opcode byte plus 0-2 operand bytes, with
//!   operand count and PC-control derived from the opcode's bit fields
//! - **Execution model**: register arithmetic, stack push/pop, call/return
//!
//! # Modules
//!
//! - [`alu`]: Register-to-register arithmetic operations
//! - [`cpu`]: Core CPU implementation and execution loop
//! - [`errors`]: Load and execution error types
//! - [`isa`]: Instruction set definition and opcode mappings
//! - [`loader`]: Line-based `.ls8` program file loader
//! - [`memory`]: Bounds-checked flat memory
//! - [`registers`]: Register file and stack pointer conventions

pub mod alu;
pub mod cpu;
pub mod errors;
pub mod isa;
#[cfg(test)]
mod isa_static_check;
pub mod loader;
pub mod memory;
pub mod registers;
