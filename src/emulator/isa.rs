//! Instruction Set Architecture (ISA) definitions.
//!
//! Defines the LS-8 instruction set. The
//! [`for_each_instruction!`](crate::for_each_instruction) macro holds the
//! canonical instruction definitions and invokes a callback macro for code
//! generation, so multiple modules can generate instruction-related code
//! without duplicating definitions.
//!
//! This module generates:
//! - The [`Instruction`] enum with opcode mappings
//! - `TryFrom<u8>` for decoding opcodes
//!
//! # Opcode Format
//!
//! Every opcode encodes its own metadata in fixed bit positions:
//!
//! ```text
//! AABCDDDD
//! ||||
//! |||+---- DDDD: instruction identifier
//! ||+----- C: 1 if the handler sets the PC itself (no auto-advance)
//! |+------ B: 1 if this is an ALU operation
//! +------- AA: number of operand bytes (0, 1, or 2)
//! ```
//!
//! [`Instruction::operand_count`] and [`Instruction::sets_pc`] derive their
//! answers from these bit fields, never from a side table that could
//! disagree. Adding an instruction therefore means choosing an opcode whose
//! bit pattern matches its true operand count and control-transfer behavior.

use crate::emulator::errors::CpuError;

/// Invokes a callback macro with the complete instruction definition list.
///
/// This macro enables code generation for instructions in multiple modules
/// without duplicating the instruction definitions.
#[macro_export]
macro_rules! for_each_instruction {
    ($callback:ident) => {
        $callback! {
            /// LDI reg, value ; register[reg] = value
            Ldi = 0b1000_0010, "LDI",
            /// PRN reg ; print register[reg] in decimal
            Prn = 0b0100_0111, "PRN",
            /// HLT ; stop the processor
            Hlt = 0b0000_0001, "HLT",
            /// MUL regA, regB ; register[regA] *= register[regB] (via ALU)
            Mul = 0b1010_0010, "MUL",
            /// ADD regA, regB ; register[regA] += register[regB] (via ALU)
            Add = 0b1010_0000, "ADD",
            /// PUSH reg ; decrement SP, memory[SP] = register[reg]
            Push = 0b0100_0101, "PUSH",
            /// POP reg ; register[reg] = memory[SP], increment SP
            Pop = 0b0100_0110, "POP",
            /// CALL reg ; push the return address, PC = register[reg]
            Call = 0b0101_0000, "CALL",
            /// RET ; pop the return address into PC
            Ret = 0b0001_0001, "RET",
        }
    };
}

#[macro_export]
macro_rules! define_instructions {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $opcode:expr, $mnemonic:literal
        ),* $(,)?
    ) => {
        // =========================
        // CPU instruction enum
        // =========================
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        pub enum Instruction {
            $(
                $(#[$doc])*
                $name = $opcode,
            )*
        }

        impl TryFrom<u8> for Instruction {
            type Error = CpuError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $( $opcode => Ok(Instruction::$name), )*
                    _ => Err(CpuError::UnknownOpcode {
                        opcode: value,
                        pc: 0,
                    }),
                }
            }
        }

        impl Instruction {
            /// Every instruction in the set, in definition order.
            pub const ALL: &'static [Instruction] = &[
                $( Instruction::$name, )*
            ];

            /// Returns the assembly mnemonic for this instruction.
            pub const fn mnemonic(&self) -> &'static str {
                match self {
                    $( Instruction::$name => $mnemonic, )*
                }
            }
        }
    };
}

for_each_instruction!(define_instructions);

impl Instruction {
    /// Number of operand bytes that follow the opcode (bits 6-7).
    pub const fn operand_count(self) -> u8 {
        (self as u8) >> 6
    }

    /// Whether the handler assigns the program counter itself (bit 4),
    /// suppressing the execution loop's auto-advance.
    pub const fn sets_pc(self) -> bool {
        (self as u8) >> 4 & 1 == 1
    }

    /// Whether this instruction is handled by the ALU (bit 5).
    ///
    /// Informational: the dispatcher matches the arithmetic instructions
    /// directly; this accessor exposes the encoded bit so decode checks can
    /// verify an opcode agrees with its dispatch.
    pub const fn is_alu(self) -> bool {
        (self as u8) >> 5 & 1 == 1
    }

    /// Total encoded size in bytes, opcode included.
    pub const fn size(self) -> usize {
        self.operand_count() as usize + 1
    }
}
