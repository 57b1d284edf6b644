//! Arithmetic-logic unit.
//!
//! Performs register-to-register arithmetic by operation name, mutating the
//! first register in place. All register values are 8-bit unsigned integers
//! with wraparound on overflow; DIV is integer division and traps on a
//! zero-valued divisor.

use crate::emulator::errors::CpuError;
use crate::emulator::isa::Instruction;
use crate::emulator::registers::Registers;

/// Arithmetic operation supported by the ALU.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl AluOp {
    /// Returns the mnemonic for this operation.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Sub => "SUB",
            AluOp::Mul => "MUL",
            AluOp::Div => "DIV",
        }
    }

    /// Applies `register[reg_a] = register[reg_a] <op> register[reg_b]`.
    ///
    /// Returns [`CpuError::DivisionByZero`] for DIV when `register[reg_b]`
    /// is zero; the caller fills in the faulting address.
    pub fn apply(self, registers: &mut Registers, reg_a: u8, reg_b: u8) -> Result<(), CpuError> {
        let a = registers.get(reg_a)?;
        let b = registers.get(reg_b)?;

        let result = match self {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Mul => a.wrapping_mul(b),
            AluOp::Div => {
                if b == 0 {
                    return Err(CpuError::DivisionByZero { pc: 0 });
                }
                a / b
            }
        };

        registers.set(reg_a, result)
    }
}

impl TryFrom<Instruction> for AluOp {
    type Error = CpuError;

    fn try_from(instruction: Instruction) -> Result<Self, Self::Error> {
        match instruction {
            Instruction::Add => Ok(AluOp::Add),
            Instruction::Mul => Ok(AluOp::Mul),
            other => Err(CpuError::UnsupportedAluOperation {
                mnemonic: other.mnemonic(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regs_with(a: u8, b: u8) -> Registers {
        let mut regs = Registers::new();
        regs.set(0, a).unwrap();
        regs.set(1, b).unwrap();
        regs
    }

    #[test]
    fn add_wraps_at_byte_width() {
        let mut regs = regs_with(200, 100);
        AluOp::Add.apply(&mut regs, 0, 1).unwrap();
        assert_eq!(regs.get(0).unwrap(), 44);
    }

    #[test]
    fn sub_wraps_below_zero() {
        let mut regs = regs_with(3, 5);
        AluOp::Sub.apply(&mut regs, 0, 1).unwrap();
        assert_eq!(regs.get(0).unwrap(), 254);
    }

    #[test]
    fn mul_wraps_at_byte_width() {
        let mut regs = regs_with(16, 16);
        AluOp::Mul.apply(&mut regs, 0, 1).unwrap();
        assert_eq!(regs.get(0).unwrap(), 0);

        let mut regs = regs_with(8, 9);
        AluOp::Mul.apply(&mut regs, 0, 1).unwrap();
        assert_eq!(regs.get(0).unwrap(), 72);
    }

    #[test]
    fn div_is_integer_division() {
        let mut regs = regs_with(7, 2);
        AluOp::Div.apply(&mut regs, 0, 1).unwrap();
        assert_eq!(regs.get(0).unwrap(), 3);
    }

    #[test]
    fn div_by_zero_fails() {
        let mut regs = regs_with(7, 0);
        assert!(matches!(
            AluOp::Div.apply(&mut regs, 0, 1),
            Err(CpuError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn second_operand_is_untouched() {
        let mut regs = regs_with(10, 4);
        AluOp::Sub.apply(&mut regs, 0, 1).unwrap();
        assert_eq!(regs.get(1).unwrap(), 4);
    }

    #[test]
    fn invalid_register_fails() {
        let mut regs = Registers::new();
        assert!(matches!(
            AluOp::Add.apply(&mut regs, 8, 0),
            Err(CpuError::InvalidRegisterIndex { index: 8 })
        ));
    }

    #[test]
    fn mnemonics() {
        assert_eq!(AluOp::Add.mnemonic(), "ADD");
        assert_eq!(AluOp::Sub.mnemonic(), "SUB");
        assert_eq!(AluOp::Mul.mnemonic(), "MUL");
        assert_eq!(AluOp::Div.mnemonic(), "DIV");
    }

    #[test]
    fn only_arithmetic_instructions_convert() {
        assert_eq!(AluOp::try_from(Instruction::Add).unwrap(), AluOp::Add);
        assert_eq!(AluOp::try_from(Instruction::Mul).unwrap(), AluOp::Mul);
        assert!(matches!(
            AluOp::try_from(Instruction::Ldi),
            Err(CpuError::UnsupportedAluOperation { mnemonic: "LDI" })
        ));
        assert!(matches!(
            AluOp::try_from(Instruction::Ret),
            Err(CpuError::UnsupportedAluOperation { mnemonic: "RET" })
        ));
    }
}
