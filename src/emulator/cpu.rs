//! Core CPU implementation.
//!
//! The CPU runs a fetch-decode-execute cycle over [`Ram`] until a `HLT`
//! instruction clears the running flag. All arithmetic is 8-bit with
//! wrapping semantics; errors are fatal and reported with the faulting
//! address.

use crate::emulator::alu::AluOp;
use crate::emulator::errors::CpuError;
use crate::emulator::isa::Instruction;
use crate::emulator::memory::Ram;
use crate::emulator::registers::Registers;
use std::io::{self, Write};

/// The LS-8 central processing unit.
///
/// Owns memory and the register file for the whole run; the loader
/// populates memory before [`Cpu::run`] starts, and nothing is shared or
/// destroyed mid-run. `PRN` output goes to the configured writer (stdout
/// by default).
pub struct Cpu {
    ram: Ram,
    registers: Registers,
    /// Address of the next instruction byte to fetch. Only mutated by the
    /// auto-advance in [`Cpu::step`] or by a CALL/RET handler.
    pc: usize,
    running: bool,
    trace: bool,
    out: Box<dyn Write>,
}

impl Cpu {
    /// Creates a CPU that prints to stdout.
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Creates a CPU with a custom `PRN` output writer.
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Self {
            ram: Ram::new(),
            registers: Registers::new(),
            pc: 0,
            running: true,
            trace: false,
            out,
        }
    }

    /// Enables or disables per-step trace output on stderr.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// Copies a program into memory starting at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<(), CpuError> {
        self.ram.load(program)
    }

    /// Runs the fetch-decode-execute cycle until `HLT` or an error.
    pub fn run(&mut self) -> Result<(), CpuError> {
        while self.running {
            self.step()?;
        }
        Ok(())
    }

    /// Executes a single instruction.
    fn step(&mut self) -> Result<(), CpuError> {
        let opcode = self.ram.read(self.pc)?;
        let instruction = Instruction::try_from(opcode).map_err(|_| CpuError::UnknownOpcode {
            opcode,
            pc: self.pc,
        })?;

        // Operands always come from the two cells after the opcode; handlers
        // ignore the ones their instruction does not declare.
        let operand_a = self.ram.read(self.pc + 1)?;
        let operand_b = self.ram.read(self.pc + 2)?;

        if self.trace {
            self.trace_state(opcode, operand_a, operand_b);
        }

        self.exec(instruction, operand_a, operand_b)?;

        if !instruction.sets_pc() {
            self.pc += instruction.size();
        }
        Ok(())
    }

    /// Dispatches a decoded instruction to its handler.
    fn exec(
        &mut self,
        instruction: Instruction,
        operand_a: u8,
        operand_b: u8,
    ) -> Result<(), CpuError> {
        match instruction {
            Instruction::Ldi => self.registers.set(operand_a, operand_b),
            Instruction::Prn => self.op_prn(operand_a),
            Instruction::Hlt => {
                self.running = false;
                Ok(())
            }
            Instruction::Add | Instruction::Mul => self.op_alu(instruction, operand_a, operand_b),
            Instruction::Push => self.op_push(operand_a),
            Instruction::Pop => self.op_pop(operand_a),
            Instruction::Call => self.op_call(operand_a),
            Instruction::Ret => self.op_ret(),
        }
    }

    fn op_prn(&mut self, reg: u8) -> Result<(), CpuError> {
        let value = self.registers.get(reg)?;
        writeln!(self.out, "{}", value).map_err(|e| CpuError::Io(e.to_string()))
    }

    fn op_alu(
        &mut self,
        instruction: Instruction,
        reg_a: u8,
        reg_b: u8,
    ) -> Result<(), CpuError> {
        let op = AluOp::try_from(instruction)?;
        op.apply(&mut self.registers, reg_a, reg_b)
            .map_err(|e| match e {
                CpuError::DivisionByZero { .. } => CpuError::DivisionByZero { pc: self.pc },
                other => other,
            })
    }

    fn op_push(&mut self, reg: u8) -> Result<(), CpuError> {
        let value = self.registers.get(reg)?;
        let sp = self.registers.sp().wrapping_sub(1);
        self.registers.set_sp(sp);
        self.ram.write(sp as usize, value)
    }

    fn op_pop(&mut self, reg: u8) -> Result<(), CpuError> {
        let sp = self.registers.sp();
        let value = self.ram.read(sp as usize)?;
        self.registers.set(reg, value)?;
        self.registers.set_sp(sp.wrapping_add(1));
        Ok(())
    }

    fn op_call(&mut self, reg: u8) -> Result<(), CpuError> {
        let return_addr = self.pc + 2;
        let return_byte = u8::try_from(return_addr).map_err(|_| CpuError::AddressOutOfRange {
            address: return_addr,
        })?;
        let sp = self.registers.sp().wrapping_sub(1);
        self.registers.set_sp(sp);
        self.ram.write(sp as usize, return_byte)?;
        self.pc = self.registers.get(reg)? as usize;
        Ok(())
    }

    fn op_ret(&mut self) -> Result<(), CpuError> {
        let sp = self.registers.sp();
        self.pc = self.ram.read(sp as usize)? as usize;
        self.registers.set_sp(sp.wrapping_add(1));
        Ok(())
    }

    /// Prints the PC, the current instruction bytes, and all registers.
    fn trace_state(&self, opcode: u8, operand_a: u8, operand_b: u8) {
        let regs = self
            .registers
            .snapshot()
            .iter()
            .map(|v| format!(" {:02X}", v))
            .collect::<String>();
        eprintln!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |{}",
            self.pc, opcode, operand_a, operand_b, regs
        );
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
