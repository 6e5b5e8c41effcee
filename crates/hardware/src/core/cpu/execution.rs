//! Instruction Execution.
//!
//! This module applies decoded instructions to the CPU state. It performs the
//! following:
//! 1. **Dispatch:** Routes each instruction shape to its handler.
//! 2. **All-or-Nothing Mutation:** Every handler computes its result, including any
//!    fault, before writing a register, the PC, or memory.
//! 3. **Observability:** Emits `tracing` events per instruction and per fault.
//!
//! The PC is left alone by everything except a taken `JMP`.

use tracing::{debug, trace};

use super::Cpu;
use crate::common::{ExecError, Reg};
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::instruction::{AluOp, Instruction, Operand, ShiftDir, Width, set, setu};
use crate::soc::Memory;

/// Decodes and executes one word against `cpu` and `memory`.
///
/// # Errors
///
/// Propagates any decode or execution fault; state is unchanged on error.
///
/// # Examples
///
/// ```
/// use sim32_core::core::{Cpu, execute};
/// use sim32_core::common::Reg;
/// use sim32_core::soc::Memory;
///
/// let mut cpu = Cpu::new();
/// let mut memory = Memory::new();
///
/// execute((5 << 8) | 0x3, &mut cpu, &mut memory).unwrap();          // set r0, #5
/// execute((3 << 14) | (1 << 13) | 0x5, &mut cpu, &mut memory).unwrap(); // add r0, r0, #3
/// assert_eq!(cpu.regs.read(Reg::R0), 8);
/// ```
pub fn execute(word: u32, cpu: &mut Cpu, memory: &mut Memory) -> Result<(), ExecError> {
    cpu.execute(word, memory)
}

impl Cpu {
    /// Decodes and executes one instruction word.
    ///
    /// # Errors
    ///
    /// Returns the decode fault or the execution fault; state is unchanged on error.
    pub fn execute(&mut self, word: u32, memory: &mut Memory) -> Result<(), ExecError> {
        let inst = decode(word).inspect_err(|e| {
            debug!(pc = self.pc, word = format_args!("{word:#010x}"), "decode fault: {e}");
        })?;
        self.apply(&inst, memory)
    }

    /// Executes an already decoded instruction.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::DivisionByZero`] or [`ExecError::MemoryOutOfBounds`];
    /// state is unchanged on error.
    pub fn apply(&mut self, inst: &Instruction, memory: &mut Memory) -> Result<(), ExecError> {
        trace!(pc = self.pc, "{inst}");

        let result = match *inst {
            Instruction::Jmp {
                base,
                offset,
                condition,
            } => {
                self.exec_jmp(base, offset, condition);
                Ok(())
            }
            Instruction::Ld {
                width,
                dst,
                base,
                offset,
            } => self.exec_ld(memory, width, dst, base, offset),
            Instruction::Put {
                width,
                src,
                base,
                offset,
            } => self.exec_put(memory, width, src, base, offset),
            Instruction::Set { dst, imm, negative } => {
                self.exec_set(dst, imm, negative);
                Ok(())
            }
            Instruction::Setu { dst, imm } => {
                self.exec_setu(dst, imm);
                Ok(())
            }
            Instruction::Alu { op, dst, src1, rhs } => self.exec_alu(op, dst, src1, rhs),
            Instruction::Shift {
                dir,
                dst,
                src,
                amount,
                rotate,
            } => {
                self.exec_shift(dir, dst, src, amount, rotate);
                Ok(())
            }
        };

        match &result {
            Err(e) => debug!(pc = self.pc, "execution fault in `{inst}`: {e}"),
            Ok(()) if self.trace => debug!(pc = self.pc, regs = %self.regs, "retired `{inst}`"),
            Ok(()) => {}
        }
        result
    }

    /// `JMP`: skipped when the condition register is zero.
    const fn exec_jmp(&mut self, base: Reg, offset: Operand, condition: Option<Reg>) {
        if let Some(c) = condition
            && self.regs.read(c) == 0
        {
            return;
        }
        self.pc = self.regs.read(base).wrapping_add(self.operand(offset));
    }

    fn exec_ld(
        &mut self,
        memory: &Memory,
        width: Width,
        dst: Reg,
        base: Reg,
        offset: Operand,
    ) -> Result<(), ExecError> {
        let addr = self.effective_address(base, offset);
        let value = memory.read_be(addr, width)?;
        self.regs.write(dst, value);
        Ok(())
    }

    fn exec_put(
        &self,
        memory: &mut Memory,
        width: Width,
        src: Reg,
        base: Reg,
        offset: Operand,
    ) -> Result<(), ExecError> {
        let addr = self.effective_address(base, offset);
        memory.write_be(addr, width, self.regs.read(src))
    }

    /// `SET`: the low 24 bits take the immediate; the top byte is all ones or all zeros.
    const fn exec_set(&mut self, dst: Reg, imm: u32, negative: bool) {
        let fill = if negative { set::SIGN_FILL } else { 0 };
        self.regs.write(dst, fill | (imm & set::IMM.max()));
    }

    /// `SETU`: bits 25-31 take the immediate, bits 1-24 are kept, bit 32 is cleared.
    const fn exec_setu(&mut self, dst: Reg, imm: u32) {
        let keep = !(setu::TARGET.mask() | setu::CLEARED.mask());
        let old = self.regs.read(dst);
        self.regs.write(dst, (old & keep) | setu::TARGET.place(imm));
    }

    fn exec_alu(&mut self, op: AluOp, dst: Reg, src1: Reg, rhs: Operand) -> Result<(), ExecError> {
        let value = Alu::execute(op, self.regs.read(src1), self.operand(rhs))?;
        self.regs.write(dst, value);
        Ok(())
    }

    const fn exec_shift(&mut self, dir: ShiftDir, dst: Reg, src: Reg, amount: u32, rotate: bool) {
        let value = Alu::shift(dir, self.regs.read(src), amount, rotate);
        self.regs.write(dst, value);
    }
}
