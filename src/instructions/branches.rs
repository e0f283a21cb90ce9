//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch on Carry clear / set
//! - BNE / BEQ: Branch on Zero clear / set
//! - BPL / BMI: Branch on Negative clear / set
//! - BVC / BVS: Branch on Overflow clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! measured from the next instruction. Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::addressing::{page_crossed, Operand};
use crate::status::Flag;
use crate::{MemoryBus, CPU};

fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand, condition: bool) -> bool {
    if condition {
        cpu.cycles += 1;

        let target = cpu.pc.wrapping_add(operand.rel);
        if page_crossed(target, cpu.pc) {
            cpu.cycles += 1;
        }

        cpu.pc = target;
    }
    false
}

pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let condition = !cpu.status.get(Flag::Carry);
    branch_if(cpu, operand, condition)
}

pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let condition = cpu.status.get(Flag::Carry);
    branch_if(cpu, operand, condition)
}

pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let condition = !cpu.status.get(Flag::Zero);
    branch_if(cpu, operand, condition)
}

/// Executes the BEQ (Branch if Equal) instruction.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, Flag, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.set_reset_vector(0x8000);
/// memory.load(0x8000, &[0xF0, 0x10]).unwrap(); // BEQ +16
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_flag(Flag::Zero, true);
///
/// assert_eq!(cpu.step(), 3);
/// assert_eq!(cpu.pc(), 0x8012);
/// ```
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let condition = cpu.status.get(Flag::Zero);
    branch_if(cpu, operand, condition)
}

pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let condition = !cpu.status.get(Flag::Negative);
    branch_if(cpu, operand, condition)
}

pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let condition = cpu.status.get(Flag::Negative);
    branch_if(cpu, operand, condition)
}

pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let condition = !cpu.status.get(Flag::Overflow);
    branch_if(cpu, operand, condition)
}

pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let condition = cpu.status.get(Flag::Overflow);
    branch_if(cpu, operand, condition)
}
