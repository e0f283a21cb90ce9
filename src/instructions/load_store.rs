//! # Load and Store Instructions
//!
//! This module implements:
//! - LDA / LDX / LDY: Load a register from memory (Z, N affected)
//! - STA / STX / STY: Store a register to memory (no flags affected)
//!
//! Loads take the extra cycle when an indexed address crosses a page. Stores
//! never do: their table cost already includes the fix-up cycle.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.set_reset_vector(0x8000);
/// memory.load(0x8000, &[0xBD, 0xFF, 0x20]).unwrap(); // LDA $20FF,X
/// memory.write(0x2100, 0x77);
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_x(1);
///
/// assert_eq!(cpu.step(), 5); // 4 + 1 for the page crossing
/// assert_eq!(cpu.a(), 0x77);
/// ```
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    cpu.a = cpu.fetch(operand);
    cpu.status.set_zn(cpu.a);
    true
}

pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    cpu.x = cpu.fetch(operand);
    cpu.status.set_zn(cpu.x);
    true
}

pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    cpu.y = cpu.fetch(operand);
    cpu.status.set_zn(cpu.y);
    true
}

pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    cpu.memory.write(operand.addr, cpu.a);
    false
}

pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    cpu.memory.write(operand.addr, cpu.x);
    false
}

pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    cpu.memory.write(operand.addr, cpu.y);
    false
}
