//! # Shift and Rotate Instructions
//!
//! This module implements:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each operates on the accumulator in Accumulator mode and read-modify-writes
//! memory otherwise. C receives the bit shifted out; Z and N follow the result.

use crate::addressing::Operand;
use crate::status::Flag;
use crate::{MemoryBus, CPU};

fn write_back<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand, result: u8) {
    if operand.targets_accumulator() {
        cpu.a = result;
    } else {
        cpu.memory.write(operand.addr, result);
    }
    cpu.status.set_zn(result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    cpu.status.set(Flag::Carry, value & 0x80 != 0);
    write_back(cpu, operand, value << 1);
    false
}

/// Executes the LSR (Logical Shift Right) instruction. N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    cpu.status.set(Flag::Carry, value & 0x01 != 0);
    write_back(cpu, operand, value >> 1);
    false
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0 and bit 7 leaves into carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    let carry_in = cpu.status.get(Flag::Carry) as u8;
    cpu.status.set(Flag::Carry, value & 0x80 != 0);
    write_back(cpu, operand, (value << 1) | carry_in);
    false
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7 and bit 0 leaves into carry.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, Flag, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.set_reset_vector(0x8000);
/// memory.write(0x8000, 0x6A); // ROR A
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x01);
/// cpu.set_flag(Flag::Carry, true);
/// cpu.step();
///
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.flag(Flag::Carry));
/// assert!(cpu.flag(Flag::Negative));
/// ```
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    let carry_in = (cpu.status.get(Flag::Carry) as u8) << 7;
    cpu.status.set(Flag::Carry, value & 0x01 != 0);
    write_back(cpu, operand, (value >> 1) | carry_in);
    false
}
