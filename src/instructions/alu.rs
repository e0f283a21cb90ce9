//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Register comparisons
//! - BIT: Bit test
//!
//! Decimal mode is not emulated: ADC and SBC are always binary.

use crate::addressing::Operand;
use crate::status::Flag;
use crate::{MemoryBus, CPU};

/// Binary add of `value` and carry into the accumulator, shared by ADC and SBC.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a as u16;
    let value = value as u16;
    let carry_in = cpu.status.get(Flag::Carry) as u16;

    let sum = a + value + carry_in;
    let result = sum as u8;

    cpu.status.set(Flag::Carry, sum > 0xFF);
    cpu.status.set_zn(result);
    // Both inputs share a sign and the result does not.
    cpu.status
        .set(Flag::Overflow, (!(a ^ value) & (a ^ sum) & 0x0080) != 0);

    cpu.a = result;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C. Flags affected: C, Z, V, N.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, Flag, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.set_reset_vector(0x8000);
/// memory.load(0x8000, &[0x69, 0x50]).unwrap(); // ADC #$50
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x50);
/// cpu.step();
///
/// assert_eq!(cpu.a(), 0xA0);
/// assert!(cpu.flag(Flag::Overflow));
/// assert!(cpu.flag(Flag::Negative));
/// assert!(!cpu.flag(Flag::Carry));
/// ```
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    add_with_carry(cpu, value);
    true
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C), computed as ADC of the operand's one's complement.
/// Flags affected: C (clear on borrow), Z, V, N.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    add_with_carry(cpu, value ^ 0xFF);
    true
}

/// Executes the AND (Logical AND) instruction. Flags affected: Z, N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    cpu.a &= value;
    cpu.status.set_zn(cpu.a);
    true
}

/// Executes the ORA (Logical Inclusive OR) instruction. Flags affected: Z, N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    cpu.a |= value;
    cpu.status.set_zn(cpu.a);
    true
}

/// Executes the EOR (Exclusive OR) instruction. Flags affected: Z, N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    cpu.a ^= value;
    cpu.status.set_zn(cpu.a);
    true
}

fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.status.set(Flag::Carry, register >= value);
    cpu.status.set_zn(register.wrapping_sub(value));
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// C = A >= M (unsigned), Z = A == M, N = bit 7 of A - M.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    let register = cpu.a;
    compare(cpu, register, value);
    true
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    let register = cpu.x;
    compare(cpu, register, value);
    false
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    let register = cpu.y;
    compare(cpu, register, value);
    false
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M; N and V are copied from bits 7 and 6 of M.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let value = cpu.fetch(operand);
    cpu.status.set(Flag::Zero, cpu.a & value == 0);
    cpu.status.set(Flag::Overflow, value & 0x40 != 0);
    cpu.status.set(Flag::Negative, value & 0x80 != 0);
    false
}
