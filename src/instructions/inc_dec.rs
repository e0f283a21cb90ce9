//! # Increment and Decrement Instructions
//!
//! This module implements:
//! - INC / DEC: Read-modify-write on memory
//! - INX / INY / DEX / DEY: Index register arithmetic
//!
//! All wrap modulo 256 and update only Z and N. Carry and overflow are untouched.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let result = cpu.fetch(operand).wrapping_add(1);
    cpu.memory.write(operand.addr, result);
    cpu.status.set_zn(result);
    false
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let result = cpu.fetch(operand).wrapping_sub(1);
    cpu.memory.write(operand.addr, result);
    cpu.status.set_zn(result);
    false
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zn(cpu.x);
    false
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zn(cpu.y);
    false
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zn(cpu.x);
    false
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zn(cpu.y);
    false
}
