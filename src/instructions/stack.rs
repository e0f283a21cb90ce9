//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA / PLA: Push / Pull Accumulator
//! - PHP / PLP: Push / Pull Processor Status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page and wraps without any overflow detection.

use crate::addressing::Operand;
use crate::status::Flag;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.push(cpu.a);
    false
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy has B and the unused bit set; both are then cleared in
/// the live register.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.push(cpu.status.pushed(true));
    cpu.status.set(Flag::Break, false);
    cpu.status.set(Flag::Unused, false);
    false
}

/// Executes the PLA (Pull Accumulator) instruction. Flags affected: Z, N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.a = cpu.pull();
    cpu.status.set_zn(cpu.a);
    false
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every bit comes from the stack except Unused, which is forced to 1.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    let status = cpu.pull();
    cpu.set_status(status);
    cpu.status.set(Flag::Unused, true);
    false
}
