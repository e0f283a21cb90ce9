//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Clear / Set Carry Flag
//! - CLI / SEI: Clear / Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD / SED: Clear / Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! Only the named flag changes.

use crate::addressing::Operand;
use crate::status::Flag;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.status.set(Flag::Carry, false);
    false
}

pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.status.set(Flag::Carry, true);
    false
}

pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.status.set(Flag::InterruptDisable, false);
    false
}

pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.status.set(Flag::InterruptDisable, true);
    false
}

pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.status.set(Flag::Overflow, false);
    false
}

/// Executes the CLD (Clear Decimal Mode) instruction.
///
/// The flag is stored but has no effect on ADC/SBC.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.status.set(Flag::Decimal, false);
    false
}

pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.status.set(Flag::Decimal, true);
    false
}
