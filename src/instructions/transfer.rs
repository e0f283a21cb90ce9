//! # Register Transfer Instructions
//!
//! This module implements register-to-register copies:
//! - TAX, TAY, TXA, TYA: Z and N follow the copied value
//! - TSX: X = SP, Z and N follow
//! - TXS: SP = X, no flags affected

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.x = cpu.a;
    cpu.status.set_zn(cpu.x);
    false
}

pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.y = cpu.a;
    cpu.status.set_zn(cpu.y);
    false
}

pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.a = cpu.x;
    cpu.status.set_zn(cpu.a);
    false
}

pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.a = cpu.y;
    cpu.status.set_zn(cpu.a);
    false
}

pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.x = cpu.sp;
    cpu.status.set_zn(cpu.x);
    false
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The only transfer that leaves the flags alone.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.sp = cpu.x;
    false
}
