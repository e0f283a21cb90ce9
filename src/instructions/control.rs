//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from interrupt
//! - NOP, and the placeholder executed for illegal opcodes
//!
//! Return addresses are pushed high byte first, so they read little-endian
//! from the stack pointer upward.

use crate::addressing::Operand;
use crate::cpu::IRQ_VECTOR;
use crate::status::Flag;
use crate::{MemoryBus, CPU};

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Skipping the padding byte after the opcode (the pushed address is BRK + 2)
/// 2. Setting the I (interrupt disable) flag
/// 3. Pushing PC, high byte first
/// 4. Pushing the status register with B and the unused bit set, then clearing B
/// 5. Loading PC from the IRQ vector at $FFFE/$FFFF
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.pc = cpu.pc.wrapping_add(1);

    cpu.status.set(Flag::InterruptDisable, true);
    cpu.push_word(cpu.pc);

    cpu.status.set(Flag::Break, true);
    cpu.push(cpu.status.pushed(true));
    cpu.status.set(Flag::Break, false);

    cpu.pc = cpu.read_word(IRQ_VECTOR);
    false
}

/// Executes the JMP (Jump) instruction.
///
/// The Indirect form's page-wrap defect is handled during address resolution.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    cpu.pc = operand.addr;
    false
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the JSR's last byte (PC - 1), not the next instruction.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.set_reset_vector(0x8000);
/// memory.load(0x8000, &[0x20, 0x00, 0x90]).unwrap(); // JSR $9000
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.step(), 6);
///
/// assert_eq!(cpu.pc(), 0x9000);
/// assert_eq!(cpu.memory().peek(0x01FD), 0x80);
/// assert_eq!(cpu.memory().peek(0x01FC), 0x02);
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) -> bool {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = operand.addr;
    false
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    cpu.pc = cpu.pull_word().wrapping_add(1);
    false
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status (B cleared, unused bit set) and then PC. Unlike RTS, the
/// pulled PC is used as-is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    let status = cpu.pull();
    cpu.set_status(status);
    cpu.status.set(Flag::Break, false);
    cpu.status.set(Flag::Unused, true);

    cpu.pc = cpu.pull_word();
    false
}

pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    false
}

/// Undocumented opcodes execute as a no-op for their table cycle count.
pub(crate) fn execute_illegal<M: MemoryBus>(cpu: &mut CPU<M>, _operand: &Operand) -> bool {
    log::trace!(
        "illegal opcode ${:02X} at ${:04X} treated as NOP",
        cpu.opcode,
        cpu.pc.wrapping_sub(1)
    );
    false
}
