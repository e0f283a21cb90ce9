//! Instruction decoder for the 6502 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::OPCODE_TABLE;
use crate::MemoryBus;

/// Decodes the instruction starting at `address`.
///
/// Every opcode decodes (illegal ones as one-byte `???`). Operand bytes past
/// 0xFFFF wrap to the bottom of memory, as the CPU would fetch them.
pub fn decode<M: MemoryBus>(memory: &M, address: u16) -> Instruction {
    let opcode = memory.peek(address);
    let metadata = &OPCODE_TABLE[opcode as usize];

    let operand_bytes = (1..metadata.size_bytes as u16)
        .map(|offset| memory.peek(address.wrapping_add(offset)))
        .collect();

    Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes,
        base_cycles: metadata.base_cycles,
    }
}
