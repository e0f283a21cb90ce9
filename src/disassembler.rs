//! 6502 Disassembler Module
//!
//! Converts machine code sitting on a memory bus into human-readable assembly.
//! Only [`MemoryBus::peek`] is used, so disassembling never disturbs devices.

pub mod decoder;
pub mod formatter;

use std::collections::BTreeMap;

use crate::addressing::AddressingMode;
use crate::MemoryBus;

pub use decoder::decode;
pub use formatter::{format_instruction, format_line};

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "???")
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,
}

/// Disassembles every instruction starting in `start..=stop`.
///
/// Returns one formatted line per instruction keyed by its start address, so a
/// front end can look up the line for the current PC and walk neighbours in
/// address order. An instruction starting at or before `stop` is included even
/// if its operand bytes extend past it.
///
/// # Examples
///
/// ```
/// use cpu6502::{disassemble, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load_hex(0x8000, "A2 0A 8E 00 00 D0 FA").unwrap();
///
/// let lines = disassemble(&memory, 0x8000, 0x8006);
/// assert_eq!(lines[&0x8000], "$8000: LDX #$0A {IMM}");
/// assert_eq!(lines[&0x8002], "$8002: STX $0000 {ABS}");
/// assert_eq!(lines[&0x8005], "$8005: BNE $FA [$8001] {REL}");
/// ```
pub fn disassemble<M: MemoryBus>(memory: &M, start: u16, stop: u16) -> BTreeMap<u16, String> {
    let mut lines = BTreeMap::new();
    let mut address = start as u32;

    while address <= stop as u32 {
        let instr = decode(memory, address as u16);
        address += instr.size_bytes as u32;
        lines.insert(instr.address, format_line(&instr));
    }

    lines
}
