//! # Opcode Table
//!
//! This module contains the complete 256-entry opcode table that serves as the
//! single source of truth for decoding.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Marked with "???" and executed as
//!   [`Operation::Illegal`], a no-op with a conservative cycle count
//!
//! Each entry names an operation, an addressing mode and a base cycle cost.
//! The CPU dispatches on the [`Operation`] tag with a single `match`.

use crate::addressing::AddressingMode;

/// Instruction semantics selected by an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Placeholder for every undocumented opcode.
    Illegal,
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Semantics executed for this opcode.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// True for the undocumented placeholders.
    pub fn is_illegal(&self) -> bool {
        self.operation == Operation::Illegal
    }
}

const fn op(
    mnemonic: &'static str,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operation,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
    }
}

const fn illegal(base_cycles: u8) -> OpcodeMetadata {
    op("???", Operation::Illegal, AddressingMode::Implicit, base_cycles)
}

use AddressingMode::*;
use Operation::*;

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Every byte value has exactly one entry, so decoding can never fail.
///
/// ```
/// use cpu6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert!(illegal.is_illegal());
/// ```
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op("BRK", Brk, Implicit, 7),
    op("ORA", Ora, IndirectX, 6),
    illegal(2),
    illegal(8),
    illegal(3),
    op("ORA", Ora, ZeroPage, 3),
    op("ASL", Asl, ZeroPage, 5),
    illegal(5),
    op("PHP", Php, Implicit, 3),
    op("ORA", Ora, Immediate, 2),
    op("ASL", Asl, Accumulator, 2),
    illegal(2),
    illegal(4),
    op("ORA", Ora, Absolute, 4),
    op("ASL", Asl, Absolute, 6),
    illegal(6),
    // 0x10
    op("BPL", Bpl, Relative, 2),
    op("ORA", Ora, IndirectY, 5),
    illegal(2),
    illegal(8),
    illegal(4),
    op("ORA", Ora, ZeroPageX, 4),
    op("ASL", Asl, ZeroPageX, 6),
    illegal(6),
    op("CLC", Clc, Implicit, 2),
    op("ORA", Ora, AbsoluteY, 4),
    illegal(2),
    illegal(7),
    illegal(4),
    op("ORA", Ora, AbsoluteX, 4),
    op("ASL", Asl, AbsoluteX, 7),
    illegal(7),
    // 0x20
    op("JSR", Jsr, Absolute, 6),
    op("AND", And, IndirectX, 6),
    illegal(2),
    illegal(8),
    op("BIT", Bit, ZeroPage, 3),
    op("AND", And, ZeroPage, 3),
    op("ROL", Rol, ZeroPage, 5),
    illegal(5),
    op("PLP", Plp, Implicit, 4),
    op("AND", And, Immediate, 2),
    op("ROL", Rol, Accumulator, 2),
    illegal(2),
    op("BIT", Bit, Absolute, 4),
    op("AND", And, Absolute, 4),
    op("ROL", Rol, Absolute, 6),
    illegal(6),
    // 0x30
    op("BMI", Bmi, Relative, 2),
    op("AND", And, IndirectY, 5),
    illegal(2),
    illegal(8),
    illegal(4),
    op("AND", And, ZeroPageX, 4),
    op("ROL", Rol, ZeroPageX, 6),
    illegal(6),
    op("SEC", Sec, Implicit, 2),
    op("AND", And, AbsoluteY, 4),
    illegal(2),
    illegal(7),
    illegal(4),
    op("AND", And, AbsoluteX, 4),
    op("ROL", Rol, AbsoluteX, 7),
    illegal(7),
    // 0x40
    op("RTI", Rti, Implicit, 6),
    op("EOR", Eor, IndirectX, 6),
    illegal(2),
    illegal(8),
    illegal(3),
    op("EOR", Eor, ZeroPage, 3),
    op("LSR", Lsr, ZeroPage, 5),
    illegal(5),
    op("PHA", Pha, Implicit, 3),
    op("EOR", Eor, Immediate, 2),
    op("LSR", Lsr, Accumulator, 2),
    illegal(2),
    op("JMP", Jmp, Absolute, 3),
    op("EOR", Eor, Absolute, 4),
    op("LSR", Lsr, Absolute, 6),
    illegal(6),
    // 0x50
    op("BVC", Bvc, Relative, 2),
    op("EOR", Eor, IndirectY, 5),
    illegal(2),
    illegal(8),
    illegal(4),
    op("EOR", Eor, ZeroPageX, 4),
    op("LSR", Lsr, ZeroPageX, 6),
    illegal(6),
    op("CLI", Cli, Implicit, 2),
    op("EOR", Eor, AbsoluteY, 4),
    illegal(2),
    illegal(7),
    illegal(4),
    op("EOR", Eor, AbsoluteX, 4),
    op("LSR", Lsr, AbsoluteX, 7),
    illegal(7),
    // 0x60
    op("RTS", Rts, Implicit, 6),
    op("ADC", Adc, IndirectX, 6),
    illegal(2),
    illegal(8),
    illegal(3),
    op("ADC", Adc, ZeroPage, 3),
    op("ROR", Ror, ZeroPage, 5),
    illegal(5),
    op("PLA", Pla, Implicit, 4),
    op("ADC", Adc, Immediate, 2),
    op("ROR", Ror, Accumulator, 2),
    illegal(2),
    op("JMP", Jmp, Indirect, 5),
    op("ADC", Adc, Absolute, 4),
    op("ROR", Ror, Absolute, 6),
    illegal(6),
    // 0x70
    op("BVS", Bvs, Relative, 2),
    op("ADC", Adc, IndirectY, 5),
    illegal(2),
    illegal(8),
    illegal(4),
    op("ADC", Adc, ZeroPageX, 4),
    op("ROR", Ror, ZeroPageX, 6),
    illegal(6),
    op("SEI", Sei, Implicit, 2),
    op("ADC", Adc, AbsoluteY, 4),
    illegal(2),
    illegal(7),
    illegal(4),
    op("ADC", Adc, AbsoluteX, 4),
    op("ROR", Ror, AbsoluteX, 7),
    illegal(7),
    // 0x80
    illegal(2),
    op("STA", Sta, IndirectX, 6),
    illegal(2),
    illegal(6),
    op("STY", Sty, ZeroPage, 3),
    op("STA", Sta, ZeroPage, 3),
    op("STX", Stx, ZeroPage, 3),
    illegal(3),
    op("DEY", Dey, Implicit, 2),
    illegal(2),
    op("TXA", Txa, Implicit, 2),
    illegal(2),
    op("STY", Sty, Absolute, 4),
    op("STA", Sta, Absolute, 4),
    op("STX", Stx, Absolute, 4),
    illegal(4),
    // 0x90
    op("BCC", Bcc, Relative, 2),
    op("STA", Sta, IndirectY, 6),
    illegal(2),
    illegal(6),
    op("STY", Sty, ZeroPageX, 4),
    op("STA", Sta, ZeroPageX, 4),
    op("STX", Stx, ZeroPageY, 4),
    illegal(4),
    op("TYA", Tya, Implicit, 2),
    op("STA", Sta, AbsoluteY, 5),
    op("TXS", Txs, Implicit, 2),
    illegal(5),
    illegal(5),
    op("STA", Sta, AbsoluteX, 5),
    illegal(5),
    illegal(5),
    // 0xA0
    op("LDY", Ldy, Immediate, 2),
    op("LDA", Lda, IndirectX, 6),
    op("LDX", Ldx, Immediate, 2),
    illegal(6),
    op("LDY", Ldy, ZeroPage, 3),
    op("LDA", Lda, ZeroPage, 3),
    op("LDX", Ldx, ZeroPage, 3),
    illegal(3),
    op("TAY", Tay, Implicit, 2),
    op("LDA", Lda, Immediate, 2),
    op("TAX", Tax, Implicit, 2),
    illegal(2),
    op("LDY", Ldy, Absolute, 4),
    op("LDA", Lda, Absolute, 4),
    op("LDX", Ldx, Absolute, 4),
    illegal(4),
    // 0xB0
    op("BCS", Bcs, Relative, 2),
    op("LDA", Lda, IndirectY, 5),
    illegal(2),
    illegal(5),
    op("LDY", Ldy, ZeroPageX, 4),
    op("LDA", Lda, ZeroPageX, 4),
    op("LDX", Ldx, ZeroPageY, 4),
    illegal(4),
    op("CLV", Clv, Implicit, 2),
    op("LDA", Lda, AbsoluteY, 4),
    op("TSX", Tsx, Implicit, 2),
    illegal(4),
    op("LDY", Ldy, AbsoluteX, 4),
    op("LDA", Lda, AbsoluteX, 4),
    op("LDX", Ldx, AbsoluteY, 4),
    illegal(4),
    // 0xC0
    op("CPY", Cpy, Immediate, 2),
    op("CMP", Cmp, IndirectX, 6),
    illegal(2),
    illegal(8),
    op("CPY", Cpy, ZeroPage, 3),
    op("CMP", Cmp, ZeroPage, 3),
    op("DEC", Dec, ZeroPage, 5),
    illegal(5),
    op("INY", Iny, Implicit, 2),
    op("CMP", Cmp, Immediate, 2),
    op("DEX", Dex, Implicit, 2),
    illegal(2),
    op("CPY", Cpy, Absolute, 4),
    op("CMP", Cmp, Absolute, 4),
    op("DEC", Dec, Absolute, 6),
    illegal(6),
    // 0xD0
    op("BNE", Bne, Relative, 2),
    op("CMP", Cmp, IndirectY, 5),
    illegal(2),
    illegal(8),
    illegal(4),
    op("CMP", Cmp, ZeroPageX, 4),
    op("DEC", Dec, ZeroPageX, 6),
    illegal(6),
    op("CLD", Cld, Implicit, 2),
    op("CMP", Cmp, AbsoluteY, 4),
    illegal(2),
    illegal(7),
    illegal(4),
    op("CMP", Cmp, AbsoluteX, 4),
    op("DEC", Dec, AbsoluteX, 7),
    illegal(7),
    // 0xE0
    op("CPX", Cpx, Immediate, 2),
    op("SBC", Sbc, IndirectX, 6),
    illegal(2),
    illegal(8),
    op("CPX", Cpx, ZeroPage, 3),
    op("SBC", Sbc, ZeroPage, 3),
    op("INC", Inc, ZeroPage, 5),
    illegal(5),
    op("INX", Inx, Implicit, 2),
    op("SBC", Sbc, Immediate, 2),
    op("NOP", Nop, Implicit, 2),
    illegal(2),
    op("CPX", Cpx, Absolute, 4),
    op("SBC", Sbc, Absolute, 4),
    op("INC", Inc, Absolute, 6),
    illegal(6),
    // 0xF0
    op("BEQ", Beq, Relative, 2),
    op("SBC", Sbc, IndirectY, 5),
    illegal(2),
    illegal(8),
    illegal(4),
    op("SBC", Sbc, ZeroPageX, 4),
    op("INC", Inc, ZeroPageX, 6),
    illegal(6),
    op("SED", Sed, Implicit, 2),
    op("SBC", Sbc, AbsoluteY, 4),
    illegal(2),
    illegal(7),
    illegal(4),
    op("SBC", Sbc, AbsoluteX, 4),
    op("INC", Inc, AbsoluteX, 7),
    illegal(7),
];
