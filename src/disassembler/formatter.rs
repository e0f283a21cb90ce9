//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Formats as `MNE operand {TAG}`, e.g. `LDA $20,X` renders `LDA $20, X {ZPX}`.
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);
    let tag = instr.addressing_mode.tag();

    if operand.is_empty() {
        format!("{} {{{}}}", instr.mnemonic, tag)
    } else {
        format!("{} {} {{{}}}", instr.mnemonic, operand, tag)
    }
}

/// Formats with the address prefix used by [`crate::disassemble`].
pub fn format_line(instr: &Instruction) -> String {
    format!("${:04X}: {}", instr.address, format_instruction(instr))
}

fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    let byte = instr.operand_bytes.first().copied().unwrap_or(0);
    let word = match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
        _ => 0,
    };

    match instr.addressing_mode {
        Implicit => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${:02X}", byte),
        ZeroPage => format!("${:02X}", byte),
        ZeroPageX => format!("${:02X}, X", byte),
        ZeroPageY => format!("${:02X}, Y", byte),
        IndirectX => format!("(${:02X}, X)", byte),
        IndirectY => format!("(${:02X}), Y", byte),
        Absolute => format!("${:04X}", word),
        AbsoluteX => format!("${:04X}, X", word),
        AbsoluteY => format!("${:04X}, Y", word),
        Indirect => format!("(${:04X})", word),
        Relative => {
            let target = instr
                .address
                .wrapping_add(2)
                .wrapping_add(byte as i8 as i16 as u16);
            format!("${:02X} [${:04X}]", byte, target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instr(opcode: u8, mnemonic: &'static str, mode: AddressingMode, bytes: &[u8]) -> Instruction {
        Instruction {
            address: 0x8000,
            opcode,
            mnemonic,
            addressing_mode: mode,
            operand_bytes: bytes.to_vec(),
            size_bytes: 1 + bytes.len() as u8,
            base_cycles: 2,
        }
    }

    #[test]
    fn test_format_immediate() {
        let i = instr(0xA9, "LDA", AddressingMode::Immediate, &[0x42]);
        assert_eq!(format_instruction(&i), "LDA #$42 {IMM}");
    }

    #[test]
    fn test_format_absolute() {
        let i = instr(0x8D, "STA", AddressingMode::Absolute, &[0x00, 0x80]);
        assert_eq!(format_instruction(&i), "STA $8000 {ABS}");
    }

    #[test]
    fn test_format_implied() {
        let i = instr(0xEA, "NOP", AddressingMode::Implicit, &[]);
        assert_eq!(format_instruction(&i), "NOP {IMP}");
    }

    #[test]
    fn test_format_accumulator() {
        let i = instr(0x0A, "ASL", AddressingMode::Accumulator, &[]);
        assert_eq!(format_instruction(&i), "ASL A {ACC}");
    }

    #[test]
    fn test_format_indexed_indirect() {
        let i = instr(0xA1, "LDA", AddressingMode::IndirectX, &[0x40]);
        assert_eq!(format_instruction(&i), "LDA ($40, X) {IZX}");

        let i = instr(0xB1, "LDA", AddressingMode::IndirectY, &[0x40]);
        assert_eq!(format_instruction(&i), "LDA ($40), Y {IZY}");
    }

    #[test]
    fn test_format_relative_backwards() {
        let i = instr(0xD0, "BNE", AddressingMode::Relative, &[0xFA]);
        assert_eq!(format_line(&i), "$8000: BNE $FA [$7FFC] {REL}");
    }
}
