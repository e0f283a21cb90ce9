//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolvers that turn the bytes following an opcode into an operand.
//!
//! Resolution produces an [`Operand`]: the per-instruction context handed from
//! the resolver to the instruction. It carries the effective address, the
//! sign-extended branch displacement, and, for modes whose operand never lives
//! at an address (Immediate, Implicit, Accumulator), the operand value itself.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the next instruction.
    Relative,

    /// Full 16-bit little-endian address.
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Reproduces the NMOS page-wrap defect: JMP ($10FF) takes its high byte
    /// from $1000, not $1100.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        use AddressingMode::*;
        match self {
            Implicit | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// Three-letter tag shown by the disassembler.
    pub const fn tag(self) -> &'static str {
        use AddressingMode::*;
        match self {
            Implicit => "IMP",
            Accumulator => "ACC",
            Immediate => "IMM",
            ZeroPage => "ZP0",
            ZeroPageX => "ZPX",
            ZeroPageY => "ZPY",
            Relative => "REL",
            Absolute => "ABS",
            AbsoluteX => "ABX",
            AbsoluteY => "ABY",
            Indirect => "IND",
            IndirectX => "IZX",
            IndirectY => "IZY",
        }
    }
}

/// Returns true if `a` and `b` lie in different 256-byte pages.
pub const fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Resolved operand of the instruction currently executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// Mode that produced this operand.
    pub mode: AddressingMode,

    /// Effective address. Meaningless for Implicit, Accumulator and Relative.
    pub addr: u16,

    /// Branch displacement, sign-extended to 16 bits. Zero for other modes.
    pub rel: u16,

    /// Operand captured during resolution, for modes with no effective address.
    pub value: Option<u8>,
}

impl Operand {
    fn at(mode: AddressingMode, addr: u16) -> Self {
        Self {
            mode,
            addr,
            rel: 0,
            value: None,
        }
    }

    fn resident(mode: AddressingMode, addr: u16, value: u8) -> Self {
        Self {
            mode,
            addr,
            rel: 0,
            value: Some(value),
        }
    }

    /// True when the instruction's result goes to the accumulator rather than memory.
    pub fn targets_accumulator(&self) -> bool {
        matches!(
            self.mode,
            AddressingMode::Accumulator | AddressingMode::Implicit
        )
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by 2.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Resolves the operand for `mode`, consuming operand bytes at PC.
    ///
    /// The returned flag is true when the mode crossed a page while indexing and
    /// the instruction may therefore cost one extra cycle.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> (Operand, bool) {
        use AddressingMode::*;

        match mode {
            Implicit | Accumulator => (Operand::resident(mode, 0, self.a), false),
            Immediate => {
                let addr = self.pc;
                let value = self.fetch_byte();
                (Operand::resident(mode, addr, value), false)
            }
            ZeroPage => {
                let addr = self.fetch_byte() as u16;
                (Operand::at(mode, addr), false)
            }
            ZeroPageX => {
                let addr = self.fetch_byte().wrapping_add(self.x) as u16;
                (Operand::at(mode, addr), false)
            }
            ZeroPageY => {
                let addr = self.fetch_byte().wrapping_add(self.y) as u16;
                (Operand::at(mode, addr), false)
            }
            Relative => {
                let rel = self.fetch_byte() as i8 as i16 as u16;
                let operand = Operand {
                    mode,
                    addr: 0,
                    rel,
                    value: None,
                };
                (operand, false)
            }
            Absolute => {
                let addr = self.fetch_word();
                (Operand::at(mode, addr), false)
            }
            AbsoluteX => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.x as u16);
                (Operand::at(mode, addr), page_crossed(base, addr))
            }
            AbsoluteY => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.y as u16);
                (Operand::at(mode, addr), page_crossed(base, addr))
            }
            Indirect => {
                let ptr = self.fetch_word();
                let lo = self.memory.read(ptr) as u16;
                // The high byte never carries into the next page.
                let hi_ptr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.memory.read(hi_ptr) as u16;
                (Operand::at(mode, (hi << 8) | lo), false)
            }
            IndirectX => {
                let zp = self.fetch_byte().wrapping_add(self.x);
                let lo = self.memory.read(zp as u16) as u16;
                let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
                (Operand::at(mode, (hi << 8) | lo), false)
            }
            IndirectY => {
                let zp = self.fetch_byte();
                let lo = self.memory.read(zp as u16) as u16;
                let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
                let base = (hi << 8) | lo;
                let addr = base.wrapping_add(self.y as u16);
                (Operand::at(mode, addr), page_crossed(base, addr))
            }
        }
    }

    /// Returns the operand value, reading memory only when resolution left it at an address.
    pub(crate) fn fetch(&mut self, operand: &Operand) -> u8 {
        match operand.value {
            Some(value) => value,
            None => self.memory.read(operand.addr),
        }
    }
}
