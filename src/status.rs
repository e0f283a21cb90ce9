//! # Processor Status Register
//!
//! The 6502 keeps its eight condition bits packed in a single byte (NV-BDIZC).
//! [`Status`] keeps that packed representation but only exposes it through
//! named flag accessors, so every rule about which bits may change lives here.

use std::fmt;

/// A single bit of the status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Bit 0: carry out of bit 7 (or "no borrow" for subtraction/compare)
    Carry,
    /// Bit 1: result was zero
    Zero,
    /// Bit 2: IRQ is masked while set
    InterruptDisable,
    /// Bit 3: BCD mode. Stored and pushed, but arithmetic ignores it.
    Decimal,
    /// Bit 4: only meaningful in a pushed copy of the register
    Break,
    /// Bit 5: always reads back as 1 when pushed
    Unused,
    /// Bit 6: signed overflow
    Overflow,
    /// Bit 7: bit 7 of the result
    Negative,
}

impl Flag {
    /// All flags, lowest bit first.
    pub const ALL: [Flag; 8] = [
        Flag::Carry,
        Flag::Zero,
        Flag::InterruptDisable,
        Flag::Decimal,
        Flag::Break,
        Flag::Unused,
        Flag::Overflow,
        Flag::Negative,
    ];

    /// Bit mask of this flag within the packed status byte.
    pub const fn mask(self) -> u8 {
        match self {
            Flag::Carry => 0b0000_0001,
            Flag::Zero => 0b0000_0010,
            Flag::InterruptDisable => 0b0000_0100,
            Flag::Decimal => 0b0000_1000,
            Flag::Break => 0b0001_0000,
            Flag::Unused => 0b0010_0000,
            Flag::Overflow => 0b0100_0000,
            Flag::Negative => 0b1000_0000,
        }
    }

    /// Single-letter name used by register dumps.
    pub const fn letter(self) -> char {
        match self {
            Flag::Carry => 'C',
            Flag::Zero => 'Z',
            Flag::InterruptDisable => 'I',
            Flag::Decimal => 'D',
            Flag::Break => 'B',
            Flag::Unused => '-',
            Flag::Overflow => 'V',
            Flag::Negative => 'N',
        }
    }
}

/// Packed processor status register.
///
/// # Examples
///
/// ```
/// use cpu6502::{Flag, Status};
///
/// let mut status = Status::default();
/// status.set(Flag::Carry, true);
/// status.set_zn(0x80);
///
/// assert!(status.get(Flag::Carry));
/// assert!(status.get(Flag::Negative));
/// assert!(!status.get(Flag::Zero));
/// assert_eq!(status.bits(), 0b1000_0001);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status(u8);

impl Status {
    /// Status immediately after reset: everything clear except Unused.
    pub const RESET: Status = Status(Flag::Unused.mask());

    /// Wraps a raw status byte.
    pub const fn from_bits(bits: u8) -> Self {
        Status(bits)
    }

    /// Returns the raw status byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if `flag` is set.
    pub const fn get(self, flag: Flag) -> bool {
        self.0 & flag.mask() != 0
    }

    /// Sets or clears `flag`.
    pub fn set(&mut self, flag: Flag, value: bool) {
        if value {
            self.0 |= flag.mask();
        } else {
            self.0 &= !flag.mask();
        }
    }

    /// Updates Zero and Negative from an 8-bit result.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Flag::Zero, value == 0);
        self.set(Flag::Negative, value & 0x80 != 0);
    }

    /// The byte written to the stack: Unused always set, Break as requested.
    pub const fn pushed(self, brk: bool) -> u8 {
        let bits = self.0 | Flag::Unused.mask();
        if brk {
            bits | Flag::Break.mask()
        } else {
            bits & !Flag::Break.mask()
        }
    }
}

impl fmt::Display for Status {
    /// Renders as `NV-BDIZC`, with clear flags shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in Flag::ALL.iter().rev() {
            let c = if self.get(*flag) { flag.letter() } else { '.' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
