//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations. This enables flexible memory configurations including:
//!
//! - Flat 64KB RAM (FlatMemory implementation provided)
//! - ROM/RAM splits and memory-mapped devices (see [`crate::devices`])
//! - Debugging wrappers with logging
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads may return garbage
//! - Writes to ROM/unmapped regions may be ignored
//! - Inspection (`peek`) never disturbs the system being inspected

use thiserror::Error;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `peek(&self)`: side-effect-free read for debuggers and disassemblers
/// - `read(&mut self)`: the CPU's read; devices with read side effects
///   (clear-on-read status registers, FIFOs) override it
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn peek(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
///
/// let mut mem = RomRamMemory { ram: [0; 0x8000], rom: [0xEA; 0x8000] };
/// mem.write(0x9000, 0x00);
/// assert_eq!(mem.read(0x9000), 0xEA);
/// ```
pub trait MemoryBus {
    /// Reads a byte without triggering any mapped side effect.
    ///
    /// This method must never panic.
    fn peek(&self, addr: u16) -> u8;

    /// Reads a byte on behalf of the CPU.
    ///
    /// Defaults to [`MemoryBus::peek`].
    fn read(&mut self, addr: u16) -> u8 {
        self.peek(addr)
    }

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only or unmapped,
    /// implementations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

/// Errors raised while placing a program image into memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("program of {len} bytes does not fit at ${offset:04X}")]
    ProgramTooLarge { offset: u16, len: usize },
    #[error("token {index} ({token:?}) is not a hex byte")]
    InvalidHexByte { index: usize, token: String },
}

/// Simple 64KB flat memory implementation.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.set_reset_vector(0x8000);
/// memory.load_hex(0x8000, "A9 42 EA").unwrap(); // LDA #$42; NOP
///
/// let mut cpu = CPU::new(memory);
/// cpu.step();
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `offset`.
    pub fn load(&mut self, offset: u16, bytes: &[u8]) -> Result<(), LoadError> {
        let start = offset as usize;
        let end = start + bytes.len();
        if end > self.data.len() {
            return Err(LoadError::ProgramTooLarge {
                offset,
                len: bytes.len(),
            });
        }
        self.data[start..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Parses whitespace-separated hex bytes (`"A2 0A 8E 00 00"`) and loads them at `offset`.
    ///
    /// Returns the number of bytes loaded.
    pub fn load_hex(&mut self, offset: u16, text: &str) -> Result<usize, LoadError> {
        let bytes = text
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                u8::from_str_radix(token, 16).map_err(|_| LoadError::InvalidHexByte {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        self.load(offset, &bytes)?;
        Ok(bytes.len())
    }

    /// Stores `addr` little-endian at the reset vector (0xFFFC/0xFFFD).
    pub fn set_reset_vector(&mut self, addr: u16) {
        self.set_vector(crate::cpu::RESET_VECTOR, addr);
    }

    /// Stores `addr` little-endian at `vector` and `vector + 1`.
    pub fn set_vector(&mut self, vector: u16, addr: u16) {
        let [lo, hi] = addr.to_le_bytes();
        self.data[vector as usize] = lo;
        self.data[vector.wrapping_add(1) as usize] = hi;
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
