//! Memory-mapped device support for the 6502 emulator.
//!
//! This module provides a memory mapping architecture that allows multiple
//! devices (RAM, ROM, peripherals supplied by the embedding system) to share
//! the 6502 address space.
//!
//! # Architecture
//!
//! - **Device trait**: Abstract interface for memory-mapped hardware components
//! - **MappedMemory**: Routes read/write operations to registered devices based on address ranges
//! - **Device implementations**: RAM and ROM
//!
//! Access policy (write-protected ROM, open-bus reads, read side effects) lives
//! entirely here; the CPU only sees the [`MemoryBus`] interface.
//!
//! # Example
//!
//! ```rust
//! use cpu6502::{CPU, MappedMemory, RamDevice, RomDevice};
//!
//! let mut memory = MappedMemory::new();
//!
//! // 16KB RAM at 0x0000-0x3FFF
//! memory.add_device(0x0000, Box::new(RamDevice::new(0x4000))).unwrap();
//!
//! // 16KB ROM at 0xC000-0xFFFF, reset vector pointing at 0xC000
//! let mut rom = vec![0xEA; 0x4000];
//! rom[0x3FFC] = 0x00;
//! rom[0x3FFD] = 0xC0;
//! memory.add_device(0xC000, Box::new(RomDevice::new(rom))).unwrap();
//!
//! let cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0xC000);
//! ```

use thiserror::Error;

use crate::MemoryBus;

pub mod ram;
pub mod rom;

pub use ram::RamDevice;
pub use rom::RomDevice;

/// A component occupying a contiguous range of the address space.
///
/// Offsets passed to a device are relative to its base address and always
/// less than [`Device::size`].
pub trait Device {
    /// Reads a byte without side effects.
    fn peek(&self, offset: u16) -> u8;

    /// Reads a byte on behalf of the CPU. Defaults to [`Device::peek`].
    fn read(&mut self, offset: u16) -> u8 {
        self.peek(offset)
    }

    fn write(&mut self, offset: u16, value: u8);

    /// Number of addresses the device occupies (1..=65536).
    fn size(&self) -> usize;
}

/// Errors raised while building a memory map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    #[error(
        "device at ${new_base:04X} ({new_size} bytes) overlaps device at ${existing_base:04X} ({existing_size} bytes)"
    )]
    Overlap {
        new_base: u16,
        new_size: usize,
        existing_base: u16,
        existing_size: usize,
    },
    #[error("device at ${base:04X} has zero size")]
    EmptyDevice { base: u16 },
    #[error("device at ${base:04X} ({size} bytes) extends past $FFFF")]
    OutOfRange { base: u16, size: usize },
}

struct DeviceMapping {
    base: u16,
    size: usize,
    device: Box<dyn Device>,
}

impl DeviceMapping {
    fn offset_of(&self, addr: u16) -> Option<u16> {
        let offset = addr.checked_sub(self.base)?;
        ((offset as usize) < self.size).then_some(offset)
    }
}

/// A memory bus assembled from devices.
///
/// Unmapped reads return the open-bus value (0xFF by default); unmapped
/// writes are ignored.
pub struct MappedMemory {
    devices: Vec<DeviceMapping>,
    unmapped_value: u8,
}

impl MappedMemory {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            unmapped_value: 0xFF,
        }
    }

    /// Sets the value returned for reads that hit no device.
    pub fn with_unmapped_value(mut self, value: u8) -> Self {
        self.unmapped_value = value;
        self
    }

    /// Maps `device` at `base`, rejecting empty devices, devices running
    /// past 0xFFFF, and overlaps with anything already mapped.
    pub fn add_device(&mut self, base: u16, device: Box<dyn Device>) -> Result<(), DeviceError> {
        let size = device.size();
        if size == 0 {
            return Err(DeviceError::EmptyDevice { base });
        }

        let start = base as usize;
        let end = start + size;
        if end > 0x1_0000 {
            return Err(DeviceError::OutOfRange { base, size });
        }

        for mapping in &self.devices {
            let existing_start = mapping.base as usize;
            let existing_end = existing_start + mapping.size;
            if start < existing_end && end > existing_start {
                return Err(DeviceError::Overlap {
                    new_base: base,
                    new_size: size,
                    existing_base: mapping.base,
                    existing_size: mapping.size,
                });
            }
        }

        log::debug!("mapped {} byte device at ${:04X}", size, base);
        self.devices.push(DeviceMapping { base, size, device });
        Ok(())
    }

    /// Returns the device mapped at exactly `base`.
    pub fn device_at(&self, base: u16) -> Option<&dyn Device> {
        self.devices
            .iter()
            .find(|mapping| mapping.base == base)
            .map(|mapping| mapping.device.as_ref())
    }

    fn find(&self, addr: u16) -> Option<(&DeviceMapping, u16)> {
        self.devices
            .iter()
            .find_map(|mapping| mapping.offset_of(addr).map(|offset| (mapping, offset)))
    }

    fn find_mut(&mut self, addr: u16) -> Option<(&mut DeviceMapping, u16)> {
        self.devices
            .iter_mut()
            .find_map(|mapping| mapping.offset_of(addr).map(|offset| (mapping, offset)))
    }
}

impl Default for MappedMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for MappedMemory {
    fn peek(&self, addr: u16) -> u8 {
        match self.find(addr) {
            Some((mapping, offset)) => mapping.device.peek(offset),
            None => self.unmapped_value,
        }
    }

    fn read(&mut self, addr: u16) -> u8 {
        let unmapped = self.unmapped_value;
        match self.find_mut(addr) {
            Some((mapping, offset)) => mapping.device.read(offset),
            None => unmapped,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if let Some((mapping, offset)) = self.find_mut(addr) {
            mapping.device.write(offset, value);
        }
    }
}
