//! ROM device implementation.
//!
//! Provides read-only memory storage via the Device trait.

use super::Device;

/// Read-only memory device.
///
/// Writes are silently ignored, matching typical ROM hardware behavior.
///
/// # Examples
///
/// ```rust
/// use cpu6502::{Device, RomDevice};
///
/// let mut rom = RomDevice::new(vec![0xEA, 0xEA, 0xEA]);
///
/// assert_eq!(rom.peek(0), 0xEA);
///
/// rom.write(0, 0xFF);
/// assert_eq!(rom.peek(0), 0xEA);
/// ```
pub struct RomDevice {
    data: Vec<u8>,
}

impl RomDevice {
    /// Creates a ROM holding `data`. The contents never change afterwards.
    ///
    /// ```rust
    /// use cpu6502::RomDevice;
    ///
    /// // 16KB image for $C000-$FFFF with the reset vector pointing at $C000
    /// let mut image = vec![0; 0x4000];
    /// image[0x3FFC] = 0x00;
    /// image[0x3FFD] = 0xC0;
    ///
    /// let rom = RomDevice::new(image);
    /// ```
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl Device for RomDevice {
    fn peek(&self, offset: u16) -> u8 {
        self.data[offset as usize]
    }

    fn write(&mut self, _offset: u16, _value: u8) {}

    fn size(&self) -> usize {
        self.data.len()
    }
}
