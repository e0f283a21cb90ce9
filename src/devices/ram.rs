//! RAM device implementation.

use super::Device;

/// Read/write memory of a fixed size, zero-filled on creation.
///
/// # Examples
///
/// ```rust
/// use cpu6502::{Device, RamDevice};
///
/// let mut ram = RamDevice::new(0x0800);
/// ram.write(0x10, 0x42);
/// assert_eq!(ram.peek(0x10), 0x42);
/// assert_eq!(ram.size(), 0x0800);
/// ```
pub struct RamDevice {
    data: Vec<u8>,
}

impl RamDevice {
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    /// Copies `bytes` in starting at `offset`. Bytes that would fall past
    /// the end of the device are dropped.
    pub fn load_bytes(&mut self, offset: u16, bytes: &[u8]) {
        let start = offset as usize;
        if start >= self.data.len() {
            return;
        }
        let len = bytes.len().min(self.data.len() - start);
        self.data[start..start + len].copy_from_slice(&bytes[..len]);
    }
}

impl Device for RamDevice {
    fn peek(&self, offset: u16) -> u8 {
        self.data[offset as usize]
    }

    fn write(&mut self, offset: u16, value: u8) {
        self.data[offset as usize] = value;
    }

    fn size(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ram_new_is_zeroed() {
        let ram = RamDevice::new(1024);
        assert_eq!(ram.size(), 1024);
        assert!((0..1024u16).all(|offset| ram.peek(offset) == 0));
    }

    #[test]
    fn test_ram_read_write() {
        let mut ram = RamDevice::new(256);
        ram.write(0x00, 0x42);
        ram.write(0xFF, 0x99);
        assert_eq!(ram.read(0x00), 0x42);
        assert_eq!(ram.read(0xFF), 0x99);
    }

    #[test]
    fn test_ram_load_bytes_truncates() {
        let mut ram = RamDevice::new(4);
        ram.load_bytes(2, &[0xAA, 0xBB, 0xCC]);
        assert_eq!(ram.peek(2), 0xAA);
        assert_eq!(ram.peek(3), 0xBB);

        ram.load_bytes(10, &[0x01]);
        assert_eq!(ram.peek(0), 0x00);
    }

    #[test]
    fn test_full_address_space_ram() {
        let mut ram = RamDevice::new(0x1_0000);
        ram.write(0xFFFF, 0x12);
        assert_eq!(ram.peek(0xFFFF), 0x12);
    }
}
