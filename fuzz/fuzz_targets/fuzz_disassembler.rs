//! Fuzz target for the disassembler.
//!
//! Places arbitrary bytes anywhere in memory and disassembles an arbitrary
//! range, checking the listing stays consistent with the decoder.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{decode, disassemble, FlatMemory};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    origin: u16,
    bytes: Vec<u8>,
    start: u16,
    length: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    let room = 0x1_0000 - input.origin as usize;
    let len = input.bytes.len().min(room);
    let _ = memory.load(input.origin, &input.bytes[..len]);

    let stop = input.start.saturating_add(input.length as u16);
    let lines = disassemble(&memory, input.start, stop);

    assert!(lines.contains_key(&input.start));

    let mut expected = input.start as u32;
    for (&address, line) in &lines {
        // Instructions tile the range with no gaps
        assert_eq!(address as u32, expected);
        assert!(line.starts_with(&format!("${:04X}: ", address)));

        let instr = decode(&memory, address);
        assert!((1..=3).contains(&instr.size_bytes));
        assert_eq!(instr.operand_bytes.len(), instr.size_bytes as usize - 1);
        expected += instr.size_bytes as u32;
    }
    assert!(expected > stop as u32);
});
