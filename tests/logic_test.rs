//! Tests for the bitwise instructions AND, ORA, EOR and BIT.

use cpu6502::{Flag, FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, program).unwrap();
    CPU::new(memory)
}

// ========== AND ==========

#[test]
fn test_and_immediate() {
    let mut cpu = setup_cpu(&[0x29, 0x0F]);
    cpu.set_a(0x3C);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x0C);
    assert!(!cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));
    assert_eq!(cycles, 2);
}

#[test]
fn test_and_zero_result() {
    let mut cpu = setup_cpu(&[0x29, 0xF0]);
    cpu.set_a(0x0F);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Zero));
}

#[test]
fn test_and_indirect_x() {
    // AND ($20,X) with X=4 reads pointer at $24
    let mut cpu = setup_cpu(&[0x21, 0x20]);
    cpu.memory_mut().write(0x0024, 0x00);
    cpu.memory_mut().write(0x0025, 0x40);
    cpu.memory_mut().write(0x4000, 0x81);
    cpu.set_x(0x04);
    cpu.set_a(0xFF);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag(Flag::Negative));
    assert_eq!(cycles, 6);
}

// ========== ORA ==========

#[test]
fn test_ora_combines_bits() {
    let mut cpu = setup_cpu(&[0x09, 0x80]);
    cpu.set_a(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag(Flag::Negative));
    assert!(!cpu.flag(Flag::Zero));
}

#[test]
fn test_ora_zero() {
    let mut cpu = setup_cpu(&[0x09, 0x00]);

    cpu.step();

    assert!(cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));
}

// ========== EOR ==========

#[test]
fn test_eor_self_clears() {
    let mut cpu = setup_cpu(&[0x49, 0xAA]);
    cpu.set_a(0xAA);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Zero));
}

#[test]
fn test_eor_absolute_x_page_cross() {
    let mut cpu = setup_cpu(&[0x5D, 0x80, 0x12]);
    cpu.memory_mut().write(0x1300, 0xFF);
    cpu.set_x(0x80);
    cpu.set_a(0x0F);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag(Flag::Negative));
    assert_eq!(cycles, 5);
}

// ========== BIT ==========

#[test]
fn test_bit_copies_high_bits() {
    // BIT $40 with memory 0xC0 and A=0x01
    let mut cpu = setup_cpu(&[0x24, 0x40]);
    cpu.memory_mut().write(0x0040, 0xC0);
    cpu.set_a(0x01);

    let cycles = cpu.step();

    assert!(cpu.flag(Flag::Zero));
    assert!(cpu.flag(Flag::Overflow));
    assert!(cpu.flag(Flag::Negative));
    assert_eq!(cpu.a(), 0x01);
    assert_eq!(cycles, 3);
}

#[test]
fn test_bit_absolute_nonzero() {
    let mut cpu = setup_cpu(&[0x2C, 0x00, 0x20]);
    cpu.memory_mut().write(0x2000, 0x01);
    cpu.set_a(0x01);
    cpu.set_flag(Flag::Overflow, true);

    let cycles = cpu.step();

    assert!(!cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Overflow));
    assert!(!cpu.flag(Flag::Negative));
    assert_eq!(cycles, 4);
}
