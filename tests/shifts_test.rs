//! Tests for the shift and rotate instructions (ASL, LSR, ROL, ROR) in both
//! accumulator and memory forms.

use cpu6502::{Flag, FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, program).unwrap();
    CPU::new(memory)
}

// ========== Accumulator Forms ==========

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu(&[0x0A]);
    cpu.set_a(0x81);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag(Flag::Carry));
    assert!(!cpu.flag(Flag::Negative));
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cycles, 2);
}

#[test]
fn test_lsr_accumulator_clears_negative() {
    let mut cpu = setup_cpu(&[0x4A]);
    cpu.set_a(0x01);
    cpu.set_flag(Flag::Negative, true);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Carry));
    assert!(cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));
}

#[test]
fn test_rol_accumulator_carry_in() {
    let mut cpu = setup_cpu(&[0x2A]);
    cpu.set_a(0x40);
    cpu.set_flag(Flag::Carry, true);

    cpu.step();

    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag(Flag::Carry));
    assert!(cpu.flag(Flag::Negative));
}

#[test]
fn test_ror_accumulator_carry_in() {
    let mut cpu = setup_cpu(&[0x6A]);
    cpu.set_a(0x01);
    cpu.set_flag(Flag::Carry, true);

    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag(Flag::Carry));
    assert!(cpu.flag(Flag::Negative));
}

// ========== Memory Forms ==========

#[test]
fn test_asl_zero_page_writes_memory() {
    let mut cpu = setup_cpu(&[0x06, 0x10]);
    cpu.memory_mut().write(0x0010, 0x40);
    cpu.set_a(0x33);

    let cycles = cpu.step();

    assert_eq!(cpu.memory().peek(0x0010), 0x80);
    assert_eq!(cpu.a(), 0x33);
    assert!(cpu.flag(Flag::Negative));
    assert_eq!(cycles, 5);
}

#[test]
fn test_lsr_absolute() {
    let mut cpu = setup_cpu(&[0x4E, 0x34, 0x12]);
    cpu.memory_mut().write(0x1234, 0x03);

    let cycles = cpu.step();

    assert_eq!(cpu.memory().peek(0x1234), 0x01);
    assert!(cpu.flag(Flag::Carry));
    assert_eq!(cycles, 6);
}

#[test]
fn test_rol_absolute_x_fixed_cost() {
    // Read-modify-write never takes the page penalty
    let mut cpu = setup_cpu(&[0x3E, 0xFF, 0x20]);
    cpu.memory_mut().write(0x2100, 0x80);
    cpu.set_x(0x01);

    let cycles = cpu.step();

    assert_eq!(cpu.memory().peek(0x2100), 0x00);
    assert!(cpu.flag(Flag::Carry));
    assert!(cpu.flag(Flag::Zero));
    assert_eq!(cycles, 7);
}

#[test]
fn test_ror_zero_page_x() {
    let mut cpu = setup_cpu(&[0x76, 0x10]);
    cpu.memory_mut().write(0x0012, 0x02);
    cpu.set_x(0x02);

    let cycles = cpu.step();

    assert_eq!(cpu.memory().peek(0x0012), 0x01);
    assert!(!cpu.flag(Flag::Carry));
    assert_eq!(cycles, 6);
}
