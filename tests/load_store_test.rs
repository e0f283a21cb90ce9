//! Tests for the load (LDA, LDX, LDY) and store (STA, STX, STY) instructions.

use cpu6502::{Flag, FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, program).unwrap();
    CPU::new(memory)
}

// ========== Loads ==========

#[test]
fn test_lda_immediate_flags() {
    let mut cpu = setup_cpu(&[0xA9, 0x00, 0xA9, 0x80]);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));

    cpu.step();
    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag(Flag::Zero));
    assert!(cpu.flag(Flag::Negative));
}

#[test]
fn test_lda_zero_page_x_wraps() {
    // LDA $F0,X with X=0x20 reads $0010, not $0110
    let mut cpu = setup_cpu(&[0xB5, 0xF0]);
    cpu.memory_mut().write(0x0010, 0x11);
    cpu.memory_mut().write(0x0110, 0x22);
    cpu.set_x(0x20);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cycles, 4);
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu(&[0xB6, 0x10]);
    cpu.memory_mut().write(0x0013, 0x7F);
    cpu.set_y(0x03);

    let cycles = cpu.step();

    assert_eq!(cpu.x(), 0x7F);
    assert_eq!(cycles, 4);
}

#[test]
fn test_ldx_absolute_y_page_cross() {
    let mut cpu = setup_cpu(&[0xBE, 0xFE, 0x20]);
    cpu.memory_mut().write(0x2101, 0x33);
    cpu.set_y(0x03);

    let cycles = cpu.step();

    assert_eq!(cpu.x(), 0x33);
    assert_eq!(cycles, 5);
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu(&[0xBC, 0x00, 0x20]);
    cpu.memory_mut().write(0x2005, 0xFE);
    cpu.set_x(0x05);

    let cycles = cpu.step();

    assert_eq!(cpu.y(), 0xFE);
    assert!(cpu.flag(Flag::Negative));
    assert_eq!(cycles, 4);
}

#[test]
fn test_lda_indirect_y_zero_page_pointer_wraps() {
    // Pointer at $FF takes its high byte from $00
    let mut cpu = setup_cpu(&[0xB1, 0xFF]);
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0000, 0x40);
    cpu.memory_mut().write(0x4002, 0x5A);
    cpu.set_y(0x02);

    cpu.step();

    assert_eq!(cpu.a(), 0x5A);
}

// ========== Stores ==========

#[test]
fn test_sta_absolute_leaves_flags() {
    let mut cpu = setup_cpu(&[0x8D, 0x00, 0x02]);
    cpu.set_a(0x00);
    let status = cpu.status();

    let cycles = cpu.step();

    assert_eq!(cpu.memory().peek(0x0200), 0x00);
    assert_eq!(cpu.status(), status);
    assert_eq!(cycles, 4);
}

#[test]
fn test_sta_absolute_x_never_takes_penalty() {
    // STA $20FF,X always costs 5 cycles
    let mut cpu = setup_cpu(&[0x9D, 0xFF, 0x20, 0x9D, 0x00, 0x20]);
    cpu.set_a(0x42);
    cpu.set_x(0x01);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().peek(0x2100), 0x42);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().peek(0x2001), 0x42);
}

#[test]
fn test_sta_indirect_y_never_takes_penalty() {
    let mut cpu = setup_cpu(&[0x91, 0x10]);
    cpu.memory_mut().write(0x0010, 0xFF);
    cpu.memory_mut().write(0x0011, 0x20);
    cpu.set_y(0x01);
    cpu.set_a(0x99);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.memory().peek(0x2100), 0x99);
}

#[test]
fn test_stx_zero_page_y_and_sty_zero_page_x() {
    let mut cpu = setup_cpu(&[0x96, 0x10, 0x94, 0x20]);
    cpu.set_x(0xAA);
    cpu.set_y(0x02);

    cpu.step();
    assert_eq!(cpu.memory().peek(0x0012), 0xAA);

    cpu.step();
    assert_eq!(cpu.memory().peek(0x00CA), 0x02);
}
