//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that CPU operations maintain
//! fundamental invariants across all possible input combinations.

use cpu6502::{Flag, FlatMemory, MemoryBus, Operation, CPU, OPCODE_TABLE};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    CPU::new(memory)
}

/// Opcodes whose only effect on PC is to skip past their own bytes.
fn straight_line_opcodes() -> Vec<u8> {
    use Operation::*;

    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            !matches!(
                m.operation,
                Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs | Jmp | Jsr | Rts | Rti | Brk
            )
        })
        .map(|(i, _)| i as u8)
        .collect()
}

// ========== Program Counter and Cycle Invariants ==========

proptest! {
    /// Property: straight-line instructions advance PC by exactly their size
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(straight_line_opcodes()),
        op1: u8,
        op2: u8,
        a: u8,
        x: u8,
        y: u8,
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, op1, op2]).unwrap();
        cpu.set_a(a);
        cpu.set_x(x);
        cpu.set_y(y);

        let cycles = cpu.step();

        let metadata = &OPCODE_TABLE[opcode as usize];
        prop_assert_eq!(cpu.pc(), 0x8000 + metadata.size_bytes as u16);
        prop_assert!(cycles == metadata.base_cycles || cycles == metadata.base_cycles + 1);
        prop_assert!(cpu.complete());
    }

    /// Property: total cycles grow by the reset sequence plus what step reports
    #[test]
    fn prop_total_cycles_track_step(opcode: u8, op1: u8, op2: u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, op1, op2]).unwrap();

        let cycles = cpu.step();

        prop_assert_eq!(cpu.total_cycles(), 8 + cycles as u64);
        prop_assert_eq!(cpu.opcode(), opcode);
    }

    /// Property: the Unused flag survives every instruction except PHP
    #[test]
    fn prop_unused_flag_stays_set(
        opcode in prop::sample::select(straight_line_opcodes()),
        op1: u8,
        op2: u8,
    ) {
        prop_assume!(OPCODE_TABLE[opcode as usize].operation != Operation::Php);

        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, op1, op2]).unwrap();
        // PLP pulls from $01FE; make that byte carry U clear
        cpu.memory_mut().write(0x01FE, 0x00);

        cpu.step();

        prop_assert!(cpu.flag(Flag::Unused));
    }
}

// ========== Arithmetic Invariants ==========

proptest! {
    /// Property: ADC matches a 9-bit reference model for every input
    #[test]
    fn prop_adc_matches_model(a: u8, value: u8, carry: bool) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x69, value]).unwrap();
        cpu.set_a(a);
        cpu.set_flag(Flag::Carry, carry);

        cpu.step();

        let sum = a as u16 + value as u16 + carry as u16;
        let result = sum as u8;
        let signed = a as i8 as i16 + value as i8 as i16 + carry as i16;

        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(cpu.flag(Flag::Carry), sum > 0xFF);
        prop_assert_eq!(cpu.flag(Flag::Overflow), !(-128..=127).contains(&signed));
        prop_assert_eq!(cpu.flag(Flag::Zero), result == 0);
        prop_assert_eq!(cpu.flag(Flag::Negative), result & 0x80 != 0);
    }

    /// Property: SBC matches a borrow-based reference model for every input
    #[test]
    fn prop_sbc_matches_model(a: u8, value: u8, carry: bool) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xE9, value]).unwrap();
        cpu.set_a(a);
        cpu.set_flag(Flag::Carry, carry);

        cpu.step();

        let borrow = !carry as i16;
        let diff = a as i16 - value as i16 - borrow;
        let result = diff as u8;
        let signed = a as i8 as i16 - value as i8 as i16 - borrow;

        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(cpu.flag(Flag::Carry), diff >= 0);
        prop_assert_eq!(cpu.flag(Flag::Overflow), !(-128..=127).contains(&signed));
        prop_assert_eq!(cpu.flag(Flag::Zero), result == 0);
    }

    /// Property: CMP leaves A alone and orders unsigned values through C and Z
    #[test]
    fn prop_cmp_orders_values(a: u8, value: u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xC9, value]).unwrap();
        cpu.set_a(a);

        cpu.step();

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.flag(Flag::Carry), a >= value);
        prop_assert_eq!(cpu.flag(Flag::Zero), a == value);
        prop_assert_eq!(cpu.flag(Flag::Negative), a.wrapping_sub(value) & 0x80 != 0);
    }
}

// ========== Stack Invariants ==========

proptest! {
    /// Property: PHA then PLA restores A and SP from any starting SP
    #[test]
    fn prop_pha_pla_round_trip(a: u8, sp: u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]).unwrap();
        cpu.set_a(a);
        cpu.set_sp(sp);

        cpu.step();
        cpu.step();
        cpu.step();

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.sp(), sp);
    }

    /// Property: JSR then RTS returns to the byte after the JSR
    #[test]
    fn prop_jsr_rts_round_trip(target in 0x0200u16..0x7F00u16, sp in 0x02u8..=0xFF) {
        let mut cpu = setup_cpu();
        let [lo, hi] = target.to_le_bytes();
        cpu.memory_mut().load(0x8000, &[0x20, lo, hi]).unwrap();
        cpu.memory_mut().write(target, 0x60);
        cpu.set_sp(sp);

        cpu.step();
        prop_assert_eq!(cpu.pc(), target);
        prop_assert_eq!(cpu.sp(), sp.wrapping_sub(2));

        cpu.step();
        prop_assert_eq!(cpu.pc(), 0x8003);
        prop_assert_eq!(cpu.sp(), sp);
    }
}
