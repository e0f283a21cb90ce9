//! Fuzz target for CPU execution.
//!
//! Seeds registers and the interesting memory pages from the input, then runs a
//! handful of instructions with interrupts sprinkled in. Any panic is a bug.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{FlatMemory, MemoryBus, CPU, IRQ_VECTOR, NMI_VECTOR};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

#[derive(Debug, Arbitrary)]
enum Event {
    Step,
    Tick,
    Irq,
    Nmi,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Program at $8000
    program: [u8; 32],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Data at $4000 for absolute addressing
    main_memory: [u8; 256],
    events: Vec<Event>,
}

fuzz_target!(|input: FuzzInput| {
    if input.events.len() > 256 {
        return;
    }

    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.set_vector(IRQ_VECTOR, 0x9000);
    memory.set_vector(NMI_VECTOR, 0x9100);
    let _ = memory.load(0x8000, &input.program);
    let _ = memory.load(0x0000, &input.zero_page);
    let _ = memory.load(0x0100, &input.stack_page);
    let _ = memory.load(0x4000, &input.main_memory);

    let mut cpu = CPU::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    for event in &input.events {
        let before = cpu.total_cycles();
        match event {
            Event::Step => {
                let cycles = cpu.step();
                assert!((2..=8).contains(&cycles), "instruction took {} cycles", cycles);
                assert!(cpu.complete());
            }
            Event::Tick => {
                cpu.tick();
                assert_eq!(cpu.total_cycles(), before + 1);
            }
            Event::Irq => {
                let masked = cpu.flag(cpu6502::Flag::InterruptDisable);
                let pc = cpu.pc();
                cpu.irq();
                if masked {
                    assert_eq!(cpu.pc(), pc);
                    assert_eq!(cpu.total_cycles(), before);
                } else {
                    assert_eq!(cpu.cycles_remaining(), 7);
                }
            }
            Event::Nmi => {
                cpu.nmi();
                assert_eq!(cpu.cycles_remaining(), 8);
                assert!(cpu.flag(cpu6502::Flag::InterruptDisable));
            }
        }
    }

    // Inspection never panics, whatever the state
    let _ = cpu.registers().to_string();
    let _ = cpu.memory().peek(cpu.pc());
});
