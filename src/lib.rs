//! # 6502 CPU Instruction Engine
//!
//! A tick-driven NMOS 6502 core that runs against a pluggable memory bus.
//!
//! This crate provides the processor state and the full documented instruction
//! set (151 opcodes across 13 addressing modes), reset/IRQ/NMI sequencing, a
//! trait-based memory bus with flat and device-mapped implementations, and a
//! disassembler for front ends.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, Flag, FlatMemory};
//!
//! let mut memory = FlatMemory::new();
//! memory.set_reset_vector(0x8000);
//! memory.load_hex(0x8000, "A9 05 69 03").unwrap(); // LDA #$05; ADC #$03
//!
//! // Construction runs the reset sequence
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//!
//! cpu.step();
//! cpu.step();
//! assert_eq!(cpu.a(), 0x08);
//! assert!(!cpu.flag(Flag::Carry));
//! ```
//!
//! ## Driving the clock
//!
//! A host that interleaves other hardware calls [`CPU::tick`] once per clock
//! and services interrupts when [`CPU::complete`] reports an instruction
//! boundary:
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory};
//!
//! let mut memory = FlatMemory::new();
//! memory.set_reset_vector(0x8000);
//! memory.load_hex(0x8000, "EA EA EA").unwrap();
//!
//! let mut cpu = CPU::new(memory);
//! for _ in 0..14 {
//!     cpu.tick();
//! }
//! // 8 reset cycles and three 2-cycle NOPs
//! assert!(cpu.complete());
//! assert_eq!(cpu.pc(), 0x8003);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, tick engine and interrupt sequencing
//! - `memory` - MemoryBus trait and flat 64KB memory
//! - `devices` - Device trait and address-mapped memory
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and operand resolution
//! - `status` - Status register flags
//! - `disassembler` - Memory to assembly text

pub mod addressing;
pub mod cpu;
pub mod devices;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{page_crossed, AddressingMode, Operand};
pub use cpu::{Registers, CPU, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_BASE};
pub use devices::{Device, DeviceError, MappedMemory, RamDevice, RomDevice};
pub use disassembler::{decode, disassemble, Instruction};
pub use memory::{FlatMemory, LoadError, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use status::{Flag, Status};
