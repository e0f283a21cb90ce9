//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the tick-driven fetch-decode-execute engine.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next byte to fetch
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register**: packed NV-BDIZC flags, see [`Status`]
//! - **Cycle state**: ticks remaining for the in-flight instruction, plus a
//!   monotonically increasing tick counter
//!
//! ## Execution Model
//!
//! A driver calls [`CPU::tick`] once per clock. The CPU only decodes at an
//! instruction boundary (no cycles remaining); the instruction's effects are
//! applied on that first tick and the remaining ticks simply elapse.
//! [`CPU::complete`] reports the boundary, and [`CPU::step`] runs one whole
//! instruction. Interrupts are entered through [`CPU::irq`] and [`CPU::nmi`]
//! between instructions.

use std::fmt;

use crate::opcodes::OPCODE_TABLE;
use crate::status::{Flag, Status};
use crate::MemoryBus;

/// Base address of the hardware stack (page 1).
pub const STACK_BASE: u16 = 0x0100;

/// Address of the little-endian NMI vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the little-endian IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Stack pointer value after reset.
const RESET_SP: u8 = 0xFD;

const RESET_CYCLES: u8 = 8;
const IRQ_CYCLES: u8 = 7;
const NMI_CYCLES: u8 = 8;

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state and owns the memory bus it
/// executes against. It is generic over the memory implementation via the
/// `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, Flag, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.set_reset_vector(0x8000);
///
/// // Initialize CPU - performs the reset sequence
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag(Flag::Unused));
/// assert_eq!(cpu.cycles_remaining(), 8);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next byte to fetch)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status register
    pub(crate) status: Status,

    /// Opcode of the most recently decoded instruction
    pub(crate) opcode: u8,

    /// Ticks left before the next instruction boundary
    pub(crate) cycles: u8,

    /// Total ticks since construction
    pub(crate) total_cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and runs [`CPU::reset`].
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: RESET_SP,
            status: Status::RESET,
            opcode: 0x00,
            cycles: 0,
            total_cycles: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Advances the CPU by one clock cycle.
    ///
    /// At an instruction boundary this fetches, decodes and executes the next
    /// instruction and loads its cycle cost: the base cost from the opcode
    /// table, plus one when both the addressing mode crossed a page and the
    /// operation accepts the penalty, plus whatever a taken branch adds.
    /// Every tick then consumes one of those cycles.
    pub fn tick(&mut self) {
        if self.cycles == 0 {
            let pc = self.pc;
            self.opcode = self.fetch_byte();
            let metadata = &OPCODE_TABLE[self.opcode as usize];
            self.cycles = metadata.base_cycles;

            log::trace!(
                "${:04X}: {:02X} {} {} ({} cycles)",
                pc,
                self.opcode,
                metadata.mnemonic,
                metadata.addressing_mode.tag(),
                metadata.base_cycles
            );

            let (operand, page_crossed) = self.resolve(metadata.addressing_mode);
            let accepts_penalty = self.execute(metadata.operation, &operand);

            if page_crossed && accepts_penalty {
                self.cycles += 1;
            }
        }

        self.cycles -= 1;
        self.total_cycles += 1;
    }

    /// Returns true at an instruction boundary.
    pub fn complete(&self) -> bool {
        self.cycles == 0
    }

    /// Runs one whole instruction.
    ///
    /// Any cycles still owed by the previous instruction (or by a reset or
    /// interrupt sequence) are ticked off first. Returns the number of cycles
    /// the executed instruction took.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_reset_vector(0x8000);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), 2);
    /// assert_eq!(cpu.pc(), 0x8001);
    /// assert!(cpu.complete());
    /// ```
    pub fn step(&mut self) -> u8 {
        while !self.complete() {
            self.tick();
        }

        self.tick();
        let mut consumed = 1;
        while !self.complete() {
            self.tick();
            consumed += 1;
        }
        consumed
    }

    /// Runs whole instructions until at least `cycle_budget` cycles have elapsed.
    ///
    /// Returns the actual number of cycles consumed, which may overshoot the
    /// budget by part of an instruction.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start = self.total_cycles;
        while self.total_cycles - start < cycle_budget {
            self.step();
        }
        self.total_cycles - start
    }

    /// Puts the CPU into its power-on state.
    ///
    /// A, X and Y are zeroed, SP becomes 0xFD, every flag except Unused is
    /// cleared and PC is loaded from the reset vector. The sequence costs 8
    /// cycles.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = RESET_SP;
        self.status = Status::RESET;
        self.pc = self.read_word(RESET_VECTOR);
        self.opcode = 0;
        self.cycles = RESET_CYCLES;

        log::debug!("reset: PC=${:04X}", self.pc);
    }

    /// Requests a maskable interrupt.
    ///
    /// Ignored entirely while the Interrupt Disable flag is set. Otherwise PC
    /// and status are pushed and PC is loaded from the IRQ vector (7 cycles).
    pub fn irq(&mut self) {
        if self.status.get(Flag::InterruptDisable) {
            log::debug!("irq masked at PC=${:04X}", self.pc);
            return;
        }
        self.interrupt(IRQ_VECTOR, IRQ_CYCLES);
        log::debug!("irq: PC=${:04X}", self.pc);
    }

    /// Triggers a non-maskable interrupt (8 cycles). Always taken.
    pub fn nmi(&mut self) {
        self.interrupt(NMI_VECTOR, NMI_CYCLES);
        log::debug!("nmi: PC=${:04X}", self.pc);
    }

    fn interrupt(&mut self, vector: u16, cycles: u8) {
        self.push_word(self.pc);

        self.status.set(Flag::Break, false);
        self.status.set(Flag::Unused, true);
        self.status.set(Flag::InterruptDisable, true);
        self.push(self.status.pushed(false));

        self.pc = self.read_word(vector);
        self.cycles = cycles;
    }

    // ========== Bus and Stack Helpers ==========

    /// Reads a little-endian word at `addr`.
    pub(crate) fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes high byte then low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull();
        let hi = self.pull();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.status.bits()
    }

    /// Returns the status register.
    pub fn status_register(&self) -> Status {
        self.status
    }

    /// Returns true if `flag` is set.
    pub fn flag(&self, flag: Flag) -> bool {
        self.status.get(flag)
    }

    /// Opcode of the most recently decoded instruction.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Ticks left before the next instruction boundary.
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles
    }

    /// Returns the total number of ticks since construction.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Captures every register in one value.
    pub fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            x: self.x,
            y: self.y,
            pc: self.pc,
            sp: self.sp,
            status: self.status,
        }
    }

    // ========== Register Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_status(&mut self, value: u8) {
        self.status = Status::from_bits(value);
    }

    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.status.set(flag, value);
    }

    // ========== Memory Access ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }
}

/// Snapshot of the register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub sp: u8,
    pub status: Status,
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC:${:04X} A:${:02X} X:${:02X} Y:${:02X} SP:${:02X} P:{}",
            self.pc, self.a, self.x, self.y, self.sp, self.status
        )
    }
}
