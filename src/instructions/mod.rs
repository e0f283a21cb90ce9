//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function taking the CPU and the resolved
//! [`Operand`]. It returns true when the instruction accepts the extra cycle
//! its addressing mode reports for crossing a page.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::addressing::Operand;
use crate::opcodes::Operation;
use crate::{MemoryBus, CPU};

impl<M: MemoryBus> CPU<M> {
    /// Executes `operation` against an already resolved operand.
    pub(crate) fn execute(&mut self, operation: Operation, operand: &Operand) -> bool {
        use Operation::*;

        match operation {
            Adc => alu::execute_adc(self, operand),
            And => alu::execute_and(self, operand),
            Asl => shifts::execute_asl(self, operand),
            Bcc => branches::execute_bcc(self, operand),
            Bcs => branches::execute_bcs(self, operand),
            Beq => branches::execute_beq(self, operand),
            Bit => alu::execute_bit(self, operand),
            Bmi => branches::execute_bmi(self, operand),
            Bne => branches::execute_bne(self, operand),
            Bpl => branches::execute_bpl(self, operand),
            Brk => control::execute_brk(self, operand),
            Bvc => branches::execute_bvc(self, operand),
            Bvs => branches::execute_bvs(self, operand),
            Clc => flags::execute_clc(self, operand),
            Cld => flags::execute_cld(self, operand),
            Cli => flags::execute_cli(self, operand),
            Clv => flags::execute_clv(self, operand),
            Cmp => alu::execute_cmp(self, operand),
            Cpx => alu::execute_cpx(self, operand),
            Cpy => alu::execute_cpy(self, operand),
            Dec => inc_dec::execute_dec(self, operand),
            Dex => inc_dec::execute_dex(self, operand),
            Dey => inc_dec::execute_dey(self, operand),
            Eor => alu::execute_eor(self, operand),
            Inc => inc_dec::execute_inc(self, operand),
            Inx => inc_dec::execute_inx(self, operand),
            Iny => inc_dec::execute_iny(self, operand),
            Jmp => control::execute_jmp(self, operand),
            Jsr => control::execute_jsr(self, operand),
            Lda => load_store::execute_lda(self, operand),
            Ldx => load_store::execute_ldx(self, operand),
            Ldy => load_store::execute_ldy(self, operand),
            Lsr => shifts::execute_lsr(self, operand),
            Nop => control::execute_nop(self, operand),
            Ora => alu::execute_ora(self, operand),
            Pha => stack::execute_pha(self, operand),
            Php => stack::execute_php(self, operand),
            Pla => stack::execute_pla(self, operand),
            Plp => stack::execute_plp(self, operand),
            Rol => shifts::execute_rol(self, operand),
            Ror => shifts::execute_ror(self, operand),
            Rti => control::execute_rti(self, operand),
            Rts => control::execute_rts(self, operand),
            Sbc => alu::execute_sbc(self, operand),
            Sec => flags::execute_sec(self, operand),
            Sed => flags::execute_sed(self, operand),
            Sei => flags::execute_sei(self, operand),
            Sta => load_store::execute_sta(self, operand),
            Stx => load_store::execute_stx(self, operand),
            Sty => load_store::execute_sty(self, operand),
            Tax => transfer::execute_tax(self, operand),
            Tay => transfer::execute_tay(self, operand),
            Tsx => transfer::execute_tsx(self, operand),
            Txa => transfer::execute_txa(self, operand),
            Txs => transfer::execute_txs(self, operand),
            Tya => transfer::execute_tya(self, operand),
            Illegal => control::execute_illegal(self, operand),
        }
    }
}
