//! # Instruction Implementations
//!
//! Handlers for the supported subset, organized by category. Each handler takes the
//! CPU, the addressing mode from the instruction table and the running budget. The
//! opcode fetch has already been charged by the time a handler runs.
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY
//! - **alu**: ORA
//! - **shifts**: LSR
//! - **stack**: PHA
//! - **control**: JSR, NOP

pub mod alu;
pub mod control;
pub mod load_store;
pub mod shifts;
pub mod stack;

use crate::{Budget, ExecutionError, Instruction, MemoryBus, Operation, CPU};

/// Runs the handler for a decoded instruction.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
    budget: &mut Budget,
) -> Result<(), ExecutionError> {
    let mode = instruction.addressing_mode;

    match instruction.operation {
        Operation::Lda => load_store::execute_lda(cpu, mode, budget),
        Operation::Ldx => load_store::execute_ldx(cpu, mode, budget),
        Operation::Ldy => load_store::execute_ldy(cpu, mode, budget),
        Operation::Ora => alu::execute_ora(cpu, mode, budget),
        Operation::Lsr => shifts::execute_lsr(cpu, mode, budget),
        Operation::Pha => stack::execute_pha(cpu),
        Operation::Jsr => control::execute_jsr(cpu, budget)?,
        Operation::Nop => control::execute_nop(cpu),
    }

    Ok(())
}
