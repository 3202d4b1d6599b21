//! # Load Instructions
//!
//! This module implements register loads:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register

use crate::{AddressingMode, Budget, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte into the accumulator, setting the zero and negative flags as
/// appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, budget: &mut Budget) {
    let operand = cpu.fetch_operand(mode, budget);
    cpu.a = cpu.operand_value(operand, budget);
    cpu.set_nz_flags(cpu.a);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behavior as LDA, targeting X.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, budget: &mut Budget) {
    let operand = cpu.fetch_operand(mode, budget);
    cpu.x = cpu.operand_value(operand, budget);
    cpu.set_nz_flags(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag behavior as LDA, targeting Y.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, budget: &mut Budget) {
    let operand = cpu.fetch_operand(mode, budget);
    cpu.y = cpu.operand_value(operand, budget);
    cpu.set_nz_flags(cpu.y);
}
