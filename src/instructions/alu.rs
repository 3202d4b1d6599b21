//! # Logic Instructions
//!
//! - ORA: Logical Inclusive OR with Accumulator

use crate::{AddressingMode, Budget, MemoryBus, CPU};

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// A = A | operand, then Z and N follow the result. Other flags are untouched.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, budget: &mut Budget) {
    let operand = cpu.fetch_operand(mode, budget);
    let value = cpu.operand_value(operand, budget);

    cpu.a |= value;
    cpu.set_nz_flags(cpu.a);
}
