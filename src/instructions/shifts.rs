//! # Shift Instructions
//!
//! - LSR: Logical Shift Right

use crate::cpu::Operand;
use crate::{AddressingMode, Budget, MemoryBus, CPU};

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Shifts the accumulator or a memory byte one bit right. Bit 0 goes to the carry
/// flag and bit 7 becomes 0, so N is always cleared.
///
/// In memory mode the result is written back to the same address; the write-back
/// is not charged against the budget.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, budget: &mut Budget) {
    let operand = cpu.fetch_operand(mode, budget);
    let value = cpu.operand_value(operand, budget);

    cpu.flag_c = (value & 0x01) != 0;
    let result = value >> 1;
    cpu.flag_z = result == 0;
    cpu.flag_n = false;

    match operand {
        Operand::Address(addr) => cpu.memory.write(addr, result),
        Operand::Accumulator | Operand::Value(_) => cpu.a = result,
    }
}
