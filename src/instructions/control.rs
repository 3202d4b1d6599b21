//! # Control Flow Instructions
//!
//! - JSR: Jump to Subroutine
//! - NOP: No Operation

use crate::{Budget, ExecutionError, MemoryBus, CPU};

/// Internal cycles JSR spends beyond its memory accesses.
const JSR_INTERNAL_CYCLES: i64 = 2;

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// 1. Fetch the little-endian target address (2 units)
/// 2. Store PC - 1, the address of the operand's last byte, on the stack (2 units)
/// 3. Spend 2 internal units
/// 4. Set PC to the target
///
/// Together with the opcode fetch, JSR costs 7 units. Flags affected: None.
///
/// Fails with `AddressOutOfRange` when the flat stack has SP = 0xFFFF, since the
/// return word would spill past the end of memory. The check runs before the
/// operand fetch, so a failed JSR leaves PC on the operand and charges nothing
/// beyond the opcode fetch.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, budget: &mut Budget) -> Result<(), ExecutionError> {
    cpu.check_return_address_fits()?;

    let target = cpu.fetch_word(budget);
    let return_address = cpu.pc.wrapping_sub(1);

    cpu.push_return_address(return_address, budget)?;
    budget.spend(JSR_INTERNAL_CYCLES);
    cpu.pc = target;

    Ok(())
}

/// Executes the NOP (No Operation) instruction.
///
/// Only the opcode fetch is charged.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) {}
