//! # Stack Operations
//!
//! - PHA: Push Accumulator on Stack
//!
//! Where the byte lands depends on the CPU's `StackMode`.

use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Stores A on the stack and moves SP down by one. Only the opcode fetch is
/// charged. Flags affected: None.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push_byte(cpu.a);
}
