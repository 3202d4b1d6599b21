//! # Execution Observers
//!
//! Hooks the host can attach to `CPU::execute_observed` to watch each retired
//! instruction. Observers only look; machine semantics never depend on them.

use crate::cpu::Registers;
use crate::{MemoryBus, UnhandledOpcode};

/// State visible right after an instruction retires.
pub struct StepRecord<'a> {
    /// Opcode of the instruction that just retired.
    pub opcode: u8,

    /// Registers and flags after the instruction.
    pub registers: Registers,

    /// Budget left; may be negative.
    pub remaining: i64,

    /// Memory after the instruction.
    pub memory: &'a dyn MemoryBus,
}

/// Receives per-instruction notifications from the execution loop.
pub trait Observer {
    /// Called after every handled instruction.
    fn on_retired(&mut self, _record: &StepRecord) {}

    /// Called when an unhandled opcode is skipped.
    fn on_unhandled(&mut self, _unhandled: UnhandledOpcode) {}
}

impl Observer for () {}

/// Any `FnMut(&StepRecord)` closure observes retired instructions.
impl<F> Observer for F
where
    F: FnMut(&StepRecord),
{
    fn on_retired(&mut self, record: &StepRecord) {
        self(record)
    }
}

/// Writes the register dump through the `log` facade.
///
/// Opcode, registers, flags and remaining budget go out at `debug` level; the
/// non-zero memory cells at `trace` level, since listing them walks all 64KB.
#[derive(Debug, Default)]
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Observer for LogObserver {
    fn on_retired(&mut self, record: &StepRecord) {
        log::debug!("Executed, opcode: 0x{:02x}", record.opcode);
        log::debug!("{}", record.registers);
        log::debug!("Cycles left: {}", record.remaining);

        if log::log_enabled!(log::Level::Trace) {
            for (address, value) in record.memory.dump() {
                log::trace!(
                    "Address: 0x{:04x} --------- Value: 0x{:02x} --> {}",
                    address,
                    value,
                    value
                );
            }
        }
    }

    fn on_unhandled(&mut self, unhandled: UnhandledOpcode) {
        log::debug!(
            "Skipped unhandled opcode 0x{:02x} at 0x{:04x}",
            unhandled.opcode,
            unhandled.address
        );
    }
}
