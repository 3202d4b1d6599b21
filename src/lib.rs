//! # mini6502
//!
//! A budget-driven execution core for a subset of the MOS 6502 instruction set.
//!
//! The crate models the processor as a register/flag state machine that fetches
//! opcode bytes from a 64KB address space, decodes them through a 256-entry
//! instruction table, and runs until a caller-supplied cycle budget is used up.
//!
//! ## Quick Start
//!
//! ```rust
//! use mini6502::{opcodes, FlatMemory, CPU};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//! cpu.reset();
//!
//! // LDA #$80 ; NOP, placed at the reset address
//! cpu.load(0xFFFC, &[opcodes::LDA_IMMEDIATE, 0x80, opcodes::NOP]).unwrap();
//!
//! let report = cpu.execute(3).unwrap();
//! assert_eq!(report.retired, 2);
//! assert_eq!(cpu.a(), 0x80);
//! assert!(cpu.flag_n());
//! assert!(!cpu.flag_z());
//! ```
//!
//! ## Modules
//!
//! - `budget` - Signed cycle budget threaded through every memory access
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `addressing` - Addressing modes used by the supported subset
//! - `opcodes` - Opcode constants and the instruction lookup table
//! - `config` - Stack and unhandled-opcode behavior switches
//! - `cpu` - CPU state, primitives and the fetch-decode-execute loop
//! - `observer` - Per-instruction diagnostics hooks

pub mod addressing;
pub mod budget;
pub mod config;
pub mod cpu;
pub mod memory;
pub mod observer;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use addressing::AddressingMode;
pub use budget::Budget;
pub use config::{CpuConfig, StackMode, UnhandledOpcodePolicy};
pub use cpu::{ExecutionReport, Registers, Step, CPU};
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use observer::{LogObserver, Observer, StepRecord};
pub use opcodes::{decode, Instruction, Operation, INSTRUCTION_TABLE};

/// An opcode byte that has no entry in the instruction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnhandledOpcode {
    /// The opcode byte that was fetched.
    pub opcode: u8,

    /// Address the opcode was fetched from.
    pub address: u16,
}

/// Errors that can occur while loading or executing code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// An access fell outside the 16-bit address space.
    ///
    /// Contains the first offending address.
    AddressOutOfRange(usize),

    /// The fetched opcode has no handler and the CPU is configured to halt.
    UnhandledOpcode(UnhandledOpcode),
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::AddressOutOfRange(address) => {
                write!(f, "Address 0x{:X} is outside the 64KB address space", address)
            }
            ExecutionError::UnhandledOpcode(unhandled) => {
                write!(
                    f,
                    "Opcode 0x{:02X} at 0x{:04X} is not handled",
                    unhandled.opcode, unhandled.address
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
