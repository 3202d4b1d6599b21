//! Fuzz target for budgeted execution.
//!
//! Builds an arbitrary CPU state and memory image, then runs a short budget.
//! Execution must never panic; the only acceptable error is a word write that
//! leaves the address space.

#![no_main]

use arbitrary::Arbitrary;
use mini6502::{CpuConfig, ExecutionError, FlatMemory, MemoryBus, StackMode, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u16,
    pc: u16,
    flag_c: bool,
    flag_z: bool,
    flag_n: bool,
    page_stack: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    budget: u8,
}

fuzz_target!(|input: FuzzInput| {
    let config = CpuConfig {
        stack_mode: if input.cpu_state.page_stack {
            StackMode::Page
        } else {
            StackMode::Flat
        },
        ..CpuConfig::default()
    };

    let mut memory = FlatMemory::new();
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.program.iter().enumerate() {
        memory.write(input.cpu_state.pc.wrapping_add(i as u16), byte);
    }

    let mut cpu = CPU::with_config(memory, config);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_flag_c(input.cpu_state.flag_c);
    cpu.set_flag_z(input.cpu_state.flag_z);
    cpu.set_flag_n(input.cpu_state.flag_n);

    match cpu.execute(input.budget as i64) {
        Ok(report) => {
            // The loop only stops once the budget is spent
            assert!(report.remaining <= 0);
        }
        Err(ExecutionError::AddressOutOfRange(addr)) => assert_eq!(addr, 0x10000),
        Err(e) => panic!("unexpected error: {e}"),
    }

    if input.cpu_state.page_stack {
        assert!((0x0100..=0x01FF).contains(&cpu.sp()) || cpu.sp() == input.cpu_state.sp);
    }
});
