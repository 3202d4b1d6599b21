//! Tests for the LDA (Load Accumulator) instruction.
//!
//! Tests cover:
//! - Immediate, zero page and zero page,X addressing
//! - Flag updates (Z, N) and preservation of the other flags
//! - Budget charged per addressing mode
//! - Zero page wraparound for the indexed mode

use mini6502::{opcodes, FlatMemory, MemoryBus, CPU};

/// Helper function to create a reset CPU with `program` at the reset address
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset();
    cpu.load(0xFFFC, program).unwrap();
    cpu
}

// ========== Immediate ==========

#[test]
fn test_lda_immediate_then_nop() {
    let mut cpu = setup_cpu(&[opcodes::LDA_IMMEDIATE, 0x80, opcodes::NOP]);

    let report = cpu.execute(3).unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
    assert_eq!(report.retired, 2);
    assert_eq!(report.remaining, 0);
    assert_eq!(cpu.pc(), 0xFFFF);
    assert_eq!(cpu.last_opcode(), Some(opcodes::NOP));
}

#[test]
fn test_lda_immediate_costs_two() {
    let mut cpu = setup_cpu(&[opcodes::LDA_IMMEDIATE, 0x42]);

    let report = cpu.execute(2).unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(report.remaining, 0);
}

#[test]
fn test_lda_zero_flag() {
    let mut cpu = setup_cpu(&[opcodes::LDA_IMMEDIATE, 0x00]);
    cpu.set_a(0xFF);
    cpu.set_flag_n(true);

    cpu.execute(2).unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lda_preserves_other_flags() {
    let mut cpu = setup_cpu(&[opcodes::LDA_IMMEDIATE, 0x01]);
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);
    cpu.set_flag_i(true);
    cpu.set_flag_d(true);
    cpu.set_flag_b(true);

    cpu.execute(2).unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(cpu.flag_i());
    assert!(cpu.flag_d());
    assert!(cpu.flag_b());
}

// ========== Zero Page ==========

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu(&[opcodes::LDA_ZERO_PAGE, 0xFA]);
    cpu.memory_mut().write(0x00FA, 229);

    let report = cpu.execute(3).unwrap();

    assert_eq!(cpu.a(), 229);
    assert!(cpu.flag_n()); // 229 has bit 7 set
    assert!(!cpu.flag_z());
    assert_eq!(report.remaining, 0);
}

// ========== Zero Page,X ==========

#[test]
fn test_lda_zero_page_x() {
    let mut cpu = setup_cpu(&[opcodes::LDA_ZERO_PAGE_X, 0xFA]);
    cpu.memory_mut().write(0x00FA, 1);
    cpu.memory_mut().write(0x00FB, 2);
    cpu.set_x(1);

    let report = cpu.execute(4).unwrap();

    assert_eq!(cpu.a(), 2);
    assert_eq!(report.remaining, 0);
    assert_eq!(report.retired, 1);
}

#[test]
fn test_lda_zero_page_x_wraps_within_zero_page() {
    let mut cpu = setup_cpu(&[opcodes::LDA_ZERO_PAGE_X, 0xFF]);
    cpu.memory_mut().write(0x0001, 0x77);
    cpu.memory_mut().write(0x0101, 0x99);
    cpu.set_x(2);

    cpu.execute(4).unwrap();

    // 0xFF + 2 wraps to 0x01, not 0x101
    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_lda_zero_page_x_overshoots_small_budget() {
    let mut cpu = setup_cpu(&[opcodes::LDA_ZERO_PAGE_X, 0x10]);
    cpu.memory_mut().write(0x0010, 0x05);

    let report = cpu.execute(1).unwrap();

    // Once dispatched the instruction completes
    assert_eq!(cpu.a(), 0x05);
    assert_eq!(report.remaining, -3);
}
