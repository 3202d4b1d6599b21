//! Tests for the LSR (Logical Shift Right) instruction.
//!
//! Tests cover:
//! - Accumulator and zero page modes
//! - Carry receives old bit 0
//! - Negative always cleared, Zero follows the result
//! - Zero page result written back

use mini6502::{opcodes, FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset();
    cpu.load(0xFFFC, program).unwrap();
    cpu
}

// ========== Accumulator ==========

#[test]
fn test_lsr_accumulator() {
    let mut cpu = setup_cpu(&[opcodes::LSR_ACCUMULATOR]);
    cpu.set_a(0x03);

    let report = cpu.execute(1).unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(report.remaining, 0);
}

#[test]
fn test_lsr_accumulator_to_zero() {
    let mut cpu = setup_cpu(&[opcodes::LSR_ACCUMULATOR]);
    cpu.set_a(0x01);

    cpu.execute(1).unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_lsr_clears_negative_and_carry() {
    let mut cpu = setup_cpu(&[opcodes::LSR_ACCUMULATOR]);
    cpu.set_a(0x80);
    cpu.set_flag_n(true);
    cpu.set_flag_c(true);

    cpu.execute(1).unwrap();

    assert_eq!(cpu.a(), 0x40);
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_c());
}

// ========== Zero Page ==========

#[test]
fn test_lsr_zero_page_writes_back() {
    let mut cpu = setup_cpu(&[opcodes::LSR_ZERO_PAGE, 0x10]);
    cpu.memory_mut().write(0x0010, 0x81);
    cpu.set_a(0x55);

    let report = cpu.execute(3).unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x40);
    assert_eq!(cpu.a(), 0x55); // Accumulator untouched
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(report.remaining, 0);
}
