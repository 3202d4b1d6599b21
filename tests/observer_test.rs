//! Observer tests
//!
//! The observer sees each retired instruction with its registers, remaining budget
//! and memory; it never changes what the CPU computes.

use mini6502::{opcodes, FlatMemory, MemoryBus, Observer, Registers, StepRecord, UnhandledOpcode, CPU};

#[derive(Default)]
struct Recorder {
    steps: Vec<(u8, Registers, i64)>,
    dumps: Vec<Vec<(u16, u8)>>,
    unhandled: Vec<UnhandledOpcode>,
}

impl Observer for Recorder {
    fn on_retired(&mut self, record: &StepRecord) {
        self.steps.push((record.opcode, record.registers, record.remaining));
        self.dumps.push(record.memory.dump());
    }

    fn on_unhandled(&mut self, unhandled: UnhandledOpcode) {
        self.unhandled.push(unhandled);
    }
}

fn jsr_program() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset();
    cpu.memory_mut().write(0x4342, opcodes::LDA_IMMEDIATE);
    cpu.memory_mut().write(0x4343, 21);
    cpu.load(0xFFFC, &[opcodes::JSR, 0x42, 0x43]).unwrap();
    cpu
}

#[test]
fn test_records_follow_execution_order() {
    let mut cpu = jsr_program();
    let mut recorder = Recorder::default();

    cpu.execute_observed(9, &mut recorder).unwrap();

    assert_eq!(recorder.steps.len(), 2);

    let (opcode, registers, remaining) = recorder.steps[0];
    assert_eq!(opcode, opcodes::JSR);
    assert_eq!(registers.pc, 0x4342);
    assert_eq!(registers.sp, 0x0102);
    assert_eq!(remaining, 2);

    let (opcode, registers, remaining) = recorder.steps[1];
    assert_eq!(opcode, opcodes::LDA_IMMEDIATE);
    assert_eq!(registers.a, 21);
    assert_eq!(remaining, 0);
}

#[test]
fn test_record_exposes_memory() {
    let mut cpu = jsr_program();
    let mut recorder = Recorder::default();

    cpu.execute_observed(7, &mut recorder).unwrap();

    let dump = &recorder.dumps[0];
    assert!(dump.contains(&(0x0100, 0xFE)));
    assert!(dump.contains(&(0x0101, 0xFF)));
    assert!(dump.contains(&(0x4343, 21)));
}

#[test]
fn test_observed_and_plain_runs_agree() {
    let mut observed = jsr_program();
    let mut plain = jsr_program();

    let observed_report = observed.execute_observed(12, &mut Recorder::default()).unwrap();
    let plain_report = plain.execute(12).unwrap();

    assert_eq!(observed_report, plain_report);
    assert_eq!(observed.registers(), plain.registers());
    assert_eq!(observed.memory().dump(), plain.memory().dump());
}

#[test]
fn test_unhandled_reported_to_observer() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset();
    let mut recorder = Recorder::default();

    cpu.execute_observed(2, &mut recorder).unwrap();

    assert!(recorder.steps.is_empty());
    assert_eq!(recorder.unhandled.len(), 2);
    assert_eq!(recorder.unhandled[1].address, 0xFFFD);
}

#[test]
fn test_closure_as_observer() {
    let mut cpu = jsr_program();
    let mut seen = Vec::new();

    let mut observer = |record: &StepRecord| seen.push((record.opcode, record.remaining));
    let report = cpu.execute_observed(9, &mut observer).unwrap();

    assert_eq!(report.retired, 2);
    assert_eq!(seen, vec![(opcodes::JSR, 2), (opcodes::LDA_IMMEDIATE, 0)]);
}
