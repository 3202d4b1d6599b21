//! Replays the reference programs against a fresh CPU and logs every retired
//! instruction.
//!
//! Run with `RUST_LOG=trace` to include the non-zero memory cells in each dump.

use mini6502::cpu::RESET_ADDRESS;
use mini6502::{opcodes, ExecutionError, FlatMemory, LogObserver, MemoryBus, CPU};

struct Program {
    name: &'static str,
    /// Bytes poked into memory before the program is loaded.
    data: &'static [(u16, u8)],
    x: u8,
    code: &'static [u8],
    budget: i64,
}

const PROGRAMS: &[Program] = &[
    Program {
        name: "LDA immediate",
        data: &[],
        x: 0,
        code: &[opcodes::LDA_IMMEDIATE, 0x80, opcodes::NOP],
        budget: 3,
    },
    Program {
        name: "LDA zero page",
        data: &[(0x00FA, 229)],
        x: 0,
        code: &[opcodes::LDA_ZERO_PAGE, 0xFA],
        budget: 3,
    },
    Program {
        name: "LDA zero page,X",
        data: &[(0x00FA, 1), (0x00FB, 2)],
        x: 1,
        code: &[opcodes::LDA_ZERO_PAGE_X, 0xFA],
        budget: 4,
    },
    Program {
        name: "LDX immediate",
        data: &[],
        x: 0,
        code: &[opcodes::LDX_IMMEDIATE, 42],
        budget: 2,
    },
    Program {
        name: "LDY zero page",
        data: &[(0x0025, 64)],
        x: 0,
        code: &[opcodes::LDY_ZERO_PAGE, 0x25],
        budget: 3,
    },
    Program {
        name: "JSR",
        data: &[(0x4342, opcodes::LDA_IMMEDIATE), (0x4343, 21)],
        x: 0,
        code: &[opcodes::JSR, 0x42, 0x43],
        budget: 9,
    },
];

fn run(cpu: &mut CPU<FlatMemory>, program: &Program) -> Result<(), ExecutionError> {
    log::info!("=== {} ===", program.name);

    cpu.reset();
    for &(addr, value) in program.data {
        cpu.memory_mut().write(addr, value);
    }
    cpu.set_x(program.x);
    cpu.load(RESET_ADDRESS, program.code)?;

    let report = cpu.execute_observed(program.budget, &mut LogObserver::new())?;
    log::info!(
        "{}: retired {} instruction(s), {} unhandled, budget left {}",
        program.name,
        report.retired,
        report.unhandled.len(),
        report.remaining
    );
    Ok(())
}

/// Loads code at 0x0200 and boots through the reset vector instead of running
/// code placed at 0xFFFC.
fn run_vectored(cpu: &mut CPU<FlatMemory>) -> Result<(), ExecutionError> {
    log::info!("=== vectored boot ===");

    cpu.reset();
    cpu.load(
        0x0200,
        &[
            opcodes::LDA_IMMEDIATE,
            0x03,
            opcodes::LSR_ACCUMULATOR,
            opcodes::ORA_IMMEDIATE,
            0x40,
            opcodes::PHA,
        ],
    )?;
    cpu.load(RESET_ADDRESS, &0x0200u16.to_le_bytes())?;
    cpu.load_reset_vector();

    let report = cpu.execute_observed(6, &mut LogObserver::new())?;
    log::info!("vectored boot: A = 0x{:02x}, retired {}", cpu.a(), report.retired);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut cpu = CPU::new(FlatMemory::new());

    let result = PROGRAMS
        .iter()
        .try_for_each(|program| run(&mut cpu, program))
        .and_then(|()| run_vectored(&mut cpu));

    if let Err(error) = result {
        log::error!("{}", error);
        std::process::exit(1);
    }
}
