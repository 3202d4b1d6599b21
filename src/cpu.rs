//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the processor state and the
//! budget-driven fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 16-bit, see `StackMode` for how it addresses memory
//! - **Status flags**: C, Z, I, D, B, V, N (individual bool fields)
//!
//! ## Execution Model
//!
//! - `step()`: fetch, decode and run one instruction against a `Budget`
//! - `execute()`: run instructions while the budget is positive
//!
//! Every primitive memory access charges the budget. A dispatched instruction
//! always completes, so `execute` may finish with a negative budget.

use std::fmt;

use crate::config::{CpuConfig, StackMode, UnhandledOpcodePolicy};
use crate::observer::{Observer, StepRecord};
use crate::{instructions, opcodes, AddressingMode, Budget, ExecutionError, MemoryBus, UnhandledOpcode, MEMORY_SIZE};

/// Address PC is set to on reset, and where the reset vector is stored.
pub const RESET_ADDRESS: u16 = 0xFFFC;

/// Stack pointer value after reset.
pub const STACK_RESET: u16 = 0x0100;

/// Outcome of a single `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A handled instruction ran to completion.
    Retired(u8),

    /// The opcode had no handler and the CPU carried on.
    Unhandled(UnhandledOpcode),
}

/// Summary of one `execute` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Handled instructions run to completion.
    pub retired: u64,

    /// Budget left when the loop stopped; zero or negative unless the call failed early.
    pub remaining: i64,

    /// Unhandled opcodes met along the way, in order.
    pub unhandled: Vec<UnhandledOpcode>,
}

/// Copy of the register file and status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub sp: u16,
    pub flag_c: bool,
    pub flag_z: bool,
    pub flag_i: bool,
    pub flag_d: bool,
    pub flag_b: bool,
    pub flag_v: bool,
    pub flag_n: bool,
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Accumulator: {} Registers (X: {} Y: {}) StackPointer: 0x{:04x} ProgramCounter: 0x{:04x}",
            self.a, self.x, self.y, self.sp, self.pc
        )?;
        write!(
            f,
            "Flags -> Carry: {} Zero: {} Interrupt: {} Decimal: {} Break: {} oVerflow: {} Negative: {}",
            self.flag_c as u8,
            self.flag_z as u8,
            self.flag_i as u8,
            self.flag_d as u8,
            self.flag_b as u8,
            self.flag_v as u8,
            self.flag_n as u8
        )
    }
}

/// Where an instruction's operand lives once its addressing mode is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// The accumulator itself (accumulator and implied modes).
    Accumulator,

    /// A constant taken from the instruction stream.
    Value(u8),

    /// A resolved memory address.
    Address(u16),
}

/// CPU state and execution context.
///
/// The CPU owns its memory bus. It is generic over the memory implementation via
/// the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use mini6502::{opcodes, FlatMemory, MemoryBus, CPU};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset();
///
/// cpu.memory_mut().write(0x00FA, 229);
/// cpu.load(0xFFFC, &[opcodes::LDA_ZERO_PAGE, 0xFA]).unwrap();
///
/// let report = cpu.execute(3).unwrap();
/// assert_eq!(report.remaining, 0);
/// assert_eq!(cpu.a(), 229);
/// assert!(cpu.flag_n());
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer
    pub(crate) sp: u16,

    /// Carry flag
    pub(crate) flag_c: bool,

    /// Zero flag
    pub(crate) flag_z: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Decimal mode flag
    pub(crate) flag_d: bool,

    /// Break flag
    pub(crate) flag_b: bool,

    /// Overflow flag
    pub(crate) flag_v: bool,

    /// Negative flag
    pub(crate) flag_n: bool,

    /// Most recently fetched opcode
    last_opcode: Option<u8>,

    config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU in the canonical reset register state with the default config.
    ///
    /// Memory is taken as-is; call `reset()` to zero-fill it.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU in the canonical reset register state.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: RESET_ADDRESS,
            sp: STACK_RESET,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
            last_opcode: None,
            config,
            memory,
        }
    }

    /// Forces the canonical state and zero-fills memory.
    ///
    /// PC = 0xFFFC, SP = 0x0100, A = X = Y = 0 and all seven flags cleared.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.pc = RESET_ADDRESS;
        self.sp = STACK_RESET;
        self.flag_c = false;
        self.flag_z = false;
        self.flag_i = false;
        self.flag_d = false;
        self.flag_b = false;
        self.flag_v = false;
        self.flag_n = false;
        self.last_opcode = None;
        self.memory.clear();
    }

    /// Loads PC from the little-endian reset vector at 0xFFFC/0xFFFD.
    ///
    /// For hosts that place code elsewhere and store its address in the vector.
    /// Costs no budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use mini6502::{FlatMemory, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.reset();
    /// cpu.load(0xFFFC, &[0x00, 0x02]).unwrap();
    /// cpu.load_reset_vector();
    /// assert_eq!(cpu.pc(), 0x0200);
    /// ```
    pub fn load_reset_vector(&mut self) {
        let low = self.memory.read(RESET_ADDRESS);
        let high = self.memory.read(RESET_ADDRESS + 1);
        self.pc = u16::from_le_bytes([low, high]);
    }

    /// Writes `bytes` into memory starting at `start`.
    pub fn load(&mut self, start: u16, bytes: &[u8]) -> Result<(), ExecutionError> {
        self.memory.load(start, bytes)
    }

    // ========== Primitives ==========

    /// Reads the byte at PC, advances PC and charges one budget unit.
    pub fn fetch_byte(&mut self, budget: &mut Budget) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        budget.spend(1);
        value
    }

    /// Reads a little-endian word at PC, advances PC by two and charges two units.
    pub fn fetch_word(&mut self, budget: &mut Budget) -> u16 {
        let low = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        let high = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        budget.spend(2);
        u16::from_le_bytes([low, high])
    }

    /// Reads the byte at an already-resolved address, charging one unit.
    pub fn read_byte(&mut self, addr: u16, budget: &mut Budget) -> u8 {
        budget.spend(1);
        self.memory.read(addr)
    }

    /// Sets Zero and Negative from `value`; no other flag changes.
    pub fn set_nz_flags(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    // ========== Operand Resolution ==========

    /// Consumes the operand bytes for `mode` and reports where the operand lives.
    pub(crate) fn fetch_operand(&mut self, mode: AddressingMode, budget: &mut Budget) -> Operand {
        match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Value(self.fetch_byte(budget)),
            AddressingMode::ZeroPage => Operand::Address(self.fetch_byte(budget) as u16),
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte(budget);
                // Index addition wraps within the zero page
                budget.spend(1);
                Operand::Address(base.wrapping_add(self.x) as u16)
            }
            AddressingMode::Absolute => Operand::Address(self.fetch_word(budget)),
        }
    }

    /// Reads the operand value, charging for the memory read when there is one.
    pub(crate) fn operand_value(&mut self, operand: Operand, budget: &mut Budget) -> u8 {
        match operand {
            Operand::Accumulator => self.a,
            Operand::Value(value) => value,
            Operand::Address(addr) => self.read_byte(addr, budget),
        }
    }

    // ========== Stack ==========

    /// Pushes one byte according to the configured stack mode. Costs no budget.
    pub(crate) fn push_byte(&mut self, value: u8) {
        match self.config.stack_mode {
            StackMode::Flat => {
                self.memory.write(self.sp, value);
                self.sp = self.sp.wrapping_sub(1);
            }
            StackMode::Page => {
                let offset = self.sp as u8;
                self.memory.write(STACK_RESET | offset as u16, value);
                self.sp = STACK_RESET | offset.wrapping_sub(1) as u16;
            }
        }
    }

    /// Fails when the flat stack has no room for a return word below the end of memory.
    pub(crate) fn check_return_address_fits(&self) -> Result<(), ExecutionError> {
        match self.config.stack_mode {
            StackMode::Flat if self.sp == u16::MAX => Err(ExecutionError::AddressOutOfRange(MEMORY_SIZE)),
            _ => Ok(()),
        }
    }

    /// Stores a subroutine return address according to the configured stack mode,
    /// charging two units.
    pub(crate) fn push_return_address(&mut self, address: u16, budget: &mut Budget) -> Result<(), ExecutionError> {
        match self.config.stack_mode {
            StackMode::Flat => {
                self.memory.write_word(self.sp, address, budget)?;
                self.sp = self.sp.wrapping_add(2);
            }
            StackMode::Page => {
                let [low, high] = address.to_le_bytes();
                self.push_byte(high);
                self.push_byte(low);
                budget.spend(2);
            }
        }
        Ok(())
    }

    // ========== Execution ==========

    /// Executes one instruction.
    ///
    /// Fetches the opcode at PC (one budget unit), decodes it through the
    /// instruction table and runs its handler to completion.
    ///
    /// # Returns
    ///
    /// - `Ok(Step::Retired(opcode))` for a handled instruction
    /// - `Ok(Step::Unhandled(..))` for an unknown opcode under `UnhandledOpcodePolicy::Continue`
    /// - `Err(ExecutionError::UnhandledOpcode(..))` for an unknown opcode under `Halt`
    /// - `Err(ExecutionError::AddressOutOfRange(..))` when a word write leaves memory
    pub fn step(&mut self, budget: &mut Budget) -> Result<Step, ExecutionError> {
        let address = self.pc;
        let opcode = self.fetch_byte(budget);
        self.last_opcode = Some(opcode);

        let Some(instruction) = opcodes::decode(opcode) else {
            let unhandled = UnhandledOpcode { opcode, address };
            return match self.config.unhandled_opcodes {
                UnhandledOpcodePolicy::Continue => {
                    log::warn!("Instruction not handled, opcode: 0x{:02X} at 0x{:04X}", opcode, address);
                    Ok(Step::Unhandled(unhandled))
                }
                UnhandledOpcodePolicy::Halt => Err(ExecutionError::UnhandledOpcode(unhandled)),
            };
        };

        instructions::execute(self, instruction, budget)?;

        log::trace!(
            "{:04X} {:02X} {} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:04X}",
            address,
            opcode,
            instruction.mnemonic,
            self.a,
            self.x,
            self.y,
            self.status(),
            self.sp
        );

        Ok(Step::Retired(opcode))
    }

    /// Runs instructions while the budget is positive.
    ///
    /// A budget of zero or less performs no work.
    ///
    /// On error the report is dropped. Registers and memory keep the effects of
    /// every instruction retired before the failure; the failing instruction has
    /// only had its opcode fetched (PC one past the opcode). Observers passed to
    /// `execute_observed` have already seen each retired instruction.
    pub fn execute(&mut self, cycles: i64) -> Result<ExecutionReport, ExecutionError> {
        self.execute_observed(cycles, &mut ())
    }

    /// Like `execute`, reporting every retired instruction to `observer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mini6502::{opcodes, FlatMemory, Observer, StepRecord, CPU};
    ///
    /// #[derive(Default)]
    /// struct Recorder {
    ///     seen: Vec<(u8, u8, i64)>,
    /// }
    ///
    /// impl Observer for Recorder {
    ///     fn on_retired(&mut self, record: &StepRecord) {
    ///         self.seen.push((record.opcode, record.registers.x, record.remaining));
    ///     }
    /// }
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.reset();
    /// cpu.load(0xFFFC, &[opcodes::LDX_IMMEDIATE, 42]).unwrap();
    ///
    /// let mut recorder = Recorder::default();
    /// cpu.execute_observed(2, &mut recorder).unwrap();
    ///
    /// assert_eq!(recorder.seen, vec![(opcodes::LDX_IMMEDIATE, 42, 0)]);
    /// ```
    pub fn execute_observed<O>(&mut self, cycles: i64, observer: &mut O) -> Result<ExecutionReport, ExecutionError>
    where
        O: Observer + ?Sized,
    {
        let mut budget = Budget::new(cycles);
        let mut report = ExecutionReport::default();

        while !budget.is_exhausted() {
            match self.step(&mut budget)? {
                Step::Retired(opcode) => {
                    report.retired += 1;
                    let record = StepRecord {
                        opcode,
                        registers: self.registers(),
                        remaining: budget.remaining(),
                        memory: &self.memory,
                    };
                    observer.on_retired(&record);
                }
                Step::Unhandled(unhandled) => {
                    observer.on_unhandled(unhandled);
                    report.unhandled.push(unhandled);
                }
            }
        }

        report.remaining = budget.remaining();
        Ok(report)
    }

    // ========== State Access ==========

    /// Returns a copy of all registers and flags.
    pub fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            x: self.x,
            y: self.y,
            pc: self.pc,
            sp: self.sp,
            flag_c: self.flag_c,
            flag_z: self.flag_z,
            flag_i: self.flag_i,
            flag_d: self.flag_d,
            flag_b: self.flag_b,
            flag_v: self.flag_v,
            flag_n: self.flag_n,
        }
    }

    /// Returns the most recently fetched opcode, if any since the last reset.
    pub fn last_opcode(&self) -> Option<u8> {
        self.last_opcode
    }

    /// Returns the configuration this CPU was built with.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Borrows the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutably borrows the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u16 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC), bit 5 always 1.
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b00100000;

        if self.flag_n {
            status |= 0b10000000;
        }
        if self.flag_v {
            status |= 0b01000000;
        }
        if self.flag_b {
            status |= 0b00010000;
        }
        if self.flag_d {
            status |= 0b00001000;
        }
        if self.flag_i {
            status |= 0b00000100;
        }
        if self.flag_z {
            status |= 0b00000010;
        }
        if self.flag_c {
            status |= 0b00000001;
        }

        status
    }

    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u16) {
        self.sp = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }
}
