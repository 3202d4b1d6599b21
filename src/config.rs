//! # CPU Configuration
//!
//! Behavior switches chosen when a CPU is constructed.

/// How the stack pointer addresses memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackMode {
    /// SP is a full 16-bit address with no page confinement.
    ///
    /// PHA stores at SP then decrements it. JSR stores the return address as a
    /// little-endian word at SP then adds 2, so calls and pushes grow the stack in
    /// opposite directions.
    #[default]
    Flat,

    /// Conventional page-one stack.
    ///
    /// Only the low byte of SP moves; pushes land at `0x0100 | low byte` and the
    /// low byte wraps within the page. JSR pushes the return address high byte
    /// first, both pushes growing the stack downward.
    Page,
}

/// What the engine does with an opcode that has no handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnhandledOpcodePolicy {
    /// Log a warning, record the opcode in the execution report and keep going.
    #[default]
    Continue,

    /// Stop and return `ExecutionError::UnhandledOpcode`.
    Halt,
}

/// Construction-time settings for a CPU.
///
/// # Examples
///
/// ```
/// use mini6502::{CpuConfig, FlatMemory, StackMode, UnhandledOpcodePolicy, CPU};
///
/// let config = CpuConfig {
///     stack_mode: StackMode::Page,
///     unhandled_opcodes: UnhandledOpcodePolicy::Halt,
/// };
/// let cpu = CPU::with_config(FlatMemory::new(), config);
/// assert_eq!(cpu.config().stack_mode, StackMode::Page);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuConfig {
    /// Stack addressing behavior.
    pub stack_mode: StackMode,

    /// Unhandled opcode behavior.
    pub unhandled_opcodes: UnhandledOpcodePolicy,
}
