//! # Addressing Modes
//!
//! The addressing modes reachable from the supported instruction subset. Each mode
//! determines how the CPU interprets the operand bytes following an opcode.

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX
/// - **2 bytes**: Absolute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: NOP, PHA
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Example: LSR A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    /// The index addition costs one budget unit.
    ZeroPageX,

    /// Full 16-bit address.
    ///
    /// Example: JSR $4342
    Absolute,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub fn operand_bytes(self) -> u16 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate | AddressingMode::ZeroPage | AddressingMode::ZeroPageX => 1,
            AddressingMode::Absolute => 2,
        }
    }
}
