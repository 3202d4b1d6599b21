//! # Instruction Table
//!
//! A 256-entry lookup table indexed by opcode byte. Entries for opcodes outside the
//! supported subset are `None`, so adding an instruction means adding one table row
//! and one handler.

use crate::addressing::AddressingMode;

/// LDA #imm
pub const LDA_IMMEDIATE: u8 = 0xA9;
/// LDA zp
pub const LDA_ZERO_PAGE: u8 = 0xA5;
/// LDA zp,X
pub const LDA_ZERO_PAGE_X: u8 = 0xB5;
/// LDX #imm
pub const LDX_IMMEDIATE: u8 = 0xA2;
/// LDX zp
pub const LDX_ZERO_PAGE: u8 = 0xA6;
/// LDY #imm
pub const LDY_IMMEDIATE: u8 = 0xA0;
/// LDY zp
pub const LDY_ZERO_PAGE: u8 = 0xA4;
/// LSR A
pub const LSR_ACCUMULATOR: u8 = 0x4A;
/// LSR zp
pub const LSR_ZERO_PAGE: u8 = 0x46;
/// ORA #imm
pub const ORA_IMMEDIATE: u8 = 0x09;
/// ORA zp
pub const ORA_ZERO_PAGE: u8 = 0x05;
/// PHA
pub const PHA: u8 = 0x48;
/// JSR abs
pub const JSR: u8 = 0x20;
/// NOP
pub const NOP: u8 = 0xEA;

/// The operation an opcode performs, independent of its addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Load accumulator
    Lda,
    /// Load X register
    Ldx,
    /// Load Y register
    Ldy,
    /// Logical shift right
    Lsr,
    /// Inclusive OR into accumulator
    Ora,
    /// Push accumulator
    Pha,
    /// Jump to subroutine
    Jsr,
    /// No operation
    Nop,
}

/// Decoded form of a handled opcode.
///
/// # Examples
///
/// ```
/// use mini6502::{decode, AddressingMode, Operation};
///
/// let lda = decode(0xB5).unwrap();
/// assert_eq!(lda.mnemonic, "LDA");
/// assert_eq!(lda.operation, Operation::Lda);
/// assert_eq!(lda.addressing_mode, AddressingMode::ZeroPageX);
///
/// assert!(decode(0x00).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Three-letter instruction name.
    pub mnemonic: &'static str,

    /// What the instruction does.
    pub operation: Operation,

    /// How the operand is located.
    pub addressing_mode: AddressingMode,
}

impl Instruction {
    const fn new(mnemonic: &'static str, operation: Operation, addressing_mode: AddressingMode) -> Self {
        Self {
            mnemonic,
            operation,
            addressing_mode,
        }
    }

    /// Total instruction size in bytes, opcode included.
    pub fn size_bytes(&self) -> u16 {
        1 + self.addressing_mode.operand_bytes()
    }
}

/// Opcode lookup table; `None` marks an unhandled opcode.
pub static INSTRUCTION_TABLE: [Option<Instruction>; 256] = build_table();

const fn build_table() -> [Option<Instruction>; 256] {
    use AddressingMode::*;

    let mut table: [Option<Instruction>; 256] = [None; 256];

    table[LDA_IMMEDIATE as usize] = Some(Instruction::new("LDA", Operation::Lda, Immediate));
    table[LDA_ZERO_PAGE as usize] = Some(Instruction::new("LDA", Operation::Lda, ZeroPage));
    table[LDA_ZERO_PAGE_X as usize] = Some(Instruction::new("LDA", Operation::Lda, ZeroPageX));
    table[LDX_IMMEDIATE as usize] = Some(Instruction::new("LDX", Operation::Ldx, Immediate));
    table[LDX_ZERO_PAGE as usize] = Some(Instruction::new("LDX", Operation::Ldx, ZeroPage));
    table[LDY_IMMEDIATE as usize] = Some(Instruction::new("LDY", Operation::Ldy, Immediate));
    table[LDY_ZERO_PAGE as usize] = Some(Instruction::new("LDY", Operation::Ldy, ZeroPage));
    table[LSR_ACCUMULATOR as usize] = Some(Instruction::new("LSR", Operation::Lsr, Accumulator));
    table[LSR_ZERO_PAGE as usize] = Some(Instruction::new("LSR", Operation::Lsr, ZeroPage));
    table[ORA_IMMEDIATE as usize] = Some(Instruction::new("ORA", Operation::Ora, Immediate));
    table[ORA_ZERO_PAGE as usize] = Some(Instruction::new("ORA", Operation::Ora, ZeroPage));
    table[PHA as usize] = Some(Instruction::new("PHA", Operation::Pha, Implicit));
    table[JSR as usize] = Some(Instruction::new("JSR", Operation::Jsr, Absolute));
    table[NOP as usize] = Some(Instruction::new("NOP", Operation::Nop, Implicit));

    table
}

/// Looks up the instruction for an opcode byte.
pub fn decode(opcode: u8) -> Option<&'static Instruction> {
    INSTRUCTION_TABLE[opcode as usize].as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handled_opcode_count() {
        let handled = INSTRUCTION_TABLE.iter().filter(|entry| entry.is_some()).count();
        assert_eq!(handled, 14);
    }

    #[test]
    fn test_sizes() {
        assert_eq!(decode(NOP).unwrap().size_bytes(), 1);
        assert_eq!(decode(LSR_ACCUMULATOR).unwrap().size_bytes(), 1);
        assert_eq!(decode(ORA_ZERO_PAGE).unwrap().size_bytes(), 2);
        assert_eq!(decode(JSR).unwrap().size_bytes(), 3);
    }
}
