//! Instruction decoder for the Quartet-1 ISA.
//!
//! Splits an 8-bit instruction word into opcode and operand fields. Decode
//! is a pure total function: every word value maps to an assigned opcode,
//! so there is no fault path.

use crate::encoding::{Opcode, NIBBLE_MASK};

/// Decoded instruction with both fields extracted.
///
/// The operand nibble is always captured, even for opcodes that ignore it;
/// whether it carries meaning is answered by [`Opcode::uses_operand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DecodedInstruction {
    /// Operation selector from the high nibble.
    pub opcode: Opcode,
    /// Immediate value or absolute branch target from the low nibble.
    pub operand: u8,
}

impl DecodedInstruction {
    /// Re-encodes this instruction back into an 8-bit word.
    #[must_use]
    pub const fn encode(self) -> u8 {
        (self.opcode.nibble() << 4) | (self.operand & NIBBLE_MASK)
    }
}

/// Decodes an 8-bit instruction word.
///
/// Opcode is the high nibble, operand the low nibble. Total mapping, no
/// side effects, never fails.
#[must_use]
pub const fn decode(word: u8) -> DecodedInstruction {
    DecodedInstruction {
        opcode: Opcode::from_nibble(word >> 4),
        operand: word & NIBBLE_MASK,
    }
}
