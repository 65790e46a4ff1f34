//! Branch unit computing the candidate next program counter.

use crate::encoding::{Opcode, NIBBLE_MASK};

/// Computes the candidate next program counter for one EXECUTE step.
///
/// A taken branch loads the operand as an absolute 4-bit target. `HLT`
/// holds the current address. Everything else advances by one, wrapping
/// modulo 16. Pure and total.
#[must_use]
pub const fn next_program_counter(
    opcode: Opcode,
    operand: u8,
    program_counter: u8,
    zero: bool,
    carry: bool,
) -> u8 {
    let taken = match opcode {
        Opcode::Jmp => true,
        Opcode::Jz => zero,
        Opcode::Jc => carry,
        Opcode::Jnz => !zero,
        _ => false,
    };

    if taken {
        operand & NIBBLE_MASK
    } else if matches!(opcode, Opcode::Hlt) {
        program_counter & NIBBLE_MASK
    } else {
        (program_counter + 1) & NIBBLE_MASK
    }
}
