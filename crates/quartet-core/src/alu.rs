//! Combinational ALU for the Quartet-1 core.
//!
//! One pure evaluation per EXECUTE step: candidate accumulator and flag
//! values are computed from the pre-step snapshot and committed by the
//! controller. All arithmetic is modulo 16; carry is the exact unsigned
//! overflow bit (`ADD`), borrow bit (`SUB`), or shifted-out bit
//! (`SHL`/`SHR`), never a saturation indicator.

use crate::encoding::{Opcode, NIBBLE_MASK};

/// Candidate next accumulator and flag values for one EXECUTE step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AluResult {
    /// Candidate accumulator value, already masked to 4 bits.
    pub accumulator: u8,
    /// Candidate carry flag.
    pub carry: bool,
    /// Candidate zero flag.
    pub zero: bool,
}

impl AluResult {
    const fn passthrough(accumulator: u8, carry: bool, zero: bool) -> Self {
        Self {
            accumulator,
            carry,
            zero,
        }
    }

    /// Flag-updating result form: carry is explicit (the arithmetic carry
    /// out, or the held carry-in for logic/load opcodes), zero is always
    /// recomputed from the 4-bit result.
    const fn with_result(accumulator: u8, carry: bool) -> Self {
        Self {
            accumulator,
            carry,
            zero: accumulator == 0,
        }
    }
}

/// Evaluates one opcode against the current architectural snapshot.
///
/// `port_input` is only consulted for `IN`; callers sample it fresh from
/// the external port during that opcode's EXECUTE step. Pure and total:
/// every input combination yields a defined result.
#[must_use]
pub const fn evaluate(
    opcode: Opcode,
    accumulator: u8,
    operand: u8,
    carry_in: bool,
    zero_in: bool,
    port_input: u8,
) -> AluResult {
    let acc = accumulator & NIBBLE_MASK;
    let operand = operand & NIBBLE_MASK;

    match opcode {
        Opcode::Nop | Opcode::Jmp | Opcode::Jz | Opcode::Jc | Opcode::Jnz | Opcode::Hlt => {
            AluResult::passthrough(acc, carry_in, zero_in)
        }
        Opcode::Ldi => AluResult::with_result(operand, carry_in),
        Opcode::Add => {
            let sum = acc + operand;
            AluResult::with_result(sum & NIBBLE_MASK, sum > NIBBLE_MASK)
        }
        Opcode::Sub => {
            AluResult::with_result(acc.wrapping_sub(operand) & NIBBLE_MASK, acc < operand)
        }
        Opcode::And => AluResult::with_result(acc & operand, carry_in),
        Opcode::Or => AluResult::with_result(acc | operand, carry_in),
        Opcode::Xor => AluResult::with_result(acc ^ operand, carry_in),
        Opcode::Not => AluResult::with_result(!acc & NIBBLE_MASK, carry_in),
        Opcode::Shl => AluResult::with_result((acc << 1) & NIBBLE_MASK, (acc & 0b1000) != 0),
        Opcode::Shr => AluResult::with_result(acc >> 1, (acc & 0b0001) != 0),
        Opcode::In => AluResult::with_result(port_input & NIBBLE_MASK, carry_in),
    }
}
