//! Host-facing contracts for embedding the Quartet-1 core.
//!
//! The core itself is total and infallible; these types describe what the
//! enclosing system supplies (the external memory port) and what it may
//! observe at each committed step.

use crate::encoding::Opcode;
use crate::state::{Phase, ProcessorState};

/// Status word bit for the carry flag.
pub const STATUS_CARRY: u8 = 1 << 0;
/// Status word bit for the zero flag.
pub const STATUS_ZERO: u8 = 1 << 1;
/// Status word bit for the halt latch.
pub const STATUS_HALTED: u8 = 1 << 2;
/// Status word bit for the control phase (set while in Execute).
pub const STATUS_PHASE: u8 = 1 << 3;

/// Synchronous external memory and input collaborator.
///
/// Both reads must produce a value within the same logical clock step; no
/// multi-step latency is modeled here. If the surrounding system wants to
/// model latency, that is the collaborator's concern, not the core's.
pub trait MemoryPort {
    /// Supplies the instruction word stored at a 4-bit address.
    ///
    /// The address space is fixed at 16 words; wrapping happens in the
    /// branch unit and controller, never inside this call.
    fn read_instruction(&mut self, address: u8) -> u8;

    /// Supplies the general-purpose 4-bit input value.
    ///
    /// Sampled only during the EXECUTE step of an `IN` instruction.
    fn read_input(&mut self) -> u8;
}

/// Observable result of one clock step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// Halt latch is set; no field of the processor state changed.
    Frozen,
    /// FETCH step: an address request was issued to the memory port and
    /// the returned word was latched.
    Fetched {
        /// Address placed on the memory port this step.
        address: u8,
    },
    /// EXECUTE step: decoded the latch and committed all results.
    Executed {
        /// Opcode retired by this step.
        opcode: Opcode,
    },
}

/// Aggregate outcome from running multiple steps under an external bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunOutcome {
    /// Number of clock steps consumed before stopping.
    pub steps: u32,
    /// True when the run stopped because the halt latch was set.
    pub halted: bool,
}

/// Packs flags, halt latch, and phase into a single status word.
///
/// Boundary adapter only: the internal state keeps named fields, and
/// enclosing packages that want a wired status bus pack it here.
#[must_use]
pub const fn pack_status(state: &ProcessorState) -> u8 {
    let mut status = 0;
    if state.carry() {
        status |= STATUS_CARRY;
    }
    if state.zero() {
        status |= STATUS_ZERO;
    }
    if state.halted() {
        status |= STATUS_HALTED;
    }
    if matches!(state.phase(), Phase::Execute) {
        status |= STATUS_PHASE;
    }
    status
}
