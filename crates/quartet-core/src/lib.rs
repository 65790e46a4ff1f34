//! Cycle-accurate behavioral core for the Quartet-1 4-bit accumulator
//! processor.
//!
//! The crate models the instruction semantics, arithmetic/flag rules, and
//! the two-phase fetch/execute control discipline of the processor. The
//! decoder, ALU, and branch unit are stateless combinational functions
//! re-evaluated each EXECUTE step; the controller is the only component
//! with state-mutating authority, and the halt latch freezes every state
//! transition, the phase toggle included, until reset.

/// Deterministic opcode assignment table.
pub mod encoding;
pub use encoding::{Opcode, NIBBLE_MASK, OPCODE_COUNT, OPCODE_TABLE};

/// Instruction decode (pure, total field extraction).
pub mod decoder;
pub use decoder::{decode, DecodedInstruction};

/// Combinational ALU evaluation.
pub mod alu;
pub use alu::{evaluate, AluResult};

/// Branch unit computing the candidate next program counter.
pub mod branch;
pub use branch::next_program_counter;

/// Architectural state model primitives.
pub mod state;
pub use state::{Phase, ProcessorState};

/// Host-facing contracts and observable step outcomes.
pub mod api;
pub use api::{
    pack_status, MemoryPort, RunOutcome, StepOutcome, STATUS_CARRY, STATUS_HALTED, STATUS_PHASE,
    STATUS_ZERO,
};

/// Fetch/execute controller state machine.
pub mod controller;
pub use controller::{run, step_instruction, step_one};

/// Reference external memory collaborator.
pub mod memory;
pub use memory::{ProgramImageError, ProgramMemory, PROGRAM_WORDS};

/// Instruction disassembly helpers.
pub mod disasm;
pub use disasm::{disassemble, disassemble_program};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
