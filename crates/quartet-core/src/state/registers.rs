//! Architectural state container for the Quartet-1 core.

use crate::encoding::NIBBLE_MASK;
use crate::state::Phase;

/// Full architectural state of the processor.
///
/// Owned and mutated exclusively by the fetch/execute controller, once per
/// clock step. The accumulator and program counter are always representable
/// in 4 bits; the setters enforce the mask. The halt latch is absorbing:
/// there is no architectural clear path, only [`ProcessorState::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ProcessorState {
    accumulator: u8,
    program_counter: u8,
    carry: bool,
    zero: bool,
    halted: bool,
    phase: Phase,
    instruction_latch: u8,
}

impl Default for ProcessorState {
    fn default() -> Self {
        Self {
            accumulator: 0,
            program_counter: 0,
            carry: false,
            zero: true,
            halted: false,
            phase: Phase::Fetch,
            instruction_latch: 0,
        }
    }
}

impl ProcessorState {
    /// Reinitializes every field to the reset values: accumulator 0,
    /// program counter 0, carry clear, zero set, halt latch clear, phase
    /// Fetch, instruction latch 0.
    ///
    /// Reset is not an error path; it may be asserted at any step boundary
    /// and unconditionally wins, regardless of phase or halt status.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reads the 4-bit accumulator.
    #[must_use]
    pub const fn accumulator(&self) -> u8 {
        self.accumulator
    }

    /// Writes the accumulator, masked to 4 bits.
    pub const fn set_accumulator(&mut self, value: u8) {
        self.accumulator = value & NIBBLE_MASK;
    }

    /// Reads the 4-bit program counter.
    #[must_use]
    pub const fn program_counter(&self) -> u8 {
        self.program_counter
    }

    /// Writes the program counter, masked to 4 bits.
    pub const fn set_program_counter(&mut self, value: u8) {
        self.program_counter = value & NIBBLE_MASK;
    }

    /// Reads the carry flag.
    #[must_use]
    pub const fn carry(&self) -> bool {
        self.carry
    }

    /// Writes the carry flag.
    pub const fn set_carry(&mut self, value: bool) {
        self.carry = value;
    }

    /// Reads the zero flag.
    #[must_use]
    pub const fn zero(&self) -> bool {
        self.zero
    }

    /// Writes the zero flag.
    pub const fn set_zero(&mut self, value: bool) {
        self.zero = value;
    }

    /// Reads the halt latch.
    #[must_use]
    pub const fn halted(&self) -> bool {
        self.halted
    }

    /// Sets the halt latch. The latch is sticky: once set it stays set
    /// until [`ProcessorState::reset`], and the controller freezes every
    /// field of this container, the phase toggle included.
    pub const fn latch_halt(&mut self) {
        self.halted = true;
    }

    /// Reads the control phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Writes the control phase.
    pub const fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Reads the 8-bit instruction latch.
    #[must_use]
    pub const fn instruction_latch(&self) -> u8 {
        self.instruction_latch
    }

    /// Writes the instruction latch with a freshly fetched word.
    pub const fn set_instruction_latch(&mut self, word: u8) {
        self.instruction_latch = word;
    }
}

#[cfg(test)]
mod tests {
    use super::ProcessorState;
    use crate::state::Phase;

    #[test]
    fn default_state_matches_reset_values() {
        let state = ProcessorState::default();
        assert_eq!(state.accumulator(), 0);
        assert_eq!(state.program_counter(), 0);
        assert!(!state.carry());
        assert!(state.zero());
        assert!(!state.halted());
        assert_eq!(state.phase(), Phase::Fetch);
        assert_eq!(state.instruction_latch(), 0);
    }

    #[test]
    fn accumulator_and_program_counter_writes_are_masked_to_four_bits() {
        let mut state = ProcessorState::default();
        state.set_accumulator(0x1F);
        state.set_program_counter(0xF3);
        assert_eq!(state.accumulator(), 0x0F);
        assert_eq!(state.program_counter(), 0x03);
    }

    #[test]
    fn halt_latch_has_no_architectural_clear_path() {
        let mut state = ProcessorState::default();
        state.latch_halt();
        assert!(state.halted());
        state.latch_halt();
        assert!(state.halted());
    }

    #[test]
    fn reset_restores_every_field_from_arbitrary_contents() {
        let mut state = ProcessorState::default();
        state.set_accumulator(0xB);
        state.set_program_counter(0x7);
        state.set_carry(true);
        state.set_zero(false);
        state.latch_halt();
        state.set_phase(Phase::Execute);
        state.set_instruction_latch(0xD1);

        state.reset();

        assert_eq!(state, ProcessorState::default());
    }

    #[test]
    fn reset_wins_over_halt_latch() {
        let mut state = ProcessorState::default();
        state.latch_halt();
        state.reset();
        assert!(!state.halted());
        assert_eq!(state.phase(), Phase::Fetch);
    }
}
