//! Fetch/execute controller, the only component with state-mutating
//! authority.
//!
//! One clock step either issues an instruction request (FETCH) or commits
//! ALU/branch-unit results (EXECUTE). Every EXECUTE step is
//! evaluate-then-commit: all candidate values are computed from the
//! snapshot of state at the start of the step before any field is written,
//! so no field is ever read after another field of the same step was
//! updated.

use crate::alu;
use crate::api::{MemoryPort, RunOutcome, StepOutcome};
use crate::branch;
use crate::decoder::decode;
use crate::encoding::Opcode;
use crate::state::{Phase, ProcessorState};

/// Advances the processor by exactly one clock step.
///
/// Transition rules, in priority order:
/// 1. Halt latch set: nothing changes, the phase toggle included.
/// 2. FETCH phase: latch `port.read_instruction(pc)`, flip to EXECUTE.
/// 3. EXECUTE phase: decode the latch, evaluate ALU and branch unit from
///    the pre-step snapshot (sampling `port.read_input()` only for `IN`),
///    commit all fields atomically, flip back to FETCH.
pub fn step_one(state: &mut ProcessorState, port: &mut dyn MemoryPort) -> StepOutcome {
    if state.halted() {
        return StepOutcome::Frozen;
    }

    match state.phase() {
        Phase::Fetch => {
            let address = state.program_counter();
            let word = port.read_instruction(address);
            state.set_instruction_latch(word);
            state.set_phase(Phase::Execute);
            StepOutcome::Fetched { address }
        }
        Phase::Execute => {
            let instruction = decode(state.instruction_latch());

            let port_input = if matches!(instruction.opcode, Opcode::In) {
                port.read_input()
            } else {
                0
            };

            let alu_result = alu::evaluate(
                instruction.opcode,
                state.accumulator(),
                instruction.operand,
                state.carry(),
                state.zero(),
                port_input,
            );
            let next_pc = branch::next_program_counter(
                instruction.opcode,
                instruction.operand,
                state.program_counter(),
                state.zero(),
                state.carry(),
            );
            let halts = matches!(instruction.opcode, Opcode::Hlt);

            state.set_accumulator(alu_result.accumulator);
            state.set_carry(alu_result.carry);
            state.set_zero(alu_result.zero);
            state.set_program_counter(next_pc);
            if halts {
                state.latch_halt();
            }
            state.set_phase(Phase::Fetch);

            StepOutcome::Executed {
                opcode: instruction.opcode,
            }
        }
    }
}

/// Advances the processor by one full instruction (fetch plus execute).
///
/// This is the conformance oracle's query granularity: after each call the
/// state reflects one committed instruction. If the machine is mid
/// instruction (phase already EXECUTE), only the pending commit runs. If
/// the halt latch is set, nothing changes.
pub fn step_instruction(state: &mut ProcessorState, port: &mut dyn MemoryPort) -> StepOutcome {
    match step_one(state, port) {
        StepOutcome::Fetched { .. } => step_one(state, port),
        outcome => outcome,
    }
}

/// Runs clock steps until the halt latch is set or `max_steps` is spent.
///
/// The bound is the external watchdog hook: a program with no reachable
/// `HLT` runs until the budget is exhausted, which the caller observes as
/// `halted == false`. The core itself never detects non-termination.
pub fn run(state: &mut ProcessorState, port: &mut dyn MemoryPort, max_steps: u32) -> RunOutcome {
    let mut steps = 0;
    while steps < max_steps && !state.halted() {
        step_one(state, port);
        steps += 1;
    }
    RunOutcome {
        steps,
        halted: state.halted(),
    }
}

#[cfg(test)]
mod tests {
    use super::{run, step_instruction, step_one};
    use crate::api::{MemoryPort, StepOutcome};
    use crate::encoding::Opcode;
    use crate::state::{Phase, ProcessorState};

    struct StubPort {
        words: [u8; 16],
        input: u8,
        instruction_reads: u32,
        input_reads: u32,
    }

    impl StubPort {
        fn new(program: &[u8]) -> Self {
            let mut words = [0; 16];
            words[..program.len()].copy_from_slice(program);
            Self {
                words,
                input: 0,
                instruction_reads: 0,
                input_reads: 0,
            }
        }
    }

    impl MemoryPort for StubPort {
        fn read_instruction(&mut self, address: u8) -> u8 {
            self.instruction_reads += 1;
            self.words[usize::from(address & 0x0F)]
        }

        fn read_input(&mut self) -> u8 {
            self.input_reads += 1;
            self.input
        }
    }

    #[test]
    fn fetch_step_latches_word_and_flips_to_execute() {
        let mut state = ProcessorState::default();
        let mut port = StubPort::new(&[0x1A]);

        let outcome = step_one(&mut state, &mut port);

        assert_eq!(outcome, StepOutcome::Fetched { address: 0 });
        assert_eq!(state.instruction_latch(), 0x1A);
        assert_eq!(state.phase(), Phase::Execute);
        assert_eq!(state.program_counter(), 0);
        assert_eq!(port.instruction_reads, 1);
    }

    #[test]
    fn execute_step_commits_and_flips_back_to_fetch() {
        let mut state = ProcessorState::default();
        let mut port = StubPort::new(&[0x1A]);

        let _ = step_one(&mut state, &mut port);
        let outcome = step_one(&mut state, &mut port);

        assert_eq!(outcome, StepOutcome::Executed { opcode: Opcode::Ldi });
        assert_eq!(state.accumulator(), 0xA);
        assert!(!state.zero());
        assert_eq!(state.program_counter(), 1);
        assert_eq!(state.phase(), Phase::Fetch);
    }

    #[test]
    fn halt_freezes_every_field_including_phase() {
        let mut state = ProcessorState::default();
        let mut port = StubPort::new(&[0xF0]);

        let _ = step_instruction(&mut state, &mut port);
        assert!(state.halted());
        let frozen = state.clone();

        for _ in 0..5 {
            assert_eq!(step_one(&mut state, &mut port), StepOutcome::Frozen);
            assert_eq!(state, frozen);
        }
        assert_eq!(state.phase(), Phase::Fetch);
        assert_eq!(port.instruction_reads, 1);
    }

    #[test]
    fn hlt_holds_the_program_counter() {
        let mut state = ProcessorState::default();
        let mut port = StubPort::new(&[0x00, 0x00, 0xF0]);

        let _ = run(&mut state, &mut port, 16);

        assert!(state.halted());
        assert_eq!(state.program_counter(), 2);
    }

    #[test]
    fn input_port_is_sampled_only_during_in_execute() {
        let mut state = ProcessorState::default();
        let mut port = StubPort::new(&[0x00, 0xE0, 0x20, 0xF0]);
        port.input = 9;

        let _ = step_instruction(&mut state, &mut port);
        assert_eq!(port.input_reads, 0);

        let _ = step_instruction(&mut state, &mut port);
        assert_eq!(port.input_reads, 1);
        assert_eq!(state.accumulator(), 9);

        let _ = step_instruction(&mut state, &mut port);
        let _ = step_instruction(&mut state, &mut port);
        assert_eq!(port.input_reads, 1);
    }

    #[test]
    fn branch_decision_uses_the_pre_step_flag_snapshot() {
        // JNZ while zero is set from reset: not taken, PC advances.
        let mut state = ProcessorState::default();
        let mut port = StubPort::new(&[0xD5]);

        let _ = step_instruction(&mut state, &mut port);

        assert_eq!(state.program_counter(), 1);
        assert!(state.zero());
    }

    #[test]
    fn step_instruction_completes_a_pending_execute_phase() {
        let mut state = ProcessorState::default();
        let mut port = StubPort::new(&[0x13]);

        let _ = step_one(&mut state, &mut port);
        assert_eq!(state.phase(), Phase::Execute);

        let outcome = step_instruction(&mut state, &mut port);
        assert_eq!(outcome, StepOutcome::Executed { opcode: Opcode::Ldi });
        assert_eq!(state.accumulator(), 3);
        assert_eq!(port.instruction_reads, 1);
    }

    #[test]
    fn run_reports_exhausted_budget_for_endless_programs() {
        // JMP 0 forever: the watchdog bound is the only stop condition.
        let mut state = ProcessorState::default();
        let mut port = StubPort::new(&[0xA0]);

        let outcome = run(&mut state, &mut port, 100);

        assert_eq!(outcome.steps, 100);
        assert!(!outcome.halted);
        assert!(!state.halted());
    }

    #[test]
    fn run_stops_on_halt_and_frozen_machine_consumes_no_budget() {
        let mut state = ProcessorState::default();
        let mut port = StubPort::new(&[0xF0]);

        let outcome = run(&mut state, &mut port, 100);
        assert_eq!(outcome.steps, 2);
        assert!(outcome.halted);

        let again = run(&mut state, &mut port, 100);
        assert_eq!(again.steps, 0);
        assert!(again.halted);
    }

    #[test]
    fn reset_at_a_step_boundary_wins_over_in_flight_execution() {
        let mut state = ProcessorState::default();
        let mut port = StubPort::new(&[0x17, 0xF0]);

        let _ = step_one(&mut state, &mut port);
        assert_eq!(state.phase(), Phase::Execute);

        state.reset();
        assert_eq!(state, ProcessorState::default());

        // The superseded EXECUTE never commits; the machine refetches.
        let outcome = step_one(&mut state, &mut port);
        assert_eq!(outcome, StepOutcome::Fetched { address: 0 });
    }
}
