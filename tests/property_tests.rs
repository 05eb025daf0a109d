//! Property-based tests for the state machine.
//!
//! These tests use proptest to drive machines built from random tables
//! through random operation sequences and compare them to a plain model
//! of the undo/redo stacks.

use proptest::prelude::*;
use retrace::{MachineConfig, MachineError, StateDef, StateMachine, TransitionTable};

const MAX_STATES: usize = 5;
const EVENTS: usize = 3;

#[derive(Clone, Debug)]
enum Op {
    Change(usize),
    Trigger(usize),
    Undo,
    Redo,
    Reset,
    Clear,
}

fn state_name(i: usize) -> String {
    format!("s{i}")
}

fn event_name(i: usize) -> String {
    format!("e{i}")
}

prop_compose! {
    fn arbitrary_config()(n in 1..=MAX_STATES)(
        n in Just(n),
        edges in prop::collection::vec((0..n, 0..EVENTS, 0..n), 0..12),
    ) -> MachineConfig {
        let mut defs = vec![StateDef::new(); n];
        for (from, event, to) in edges {
            defs[from] = std::mem::take(&mut defs[from]).on(event_name(event), state_name(to));
        }
        let table = defs
            .into_iter()
            .enumerate()
            .fold(TransitionTable::new(), |table, (i, def)| table.with_state(state_name(i), def));
        MachineConfig::new(table, state_name(0))
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    // Indices one past the generated range produce unknown states and events
    prop_oneof![
        (0..=MAX_STATES).prop_map(Op::Change),
        (0..=EVENTS).prop_map(Op::Trigger),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Reset),
        Just(Op::Clear),
    ]
}

/// Reference model of the machine's bookkeeping.
struct Model {
    initial: String,
    current: String,
    past: Vec<String>,
    future: Vec<String>,
}

impl Model {
    fn new(initial: &str) -> Self {
        Self {
            initial: initial.to_string(),
            current: initial.to_string(),
            past: Vec::new(),
            future: Vec::new(),
        }
    }

    fn go(&mut self, target: String) {
        self.past.push(std::mem::replace(&mut self.current, target));
        self.future.clear();
    }

    fn apply(&mut self, table: &TransitionTable, op: &Op) {
        match op {
            Op::Change(i) => {
                let target = state_name(*i);
                if table.contains(&target) {
                    self.go(target);
                }
            }
            Op::Trigger(i) => {
                if let Some(target) = table.resolve(&self.current, &event_name(*i)) {
                    self.go(target.to_string());
                }
            }
            Op::Undo => {
                if let Some(previous) = self.past.pop() {
                    self.future.push(std::mem::replace(&mut self.current, previous));
                }
            }
            Op::Redo => {
                if let Some(next) = self.future.pop() {
                    self.past.push(std::mem::replace(&mut self.current, next));
                }
            }
            Op::Reset => self.current.clone_from(&self.initial),
            Op::Clear => {
                self.past.clear();
                self.future.clear();
            }
        }
    }
}

fn run(machine: &mut StateMachine, op: &Op) {
    match op {
        Op::Change(i) => {
            let _ = machine.change_state(&state_name(*i));
        }
        Op::Trigger(i) => {
            let _ = machine.trigger(&event_name(*i));
        }
        Op::Undo => {
            machine.undo();
        }
        Op::Redo => {
            machine.redo();
        }
        Op::Reset => machine.reset(),
        Op::Clear => machine.clear_history(),
    }
}

proptest! {
    #[test]
    fn machine_matches_stack_model(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..40),
    ) {
        let table = config.states.clone();
        let mut machine = StateMachine::new(config).unwrap();
        let mut model = Model::new(machine.initial());

        for op in &ops {
            run(&mut machine, op);
            model.apply(&table, op);

            prop_assert_eq!(machine.get_state(), model.current.as_str());
            prop_assert_eq!(machine.history(), model.past.as_slice());
            prop_assert_eq!(machine.future(), model.future.as_slice());
        }
    }

    #[test]
    fn current_and_history_stay_within_table(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..40),
    ) {
        let mut machine = StateMachine::new(config).unwrap();

        for op in &ops {
            run(&mut machine, op);
        }

        let table = machine.states();
        prop_assert!(table.contains(machine.get_state()));
        prop_assert!(machine.history().iter().all(|s| table.contains(s)));
        prop_assert!(machine.future().iter().all(|s| table.contains(s)));
    }

    #[test]
    fn undo_then_redo_restores_state(
        config in arbitrary_config(),
        target in 0..MAX_STATES,
    ) {
        let mut machine = StateMachine::new(config).unwrap();
        let target = state_name(target % machine.states().len());
        let start = machine.get_state().to_string();

        machine.change_state(&target).unwrap();
        prop_assert!(machine.undo());
        prop_assert_eq!(machine.get_state(), start.as_str());
        prop_assert!(machine.redo());
        prop_assert_eq!(machine.get_state(), target.as_str());
    }

    #[test]
    fn new_transition_invalidates_redo(
        config in arbitrary_config(),
        first in 0..MAX_STATES,
        second in 0..MAX_STATES,
    ) {
        let mut machine = StateMachine::new(config).unwrap();
        let n = machine.states().len();

        machine.change_state(&state_name(first % n)).unwrap();
        prop_assert!(machine.undo());
        machine.change_state(&state_name(second % n)).unwrap();
        prop_assert!(!machine.redo());
    }

    #[test]
    fn failed_operations_do_not_mutate(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut machine = StateMachine::new(config).unwrap();
        for op in &ops {
            run(&mut machine, op);
        }

        let state = machine.get_state().to_string();
        let history = machine.history().to_vec();
        let future = machine.future().to_vec();

        let unknown_state = machine.change_state("no-such-state");
        let is_state_not_found = matches!(unknown_state, Err(MachineError::StateNotFound { .. }));
        prop_assert!(is_state_not_found);
        let unknown_event = machine.trigger("no-such-event");
        let is_event_not_allowed = matches!(unknown_event, Err(MachineError::EventNotAllowed { .. }));
        prop_assert!(is_event_not_allowed);

        prop_assert_eq!(machine.get_state(), state.as_str());
        prop_assert_eq!(machine.history(), history.as_slice());
        prop_assert_eq!(machine.future(), future.as_slice());
    }

    #[test]
    fn clear_history_disables_undo_and_redo(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut machine = StateMachine::new(config).unwrap();
        for op in &ops {
            run(&mut machine, op);
        }
        let state = machine.get_state().to_string();

        machine.clear_history();
        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.get_state(), state.as_str());
    }

    #[test]
    fn get_states_filter_matches_table(
        config in arbitrary_config(),
        event in 0..EVENTS,
    ) {
        let machine = StateMachine::new(config).unwrap();
        let event = event_name(event);

        let all = machine.get_states(None);
        prop_assert_eq!(all.len(), machine.states().len());

        let handling = machine.get_states(Some(&event));
        for state in &all {
            let handles = machine.states().resolve(state, &event).is_some();
            prop_assert_eq!(handling.contains(state), handles);
        }
    }
}
