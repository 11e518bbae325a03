//! Tests for InteractionMachine

use super::*;
use crate::machine::EventKind;
use proptest::prelude::*;

fn change(value: &str) -> MachineEvent {
    MachineEvent::new(EventKind::Change).with_value(value)
}

fn navigate(value: &str) -> MachineEvent {
    MachineEvent::new(EventKind::Navigate).with_value(value)
}

fn machine_in(state: InteractionState) -> InteractionMachine {
    let mut machine = InteractionMachine::new();
    match state {
        InteractionState::Idle => {}
        InteractionState::Suggesting => machine.transition(change("a")),
        InteractionState::Navigating => {
            machine.transition(change("a"));
            machine.transition(navigate("Apple"));
        }
        InteractionState::Interacting => {
            machine.transition(change("a"));
            machine.transition(EventKind::Interact);
        }
    }
    assert_eq!(machine.state(), state);
    machine
}

#[test]
fn test_new_machine_is_idle_with_empty_data() {
    let machine = InteractionMachine::new();
    assert_eq!(machine.state(), InteractionState::Idle);
    assert_eq!(machine.data(), &StateData::default());
    assert!(!machine.is_expanded());
}

#[test]
fn test_change_from_idle_suggests() {
    let mut machine = InteractionMachine::new();
    machine.transition(change("e"));

    assert_eq!(machine.state(), InteractionState::Suggesting);
    assert_eq!(machine.data().value, "e");
    assert_eq!(machine.data().navigation_value, None);
    assert!(machine.is_expanded());
}

#[test]
fn test_select_with_keyboard_commits_navigation_value() {
    let mut machine = machine_in(InteractionState::Suggesting);
    machine.transition(navigate("B"));
    machine.transition(EventKind::SelectWithKeyboard);

    assert_eq!(machine.state(), InteractionState::Idle);
    assert_eq!(machine.data().value, "B");
    assert_eq!(machine.data().navigation_value, None);
}

#[test]
fn test_rejected_event_leaves_machine_untouched() {
    let mut machine = machine_in(InteractionState::Suggesting);
    let before = machine.clone();

    machine.transition(EventKind::SelectWithKeyboard);

    assert_eq!(machine, before);
    assert_eq!(
        machine.data().last_event_type,
        Some(EventKind::Change),
        "reducer must not run for rejected events"
    );
}

#[test]
fn test_accepts_matches_transition_table() {
    let machine = machine_in(InteractionState::Navigating);
    assert!(machine.accepts(&MachineEvent::new(EventKind::SelectWithKeyboard)));
    assert!(!machine.accepts(&MachineEvent::new(EventKind::InitialChange)));
}

#[test]
fn test_idle_navigate_with_persisted_selection() {
    let mut machine = InteractionMachine::with_data(StateData::new("Banana"));
    machine.transition(MachineEvent::new(EventKind::Navigate).with_persist_selection(true));

    assert_eq!(machine.state(), InteractionState::Navigating);
    assert_eq!(machine.data().navigation_value.as_deref(), Some("Banana"));
}

#[test]
fn test_escape_closes_and_keeps_value() {
    let mut machine = machine_in(InteractionState::Navigating);
    machine.transition(EventKind::Escape);

    assert_eq!(machine.state(), InteractionState::Idle);
    assert_eq!(machine.data().value, "a");
    assert_eq!(machine.data().navigation_value, None);
}

#[test]
fn test_every_unaccepted_pair_is_a_no_op() {
    for state in InteractionState::ALL {
        for kind in EventKind::ALL {
            if state.on(kind).is_some() {
                continue;
            }
            let mut machine = machine_in(state);
            let before = machine.clone();
            machine.transition(MachineEvent::new(kind).with_value("x"));
            assert_eq!(machine, before, "{} on {}", state, kind);
        }
    }
}

fn arb_event() -> impl Strategy<Value = MachineEvent> {
    (
        prop::sample::select(EventKind::ALL.to_vec()),
        prop::option::of("[a-c]{0,2}"),
        prop::bool::ANY,
    )
        .prop_map(|(kind, value, persist)| {
            MachineEvent::new(kind)
                .with_optional_value(value)
                .with_persist_selection(persist)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Any event sequence: rejected events change nothing, accepted ones
    // land on the table's target state with reducer-computed data
    #[test]
    fn prop_transition_follows_table_and_reducer(
        events in prop::collection::vec(arb_event(), 0..20),
    ) {
        let mut machine = InteractionMachine::new();
        for event in events {
            let before = machine.clone();
            machine.transition(event.clone());

            match before.state().on(event.kind) {
                Some(next) => {
                    prop_assert_eq!(machine.state(), next);
                    prop_assert_eq!(machine.data(), &reduce(before.data(), &event));
                }
                None => prop_assert_eq!(&machine, &before),
            }
        }
    }
}
