//! Property-based tests for a dispatch cycle.
//!
//! Generates random buildings, waiting calls and elevator snapshots and
//! checks the invariants every cycle must uphold.

use std::collections::HashSet;

use dispatcher::utilities::cycle::run_cycle;
use dispatcher::utilities::fsm::DecisionEngine;
use proptest::prelude::*;

use shared_resources::call::{Call, CallId};
use shared_resources::command::{Command, CommandKind};
use shared_resources::config::DispatchConfig;
use shared_resources::elevator_status::{Elevator, ElevatorStatus};
use shared_resources::snapshot::Snapshot;

const MAX_HEIGHT: u32 = 25;
const MAX_CAPACITY: usize = 8;

// ===========================================================================
// Generators
// ===========================================================================

fn arb_trip() -> impl Strategy<Value = (u32, u32)> {
    (1..=MAX_HEIGHT, 1..=MAX_HEIGHT).prop_filter("start differs from end", |(start, end)| start != end)
}

fn arb_status() -> impl Strategy<Value = ElevatorStatus> {
    prop_oneof![
        Just(ElevatorStatus::Stopped),
        Just(ElevatorStatus::Opened),
        Just(ElevatorStatus::Upward),
        Just(ElevatorStatus::Downward),
    ]
}

/// Waiting calls with ids below 1000; duplicates are allowed on purpose.
fn arb_calls() -> impl Strategy<Value = Vec<Call>> {
    proptest::collection::vec((0..60u32, arb_trip()), 0..40)
        .prop_map(|calls| calls.into_iter().map(|(id, (start, end))| Call::new(id, start, end)).collect())
}

/// Elevators carrying passengers with ids from 1000 upward, never above capacity.
fn arb_elevators() -> impl Strategy<Value = Vec<Elevator>> {
    proptest::collection::vec(
        (1..=MAX_HEIGHT, arb_status(), proptest::collection::vec(arb_trip(), 0..=MAX_CAPACITY)),
        1..5,
    ).prop_map(|elevators| {
        elevators.into_iter().enumerate().map(|(index, (floor, status, trips))| {
            let passengers = trips.into_iter().enumerate().map(|(i, (start, end))| {
                Call::new(1000 + (index * 100 + i) as CallId, start, end)
            }).collect();
            Elevator::new(index as u32, floor, status).with_passengers(passengers)
        }).collect()
    })
}

fn engine() -> DecisionEngine {
    DecisionEngine::new(DispatchConfig::new(MAX_HEIGHT, MAX_CAPACITY).unwrap())
}

fn entered(commands: &[Command]) -> Vec<CallId> {
    commands.iter()
        .filter(|command| command.command == CommandKind::Enter)
        .filter_map(|command| command.call_ids())
        .flatten()
        .copied()
        .collect()
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Remaining calls are exactly the waiting calls minus those that entered.
    #[test]
    fn registry_loses_exactly_the_boarded_calls(calls in arb_calls(), elevators in arb_elevators()) {
        let snapshot = Snapshot { elevators: elevators, calls: calls.clone(), ..Default::default() };
        let report = run_cycle(&engine(), &snapshot).unwrap();

        let before: HashSet<CallId> = calls.iter().map(|call| call.id).collect();
        let boarded: HashSet<CallId> = entered(&report.commands).into_iter().collect();
        let after: HashSet<CallId> = report.remaining.ids().into_iter().collect();

        prop_assert!(boarded.is_subset(&before));
        prop_assert_eq!(after, before.difference(&boarded).copied().collect::<HashSet<CallId>>());
    }

    /// No call boards two elevators in one cycle.
    #[test]
    fn no_call_boards_twice(calls in arb_calls(), elevators in arb_elevators()) {
        let snapshot = Snapshot { elevators: elevators, calls: calls, ..Default::default() };
        let report = run_cycle(&engine(), &snapshot).unwrap();

        let ids = entered(&report.commands);
        let unique: HashSet<CallId> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), unique.len());
    }

    /// One command per elevator, in order; only ENTER and EXIT carry ids, never empty.
    #[test]
    fn commands_are_normalized(calls in arb_calls(), elevators in arb_elevators()) {
        let snapshot = Snapshot { elevators: elevators.clone(), calls: calls, ..Default::default() };
        let report = run_cycle(&engine(), &snapshot).unwrap();

        prop_assert_eq!(report.commands.len(), elevators.len());
        for (elevator, command) in elevators.iter().zip(&report.commands) {
            prop_assert_eq!(command.elevator_id, elevator.id);
            match command.call_ids() {
                Some(ids) => {
                    prop_assert!(command.command.carries_calls());
                    prop_assert!(!ids.is_empty());
                }
                None => {
                    prop_assert!(command.command != CommandKind::Enter);
                }
            }
            let json = serde_json::to_value(command).unwrap();
            prop_assert_eq!(json.get("call_ids").is_some(), command.call_ids().is_some());
        }
    }

    /// Boarding never pushes a car over capacity.
    #[test]
    fn capacity_is_respected(calls in arb_calls(), elevators in arb_elevators()) {
        let snapshot = Snapshot { elevators: elevators.clone(), calls: calls, ..Default::default() };
        let report = run_cycle(&engine(), &snapshot).unwrap();

        for (elevator, command) in elevators.iter().zip(&report.commands) {
            if command.command == CommandKind::Enter {
                let boarding = command.call_ids().map_or(0, |ids| ids.len());
                prop_assert!(elevator.passengers.len() + boarding <= MAX_CAPACITY);
            }
        }
    }

    /// A moving car at the top or bottom floor always stops.
    #[test]
    fn moving_car_stops_at_boundary(
        calls in arb_calls(),
        trips in proptest::collection::vec(arb_trip(), 0..=MAX_CAPACITY),
        upward in any::<bool>(),
    ) {
        let (floor, status) = if upward {
            (MAX_HEIGHT, ElevatorStatus::Upward)
        } else {
            (1, ElevatorStatus::Downward)
        };
        let passengers = trips.into_iter().enumerate()
            .map(|(i, (start, end))| Call::new(1000 + i as CallId, start, end))
            .collect();
        let elevator = Elevator::new(0, floor, status).with_passengers(passengers);
        let snapshot = Snapshot { elevators: vec![elevator], calls: calls, ..Default::default() };

        let report = run_cycle(&engine(), &snapshot).unwrap();
        prop_assert_eq!(&report.commands[0], &Command::stop(0));
    }
}
