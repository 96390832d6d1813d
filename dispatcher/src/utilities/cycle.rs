use shared_resources::call::CallId;
use shared_resources::call_registry::CallRegistry;
use shared_resources::command::{Command, CommandKind};
use shared_resources::elevator_status::Elevator;
use shared_resources::snapshot::Snapshot;

use super::error::DispatchError;
use super::fsm::DecisionEngine;

#[derive(Debug, Clone)]
pub struct CycleReport {
    pub timestamp: u64,
    pub waiting: usize,
    pub commands: Vec<Command>,
    pub remaining: CallRegistry,
    pub boarded: Vec<CallId>,
}

impl CycleReport {
    pub fn summary(&self) -> String {
        format!(
            "cycle {}: {} elevators, {} calls waiting, {} boarded, {} left",
            self.timestamp,
            self.commands.len(),
            self.waiting,
            self.boarded.len(),
            self.remaining.len(),
        )
    }
}

/// Decides for every elevator in snapshot order against one shared registry.
/// Earlier elevators win calls that several could serve.
pub fn dispatch(
    engine: &DecisionEngine,
    elevators: &[Elevator],
    registry: &mut CallRegistry,
) -> Result<Vec<Command>, DispatchError> {
    let mut commands = Vec::with_capacity(elevators.len());
    for elevator in elevators {
        commands.push(engine.decide(elevator, registry)?);
    }
    Ok(commands)
}

pub fn run_cycle(engine: &DecisionEngine, snapshot: &Snapshot) -> Result<CycleReport, DispatchError> {
    let mut registry = CallRegistry::build(snapshot.calls.clone());
    let waiting = registry.len();

    let commands = dispatch(engine, &snapshot.elevators, &mut registry)?;
    let boarded: Vec<CallId> = commands
        .iter()
        .filter(|command| command.command == CommandKind::Enter)
        .filter_map(|command| command.call_ids())
        .flatten()
        .copied()
        .collect();

    Ok(CycleReport {
        timestamp: snapshot.timestamp,
        waiting: waiting,
        commands: commands,
        remaining: registry,
        boarded: boarded,
    })
}
