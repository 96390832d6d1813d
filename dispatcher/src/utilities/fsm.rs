/// ----- DECISION ENGINE -----
/// Finite state machine choosing one command per elevator and cycle from the
/// elevator's reported status. Boarding decisions remove the boarded calls from
/// the shared registry so later elevators in the same cycle cannot claim them.

use log::debug;

use shared_resources::call::{Call, CallId, Direction, Floor};
use shared_resources::call_registry::CallRegistry;
use shared_resources::command::Command;
use shared_resources::config::DispatchConfig;
use shared_resources::elevator_status::{Elevator, ElevatorStatus};

use super::error::DispatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallCounts {
    pub up: usize,
    pub down: usize,
}

impl CallCounts {
    pub fn is_empty(&self) -> bool {
        self.up == 0 && self.down == 0
    }
}

#[derive(Debug, Clone)]
pub struct DecisionEngine {
    config: DispatchConfig,
}

impl DecisionEngine {
    pub fn new(config: DispatchConfig) -> Self {
        DecisionEngine { config: config }
    }

    pub fn decide(&self, elevator: &Elevator, registry: &mut CallRegistry) -> Result<Command, DispatchError> {
        // resolved once; passengers do not change during a decision
        let direction = resolve_direction(&elevator.passengers, elevator.floor, self.config.max_height);

        let command = match elevator.status {
            ElevatorStatus::Stopped => self.stopped(elevator, registry, direction)?,
            ElevatorStatus::Opened => self.opened(elevator, registry, direction),
            ElevatorStatus::Upward => self.moving(elevator, registry, Direction::Up),
            ElevatorStatus::Downward => self.moving(elevator, registry, Direction::Down),
        };

        debug!(
            "elevator {} {} at floor {} with {} passengers -> {}",
            elevator.id,
            elevator.status.as_string(),
            elevator.floor,
            elevator.passengers.len(),
            command.command.as_string(),
        );
        Ok(command)
    }

    fn stopped(
        &self,
        elevator: &Elevator,
        registry: &CallRegistry,
        direction: Option<Direction>,
    ) -> Result<Command, DispatchError> {
        if !elevator.exiting_here().is_empty() {
            return Ok(Command::open(elevator.id));
        }
        if registry.has_waiting_at(elevator.floor) && !elevator.is_full(self.config.max_capacity) {
            return Ok(Command::open(elevator.id));
        }
        if !elevator.passengers.is_empty() {
            let direction = direction.ok_or(DispatchError::DirectionUnresolved { elevator_id: elevator.id })?;
            return Ok(Command::go(elevator.id, direction));
        }

        // idle: same-floor calls pull both ways
        let counts = calls_around(registry, elevator.floor, true);
        let command = if counts.is_empty() {
            Command::stop(elevator.id)
        } else if counts.up > counts.down {
            Command::go(elevator.id, Direction::Up)
        } else if counts.down > counts.up {
            Command::go(elevator.id, Direction::Down)
        } else {
            Command::go(elevator.id, Direction::from_midpoint(elevator.floor, self.config.max_height))
        };
        Ok(command)
    }

    fn opened(
        &self,
        elevator: &Elevator,
        registry: &mut CallRegistry,
        direction: Option<Direction>,
    ) -> Command {
        let exiting = elevator.exiting_here();
        if !exiting.is_empty() {
            return Command::exit(elevator.id, exiting.iter().map(|call| call.id).collect());
        }

        let available = elevator.remaining_capacity(self.config.max_capacity);
        if available == 0 || !registry.has_waiting_at(elevator.floor) {
            return Command::close(elevator.id);
        }

        let boarding = select_boarding(registry.waiting_at(elevator.floor), direction, available);
        for id in &boarding {
            registry.remove(*id);
        }
        Command::enter(elevator.id, boarding)
    }

    fn moving(&self, elevator: &Elevator, registry: &CallRegistry, heading: Direction) -> Command {
        if self.at_boundary(elevator.floor, heading) {
            return Command::stop(elevator.id);
        }
        if !elevator.exiting_here().is_empty() {
            return Command::stop(elevator.id);
        }
        if registry.has_waiting_at(elevator.floor) {
            // a full car passes by calls it cannot take
            return if elevator.is_full(self.config.max_capacity) {
                Command::go(elevator.id, heading)
            } else {
                Command::stop(elevator.id)
            };
        }

        let counts = calls_around(registry, elevator.floor, false);
        let ahead = match heading {
            Direction::Up => counts.up,
            Direction::Down => counts.down,
        };
        if ahead > 0 {
            Command::go(elevator.id, heading)
        } else {
            Command::stop(elevator.id)
        }
    }

    fn at_boundary(&self, floor: Floor, heading: Direction) -> bool {
        match heading {
            Direction::Up => floor >= self.config.max_height,
            Direction::Down => floor <= 1,
        }
    }
}

/// Majority direction of the passengers' trips, `None` for an empty car.
pub fn resolve_direction(passengers: &[Call], floor: Floor, max_height: Floor) -> Option<Direction> {
    if passengers.is_empty() {
        return None;
    }
    let up = passengers.iter().filter(|passenger| passenger.is_upward()).count();
    let down = passengers.len() - up;
    if up > down {
        Some(Direction::Up)
    } else if down > up {
        Some(Direction::Down)
    } else {
        Some(Direction::from_midpoint(floor, max_height))
    }
}

/// Counts waiting calls strictly above and below `floor`. With `include_here`,
/// calls starting at `floor` count toward both sides.
pub fn calls_around(registry: &CallRegistry, floor: Floor, include_here: bool) -> CallCounts {
    let mut counts = CallCounts::default();
    for call in registry.ordered() {
        if call.start > floor {
            counts.up += 1;
        } else if call.start < floor {
            counts.down += 1;
        } else if include_here {
            counts.up += 1;
            counts.down += 1;
        }
    }
    counts
}

/// Picks who boards from the calls waiting at this floor, in registry order.
/// Calls heading the car's way go first; if none do, anyone fills the car.
fn select_boarding(waiting: Vec<&Call>, direction: Option<Direction>, available: usize) -> Vec<CallId> {
    let same_way: Vec<&Call> = match direction {
        Some(direction) => waiting.iter().copied().filter(|call| call.direction() == direction).collect(),
        None => waiting.clone(),
    };
    let chosen = if same_way.is_empty() { waiting } else { same_way };
    chosen.into_iter().take(available).map(|call| call.id).collect()
}
