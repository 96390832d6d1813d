use super::call::{Call, Floor};

pub type ElevatorId = u32;

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum ElevatorStatus {
    Stopped,
    Opened,
    Upward,
    Downward,
}

impl ElevatorStatus {
    pub fn as_string(&self) -> String {
        match self {
            ElevatorStatus::Stopped => String::from("STOPPED"),
            ElevatorStatus::Opened => String::from("OPENED"),
            ElevatorStatus::Upward => String::from("UPWARD"),
            ElevatorStatus::Downward => String::from("DOWNWARD"),
        }
    }
}

/// One elevator as reported by the snapshot of the current cycle.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Elevator {
    pub id: ElevatorId,
    pub floor: Floor,
    #[serde(default)]
    pub passengers: Vec<Call>,
    pub status: ElevatorStatus,
}

impl Elevator {
    pub fn new(id: ElevatorId, floor: Floor, status: ElevatorStatus) -> Self {
        Elevator { 
            id: id, 
            floor: floor, 
            passengers: Vec::new(), 
            status: status,
        }
    }

    pub fn with_passengers(mut self, passengers: Vec<Call>) -> Self {
        self.passengers = passengers;
        self
    }

    pub fn exiting_here(&self) -> Vec<&Call> {
        self.passengers
            .iter()
            .filter(|passenger| passenger.end == self.floor)
            .collect()
    }

    pub fn remaining_capacity(&self, max_capacity: usize) -> usize {
        max_capacity.saturating_sub(self.passengers.len())
    }

    pub fn is_full(&self, max_capacity: usize) -> bool {
        self.remaining_capacity(max_capacity) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_uppercase_wire_names() {
        let status: ElevatorStatus = serde_json::from_str("\"DOWNWARD\"").unwrap();
        assert_eq!(status, ElevatorStatus::Downward);
        assert_eq!(serde_json::to_string(&ElevatorStatus::Opened).unwrap(), "\"OPENED\"");
    }

    #[test]
    fn exiting_here_matches_destination() {
        let elevator = Elevator::new(0, 4, ElevatorStatus::Opened).with_passengers(vec![
            Call::new(1, 1, 4),
            Call::new(2, 1, 6),
            Call::new(3, 8, 4),
        ]);
        let ids: Vec<u32> = elevator.exiting_here().iter().map(|call| call.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn capacity_saturates_when_overloaded() {
        let passengers = (0..9).map(|id| Call::new(id, 1, 5)).collect();
        let elevator = Elevator::new(0, 1, ElevatorStatus::Stopped).with_passengers(passengers);
        assert_eq!(elevator.remaining_capacity(8), 0);
        assert!(elevator.is_full(8));
    }
}
