use super::call::Call;
use super::elevator_status::Elevator;

/// State of the building as reported by the authority at the start of a cycle.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub timestamp: u64,
    pub elevators: Vec<Elevator>,
    #[serde(default)]
    pub calls: Vec<Call>,
    #[serde(default)]
    pub is_end: bool,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct SessionStart {
    pub token: String,
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub is_end: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elevator_status::ElevatorStatus;

    #[test]
    fn parses_oncalls_body() {
        let body = r#"{
            "token": "abc",
            "timestamp": 3,
            "elevators": [
                {"id": 0, "floor": 1, "passengers": [{"id": 2, "timestamp": 0, "start": 1, "end": 5}], "status": "OPENED"},
                {"id": 1, "floor": 4, "passengers": [], "status": "UPWARD"}
            ],
            "calls": [{"id": 3, "timestamp": 1, "start": 6, "end": 2}],
            "is_end": false
        }"#;
        let snapshot: Snapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.elevators.len(), 2);
        assert_eq!(snapshot.elevators[0].status, ElevatorStatus::Opened);
        assert_eq!(snapshot.elevators[0].passengers[0].end, 5);
        assert_eq!(snapshot.calls[0].id, 3);
        assert!(!snapshot.is_end);
    }

    #[test]
    fn missing_calls_and_flag_default() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"elevators": []}"#).unwrap();
        assert!(snapshot.calls.is_empty());
        assert!(!snapshot.is_end);
    }
}
