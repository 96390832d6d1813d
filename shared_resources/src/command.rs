use super::call::{CallId, Direction};
use super::elevator_status::ElevatorId;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandKind {
    Enter,
    Stop,
    Open,
    Exit,
    Close,
    Up,
    Down,
}

impl CommandKind {
    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => CommandKind::Up,
            Direction::Down => CommandKind::Down,
        }
    }

    pub fn as_string(self) -> String {
        match self {
            CommandKind::Enter => String::from("ENTER"),
            CommandKind::Stop => String::from("STOP"),
            CommandKind::Open => String::from("OPEN"),
            CommandKind::Exit => String::from("EXIT"),
            CommandKind::Close => String::from("CLOSE"),
            CommandKind::Up => String::from("UP"),
            CommandKind::Down => String::from("DOWN"),
        }
    }

    pub fn carries_calls(self) -> bool {
        matches!(self, CommandKind::Enter | CommandKind::Exit)
    }
}

/// The single instruction issued to one elevator for the coming cycle.
///
/// `call_ids` only ever holds ids for ENTER and EXIT, and is left out of the
/// JSON body when empty.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub elevator_id: ElevatorId,
    pub command: CommandKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    call_ids: Vec<CallId>,
}

impl Command {
    fn new(elevator_id: ElevatorId, command: CommandKind, call_ids: Vec<CallId>) -> Self {
        Command {
            elevator_id: elevator_id,
            command: command,
            call_ids: call_ids,
        }
    }

    pub fn stop(elevator_id: ElevatorId) -> Self {
        Command::new(elevator_id, CommandKind::Stop, Vec::new())
    }

    pub fn open(elevator_id: ElevatorId) -> Self {
        Command::new(elevator_id, CommandKind::Open, Vec::new())
    }

    pub fn close(elevator_id: ElevatorId) -> Self {
        Command::new(elevator_id, CommandKind::Close, Vec::new())
    }

    pub fn go(elevator_id: ElevatorId, direction: Direction) -> Self {
        Command::new(elevator_id, CommandKind::from_direction(direction), Vec::new())
    }

    pub fn enter(elevator_id: ElevatorId, call_ids: Vec<CallId>) -> Self {
        Command::new(elevator_id, CommandKind::Enter, call_ids)
    }

    pub fn exit(elevator_id: ElevatorId, call_ids: Vec<CallId>) -> Self {
        Command::new(elevator_id, CommandKind::Exit, call_ids)
    }

    pub fn call_ids(&self) -> Option<&[CallId]> {
        if self.call_ids.is_empty() { None } else { Some(&self.call_ids) }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub commands: Vec<Command>,
}
