use std::cmp::Ordering;

pub type CallId = u32;
pub type Floor = u32;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Upward when `end` is above `start`; everything else counts as downward.
    pub fn between(start: Floor, end: Floor) -> Self {
        match end.cmp(&start) {
            Ordering::Greater => Direction::Up,
            Ordering::Less | Ordering::Equal => Direction::Down,
        }
    }

    /// Tie-break used whenever up and down carry equal weight.
    pub fn from_midpoint(floor: Floor, max_height: Floor) -> Self {
        if floor >= max_height / 2 { Direction::Up } else { Direction::Down }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub id: CallId,
    #[serde(default)]
    pub timestamp: u64,
    pub start: Floor,
    pub end: Floor,
}

impl Call {
    pub fn new(id: CallId, start: Floor, end: Floor) -> Self {
        Call {
            id: id,
            timestamp: 0,
            start: start,
            end: end,
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::between(self.start, self.end)
    }

    pub fn is_upward(&self) -> bool {
        self.direction() == Direction::Up
    }
}
