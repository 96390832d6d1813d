use std::collections::HashMap;

use super::call::{Call, CallId, Floor};

/// Calls that have been reported but not yet boarded, keyed by call id.
///
/// The registry is rebuilt from every snapshot and shared by all elevators of a
/// cycle. Ordering is never cached: [`CallRegistry::ordered`] sorts on every
/// call, so a removal made while deciding for one elevator is seen by every
/// later query in the same cycle.
#[derive(Debug, Clone, Default)]
pub struct CallRegistry {
    calls: HashMap<CallId, Call>,
}

impl CallRegistry {
    pub fn new() -> Self {
        CallRegistry { 
            calls: HashMap::new(),
        }
    }

    /// Duplicate ids collapse to the first occurrence.
    pub fn build(calls: Vec<Call>) -> Self {
        let mut registry = CallRegistry::new();
        for call in calls {
            registry.calls.entry(call.id).or_insert(call);
        }
        registry
    }

    /// Removing an id that is not present does nothing.
    pub fn remove(&mut self, id: CallId) -> Option<Call> {
        self.calls.remove(&id)
    }

    pub fn contains(&self, id: CallId) -> bool {
        self.calls.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn ids(&self) -> Vec<CallId> {
        let mut ids: Vec<CallId> = self.calls.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Waiting calls ascending by start floor, ties broken by id.
    pub fn ordered(&self) -> Vec<&Call> {
        let mut calls: Vec<&Call> = self.calls.values().collect();
        calls.sort_by_key(|call| (call.start, call.id));
        calls
    }

    pub fn waiting_at(&self, floor: Floor) -> Vec<&Call> {
        self.ordered()
            .into_iter()
            .filter(|call| call.start == floor)
            .collect()
    }

    pub fn has_waiting_at(&self, floor: Floor) -> bool {
        self.calls.values().any(|call| call.start == floor)
    }
}
