//! In-memory record store keyed by event name
//!
//! Populated once during the load phase, then treated as read-only by the
//! aggregation pipeline. Load and aggregation never interleave: the loader
//! hands over an owned, fully populated store and the pipeline borrows it
//! immutably.

use crate::domain::Event;
use std::collections::HashMap;

/// Keyed mapping from event name to [`Event`].
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    events: HashMap<String, Event>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `name`.
    ///
    /// Last write wins, which makes bulk loading from a record stream
    /// idempotent per event name. Returns the displaced event, if any.
    pub fn put(&mut self, name: String, event: Event) -> Option<Event> {
        self.events.insert(name, event)
    }

    pub fn get(&self, name: &str) -> Option<&Event> {
        self.events.get(name)
    }

    /// A restartable view over the stored events.
    ///
    /// No ordering is guaranteed; downstream aggregation must not depend on
    /// iteration order.
    pub fn all(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
