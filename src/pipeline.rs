//! Aggregation pipeline: extract, group, count, filter
//!
//! Transforms the full set of events into the set of participants with more
//! than one first-past-the-post win. Four logical stages compose the run:
//!
//! 1. **Extract** — map each event to its first-past-the-post participant.
//! 2. **Group by key** — partition the winners by participant identity.
//! 3. **Count** — cardinality per group.
//! 4. **Filter** — keep counts strictly greater than one.
//!
//! Grouping and counting are fused into [`WinTally`]. Counting is a
//! commutative, associative reduction, so a partitioned evaluation merged
//! with [`WinTally::merge`] is observably identical to the sequential fold;
//! [`run_partitioned`] exercises that shape. The pipeline is referentially
//! transparent over its input snapshot: repeated runs over an unchanged
//! store yield an equal result set regardless of iteration order.

use crate::domain::{Event, Participant};
use crate::store::RecordStore;
use std::collections::HashMap;
use tracing::debug;

/// Counts above this value qualify as multiple wins (strictly greater than).
pub const MULTIPLE_WINS_THRESHOLD: u64 = 1;

/// Per-participant count of first-past-the-post wins.
///
/// Built fresh per pipeline run; never persisted across runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WinTally {
    counts: HashMap<Participant, u64>,
}

impl WinTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one win for `participant`.
    pub fn add(&mut self, participant: Participant) {
        *self.counts.entry(participant).or_insert(0) += 1;
    }

    /// Tally a stream of winners, one entry per event.
    pub fn tally(winners: impl IntoIterator<Item = Participant>) -> Self {
        let mut tally = Self::new();
        for winner in winners {
            tally.add(winner);
        }
        tally
    }

    /// Combine two partial tallies by summing counts per key.
    ///
    /// Commutative and associative, so partial tallies built over disjoint
    /// partitions of the event set merge into the same totals in any order.
    pub fn merge(mut self, other: WinTally) -> WinTally {
        for (participant, count) in other.counts {
            *self.counts.entry(participant).or_insert(0) += count;
        }
        self
    }

    pub fn get(&self, participant: &Participant) -> u64 {
        self.counts.get(participant).copied().unwrap_or(0)
    }

    /// Sum of all counts; equals the number of events tallied.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Filter stage: keep participants whose count exceeds `threshold`.
    ///
    /// Entries at or below the threshold are dropped entirely, not zeroed.
    pub fn into_multiple_winners(self, threshold: u64) -> ResultSet {
        ResultSet {
            counts: self
                .counts
                .into_iter()
                .filter(|(_, count)| *count > threshold)
                .collect(),
        }
    }
}

/// Read-only view over the participants with multiple wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultSet {
    counts: HashMap<Participant, u64>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, participant: &Participant) -> Option<u64> {
        self.counts.get(participant).copied()
    }

    /// Iterate over `(participant, count)` pairs in unspecified order.
    ///
    /// Ordering for display is a presentation concern, see the report module.
    pub fn iter(&self) -> impl Iterator<Item = (&Participant, u64)> {
        self.counts.iter().map(|(p, c)| (p, *c))
    }
}

/// Extract stage: map events to their first-past-the-post winners.
///
/// Produces one participant per event; duplicates are expected and
/// meaningful, they are what the tally counts.
pub fn extract_winners<'a>(
    events: impl Iterator<Item = &'a Event>,
) -> impl Iterator<Item = Participant> {
    events.map(Event::first_past_the_post)
}

/// Run the full pipeline over a populated record store.
///
/// The single entrypoint: no configuration, the multiple-wins threshold is
/// fixed by the problem definition. Total over any well-formed store.
pub fn run(store: &RecordStore) -> ResultSet {
    let tally = WinTally::tally(extract_winners(store.all()));
    debug!(
        "tallied {} events across {} participants",
        tally.total(),
        tally.len()
    );
    tally.into_multiple_winners(MULTIPLE_WINS_THRESHOLD)
}

/// Run the pipeline as `partitions` independent chunks merged at the end.
///
/// Semantically identical to [`run`] for any partition width because the
/// tally merge sums per key. Partial tallies are merged once at the end,
/// never mutated concurrently, so no per-key locking is needed.
pub fn run_partitioned(store: &RecordStore, partitions: usize) -> ResultSet {
    let events: Vec<&Event> = store.all().collect();
    let chunk_size = events.len().div_ceil(partitions.max(1)).max(1);

    events
        .chunks(chunk_size)
        .map(|chunk| WinTally::tally(chunk.iter().map(|e| e.first_past_the_post())))
        .fold(WinTally::new(), WinTally::merge)
        .into_multiple_winners(MULTIPLE_WINS_THRESHOLD)
}
