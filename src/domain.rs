//! Record model for historical events
//!
//! Defines [`Participant`], [`SubContest`], and [`Event`], plus the
//! first-past-the-post extraction rule the aggregation pipeline is built on.
//! Participants are compared by their stable name identity, never by
//! reference, so two independently deserialized references to the same
//! participant collapse into one aggregation group.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity string of the sentinel participant used when a sub-contest has
/// no recorded winner.
pub const UNKNOWN_PARTICIPANT: &str = "<no recorded winner>";

/// An entity that can win a sub-contest.
///
/// Immutable once created. Equality and hashing use the name string, so
/// participant identity survives independent loads of the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The sentinel stand-in for "no recorded winner".
    ///
    /// This is a valid aggregation key like any other: events without a
    /// recorded winner all group under it, and it legitimately appears in
    /// the result set when more than one such event exists.
    pub fn unknown() -> Self {
        Self(UNKNOWN_PARTICIPANT.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_PARTICIPANT
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Participant {
    /// Defaults to the sentinel so an absent `winner` field in a serialized
    /// record deserializes to "no recorded winner" instead of failing.
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One ordered unit of competition within an [`Event`].
///
/// The `winner` field holds the sentinel participant when the source record
/// carries no winner; missing-winner data is normal, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubContest {
    #[serde(default)]
    pub winner: Participant,
}

impl SubContest {
    pub fn won_by(winner: Participant) -> Self {
        Self { winner }
    }

    pub fn unrecorded() -> Self {
        Self {
            winner: Participant::unknown(),
        }
    }
}

/// A named competitive event composed of ordered sub-contests.
///
/// The name is the unique key into the record store. Sub-contests are kept
/// in finishing order; index 0 is the one the extraction rule reads. Every
/// well-formed event has at least one sub-contest, enforced at load time by
/// the dataset loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub sub_contests: Vec<SubContest>,
}

impl Event {
    pub fn new(name: impl Into<String>, sub_contests: Vec<SubContest>) -> Self {
        Self {
            name: name.into(),
            date: None,
            sub_contests,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Extract the winner of the first sub-contest.
    ///
    /// Pure and total: the sentinel flows through for an unrecorded winner,
    /// and an event somehow constructed without sub-contests degrades to the
    /// sentinel rather than panicking. Deterministic and side-effect-free so
    /// pipeline results are reproducible under any evaluation order.
    pub fn first_past_the_post(&self) -> Participant {
        self.sub_contests
            .first()
            .map(|sc| sc.winner.clone())
            .unwrap_or_else(Participant::unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_past_the_post_returns_first_winner() {
        let event = Event::new(
            "1973 Grand National",
            vec![
                SubContest::won_by(Participant::new("Red Rum")),
                SubContest::won_by(Participant::new("Crisp")),
            ],
        );
        assert_eq!(event.first_past_the_post(), Participant::new("Red Rum"));
    }

    #[test]
    fn test_first_past_the_post_unrecorded_winner_is_sentinel() {
        let event = Event::new("1839 Aintree Steeplechase", vec![SubContest::unrecorded()]);
        let winner = event.first_past_the_post();
        assert!(winner.is_unknown());
        assert_eq!(winner, Participant::unknown());
    }

    #[test]
    fn test_first_past_the_post_ignores_later_sub_contests() {
        // Only index 0 matters; a recorded winner later on does not rescue
        // an unrecorded first sub-contest.
        let event = Event::new(
            "1840 Aintree Steeplechase",
            vec![
                SubContest::unrecorded(),
                SubContest::won_by(Participant::new("Jerry")),
            ],
        );
        assert!(event.first_past_the_post().is_unknown());
    }

    #[test]
    fn test_participant_identity_equality() {
        let a = Participant::new("Arkle");
        let b = Participant::new(String::from("Arkle"));
        assert_eq!(a, b);

        use std::collections::HashSet;
        let set: HashSet<Participant> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_missing_winner_field_deserializes_to_sentinel() {
        let sc: SubContest = serde_json::from_str("{}").unwrap();
        assert!(sc.winner.is_unknown());
    }

    #[test]
    fn test_event_deserializes_from_record_line() {
        let line = r#"{"name":"1977 Grand National","date":"1977-04-02","sub_contests":[{"winner":"Red Rum"}]}"#;
        let event: Event = serde_json::from_str(line).unwrap();
        assert_eq!(event.name, "1977 Grand National");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(1977, 4, 2));
        assert_eq!(event.first_past_the_post(), Participant::new("Red Rum"));
    }
}
