//! Dataset loading for historical event records
//!
//! Reads a newline-delimited JSON resource, deserializes each line into an
//! [`Event`], validates the event invariant (at least one sub-contest), and
//! populates a fresh [`RecordStore`]. Malformed lines fail the whole load
//! with a line-numbered error; no partial store is ever returned, so the
//! aggregation phase only ever sees fully loaded, well-formed data.

use crate::domain::Event;
use crate::error::{DatasetError, DatasetResult};
use crate::store::RecordStore;
use std::path::Path;
use tracing::{debug, info};

/// Default logical name of the historical events dataset.
pub const DEFAULT_DATASET: &str = "data/historical_events.jsonl";

/// Load a record store from a newline-delimited JSON file.
pub async fn load(path: impl AsRef<Path>) -> DatasetResult<RecordStore> {
    let path = path.as_ref();
    debug!("loading historical events from {}", path.display());

    let content =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DatasetError::Read {
                path: path.to_path_buf(),
                source,
            })?;

    let store = parse_records(&content)?;
    info!(
        "loaded {} events from {}",
        store.len(),
        path.display()
    );
    Ok(store)
}

/// Parse newline-delimited JSON records into a record store.
///
/// Blank lines are skipped. Duplicate event names resolve last-write-wins
/// through [`RecordStore::put`]. Line numbers in errors are 1-based.
pub fn parse_records(content: &str) -> DatasetResult<RecordStore> {
    let mut store = RecordStore::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let event: Event =
            serde_json::from_str(raw).map_err(|source| DatasetError::Malformed { line, source })?;

        if event.sub_contests.is_empty() {
            return Err(DatasetError::EmptyEvent {
                name: event.name,
                line,
            });
        }

        store.put(event.name.clone(), event);
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Participant;

    #[test]
    fn test_parse_records_populates_store() {
        let content = r#"
{"name":"1973 Grand National","date":"1973-03-31","sub_contests":[{"winner":"Red Rum"}]}
{"name":"1974 Grand National","date":"1974-03-30","sub_contests":[{"winner":"Red Rum"}]}

{"name":"1975 Grand National","sub_contests":[{"winner":"L'Escargot"}]}
"#;
        let store = parse_records(content).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.get("1973 Grand National").unwrap().first_past_the_post(),
            Participant::new("Red Rum")
        );
    }

    #[test]
    fn test_parse_records_missing_winner_is_not_an_error() {
        let content = r#"{"name":"1839 Aintree Steeplechase","sub_contests":[{}]}"#;
        let store = parse_records(content).unwrap();
        assert!(store
            .get("1839 Aintree Steeplechase")
            .unwrap()
            .first_past_the_post()
            .is_unknown());
    }

    #[test]
    fn test_parse_records_rejects_malformed_line() {
        let content = "{\"name\":\"ok\",\"sub_contests\":[{}]}\nnot json at all\n";
        let err = parse_records(content).unwrap_err();
        match err {
            DatasetError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_records_rejects_event_without_sub_contests() {
        let content = r#"{"name":"1993 Grand National","sub_contests":[]}"#;
        let err = parse_records(content).unwrap_err();
        match err {
            DatasetError::EmptyEvent { name, line } => {
                assert_eq!(name, "1993 Grand National");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_records_duplicate_name_keeps_latest() {
        let content = r#"
{"name":"1981 Grand National","sub_contests":[{"winner":"Spartan Missile"}]}
{"name":"1981 Grand National","sub_contests":[{"winner":"Aldaniti"}]}
"#;
        let store = parse_records(content).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("1981 Grand National").unwrap().first_past_the_post(),
            Participant::new("Aldaniti")
        );
    }

    #[tokio::test]
    async fn test_load_missing_file_reports_path() {
        let err = load("data/does_not_exist.jsonl").await.unwrap_err();
        match err {
            DatasetError::Read { path, .. } => {
                assert!(path.ends_with("does_not_exist.jsonl"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
