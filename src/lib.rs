//! # Formbook
//!
//! Batch analysis of historical racing events: load a newline-delimited JSON
//! dataset of events, extract the first-past-the-post winner of each, and
//! report every participant who won more than once.
//!
//! ## Usage
//!
//! ```bash
//! formbook [DATASET] [-v]
//! ```
//!
//! ## Modules
//!
//! - `domain` - Record model: participants, sub-contests, events, and the
//!   first-past-the-post extraction rule
//! - `store` - In-memory record store keyed by event name
//! - `dataset` - Newline-delimited JSON loader that populates the store
//! - `pipeline` - The extract, group, count, filter aggregation pipeline
//! - `report` - Console rendering of the result set
//! - `error` - Structured load-time error types

pub mod dataset;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod store;
