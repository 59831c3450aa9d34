//! Console rendering of the result set
//!
//! Presentation only: the pipeline's result set has no iteration order, so
//! the report imposes one (count descending, then name) to keep output
//! stable across runs.

use crate::pipeline::ResultSet;
use std::fmt::Write;

/// Render the result set as a size line followed by one line per entry.
pub fn format_results(results: &ResultSet) -> String {
    let mut entries: Vec<_> = results.iter().collect();
    entries.sort_by(|(pa, ca), (pb, cb)| cb.cmp(ca).then_with(|| pa.name().cmp(pb.name())));

    let mut out = format!("Result set size: {}\n", results.len());
    for (participant, count) in entries {
        // The writer is a String; this cannot fail.
        let _ = writeln!(out, "{participant} : {count}");
    }
    out
}
