use chrono::NaiveDate;
use medialine_protocol::MediaKind;
use serde::{Deserialize, Serialize};

/// A tagged media entry as handed over by the ingestion pipeline.
///
/// Entries may carry several start and finish dates (re-reads, multiple
/// seasons); extraction collapses them to a single earliest-start /
/// latest-finish span. An entry with no dates at all never becomes a
/// span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaEntry {
    pub title: String,
    pub kind: MediaKind,
    #[serde(default)]
    pub started: Vec<NaiveDate>,
    #[serde(default)]
    pub finished: Vec<NaiveDate>,
}
