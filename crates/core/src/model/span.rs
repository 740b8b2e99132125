use medialine_protocol::{MediaKind, SpanId};
use serde::{Deserialize, Serialize};

/// A tracked item's occupied interval on the slice axis.
///
/// `start` and `end` are inclusive slice indices. A span missing its
/// end is in progress, with a fade-out window inferred after `start`.
/// One missing its start is finish-only, with a fade-in window
/// inferred before `end`. At least one side is set; entries with neither are
/// filtered out before they reach the allocator, which only skips the
/// violation defensively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    pub id: SpanId,
    pub title: String,
    pub kind: MediaKind,
    /// First slice occupied, `None` for finish-only spans.
    pub start: Option<i64>,
    /// Last slice occupied (inclusive), `None` for in-progress spans.
    pub end: Option<i64>,
}

impl Span {
    /// Slice count between start and end, when both are known.
    pub fn duration(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(end - start + 1),
            _ => None,
        }
    }

    /// Whether at least one side of the interval is known.
    pub fn is_dated(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}
