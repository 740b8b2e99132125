use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a tracked media span, unique within one layout run.
///
/// Spans derived from tagged entries carry their entry's index, so a
/// renderer can join bars back to the entry that produced them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SpanId(pub u64);

impl fmt::Display for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a tracked item.
///
/// Opaque to the layout engine; carried through so the renderer can
/// pick a palette per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Book,
    Game,
    Movie,
    #[serde(rename = "TV")]
    Tv,
    Unknown,
}
