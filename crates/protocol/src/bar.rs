use serde::{Deserialize, Serialize};

use crate::types::SpanId;

/// One renderable bar segment.
///
/// The layout engine emits a flat `Vec<Bar>`: each bar covers `len`
/// consecutive time slices of one lane at a single opacity. Renderers
/// consume the list sequentially; a bar carries everything needed to
/// draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// The span this segment belongs to.
    pub span: SpanId,
    /// Lane the segment is drawn on.
    pub slot: u32,
    /// First time slice covered.
    pub base: i64,
    /// Number of slices covered.
    pub len: i64,
    /// Opacity in `[min_opacity, max_opacity]`.
    pub opacity: f32,
}
