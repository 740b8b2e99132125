//! The layout pipeline: spans to lanes to bars, plus the slice axis.

pub mod axis;
pub mod bars;
pub mod fade;
pub mod slots;

pub use axis::build_axis;
pub use bars::assemble;
pub use fade::{FadeSample, fade_in, fade_out, split_durations};
pub use slots::{Allocation, SlotAssignment, allocate};

use medialine_protocol::{AxisSlice, Bar, SpanId};
use serde::Serialize;

use crate::config::{ConfigError, LayoutConfig};
use crate::extract;
use crate::model::MediaEntry;

/// Everything a renderer needs to draw the timeline.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimelineLayout {
    pub axis: Vec<AxisSlice>,
    pub bars: Vec<Bar>,
    /// Spans omitted because no lane could take them.
    pub dropped: Vec<SpanId>,
}

/// Run the full pipeline over tagged entries.
///
/// Validates the configuration, collapses entries to spans, assigns
/// lanes, assembles bars, and builds the axis. Entries without any date
/// yield an empty layout rather than an error.
pub fn layout_timeline(
    entries: &[MediaEntry],
    config: &LayoutConfig,
) -> Result<TimelineLayout, ConfigError> {
    config.validate()?;

    let Some((min_date, max_date)) = extract::date_range(entries) else {
        log::warn!("no dated entries; producing an empty timeline");
        return Ok(TimelineLayout::default());
    };

    let spans = extract::extract_spans(entries, min_date, config);
    let allocation = slots::allocate(&spans, config);
    let bars = bars::assemble(&spans, &allocation, config);
    let axis = axis::build_axis(min_date, max_date, config);

    Ok(TimelineLayout {
        axis,
        bars,
        dropped: allocation.dropped,
    })
}
