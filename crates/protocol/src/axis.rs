use serde::{Deserialize, Serialize};

/// One slice of the vertical time axis.
///
/// `label` is a coarse period marker (the month abbreviation of the
/// slice's week start). Consecutive slices repeat it; a renderer
/// typically blanks a label identical to the previous slice's so each
/// month is printed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSlice {
    /// Position on the time axis, in slice units.
    pub index: i64,
    /// Calendar year of the week this slice belongs to.
    pub year: i32,
    /// Month abbreviation of the week start, e.g. `"Jan"`.
    pub label: String,
}
