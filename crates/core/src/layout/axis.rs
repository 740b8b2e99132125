//! The week-slice axis handed to the renderer alongside the bars.

use chrono::{Datelike, Days, NaiveDate};
use medialine_protocol::AxisSlice;

use crate::config::LayoutConfig;

/// Build the ordered slice axis covering `[min_date, max_date]`.
///
/// Walks from `min_date` in 7-day steps; each week contributes
/// `slices_per_week` slices carrying the week start's year and month
/// abbreviation. Pure and stateless; safe to call repeatedly.
pub fn build_axis(min_date: NaiveDate, max_date: NaiveDate, config: &LayoutConfig) -> Vec<AxisSlice> {
    let mut slices = Vec::new();
    let mut current = min_date;
    let mut index = 0i64;

    while current <= max_date {
        let label = current.format("%b").to_string();
        for _ in 0..config.slices_per_week {
            slices.push(AxisSlice {
                index,
                year: current.year(),
                label: label.clone(),
            });
            index += 1;
        }
        current = current + Days::new(7);
    }

    slices
}
