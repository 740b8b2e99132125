//! Input-boundary conversion: calendar dates to slice units.
//!
//! Weeks start on Monday. A tagged entry's date lists are collapsed to a
//! single earliest-start / latest-finish pair before conversion.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use medialine_protocol::SpanId;

use crate::config::LayoutConfig;
use crate::model::{MediaEntry, Span};

/// Snap a date to the Monday of its week.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Week bucket of `date` relative to `min_date`.
///
/// A date falling on Sunday counts into the following week, keeping
/// bucket boundaries aligned to calendar-Monday starts.
pub fn week_index(date: NaiveDate, min_date: NaiveDate) -> i64 {
    let date = if date.weekday() == Weekday::Sun {
        date + Days::new(1)
    } else {
        date
    };
    (date - min_date).num_days().div_euclid(7)
}

/// Earliest and latest calendar weeks touched by any entry, both
/// snapped to their Monday. `None` when no entry carries a date.
pub fn date_range(entries: &[MediaEntry]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = entries
        .iter()
        .flat_map(|entry| entry.started.iter().chain(entry.finished.iter()))
        .copied();

    let Some(first) = dates.next() else {
        log::warn!("no dates available for date range calculation");
        return None;
    };
    let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));

    Some((start_of_week(min), start_of_week(max)))
}

/// Collapse dated entries into spans with inclusive slice windows.
///
/// A span's id is its entry's index, so bars can be joined back to the
/// entry that produced them. Undated entries are skipped.
pub fn extract_spans(
    entries: &[MediaEntry],
    min_date: NaiveDate,
    config: &LayoutConfig,
) -> Vec<Span> {
    let spw = i64::from(config.slices_per_week);
    let mut spans = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.iter().enumerate() {
        let started = entry.started.iter().min().copied();
        let finished = entry.finished.iter().max().copied();

        if started.is_none() && finished.is_none() {
            log::debug!("skipping undated entry {:?}", entry.title);
            continue;
        }

        spans.push(Span {
            id: SpanId(idx as u64),
            title: entry.title.clone(),
            kind: entry.kind,
            start: started.map(|d| week_index(d, min_date) * spw),
            end: finished.map(|d| (week_index(d, min_date) + 1) * spw - 1),
        });
    }

    spans
}
