//! Combine lane assignments with fade profiles into renderable bars.

use medialine_protocol::Bar;

use crate::config::LayoutConfig;
use crate::layout::fade::{self, FadeSample};
use crate::layout::slots::{Allocation, SlotAssignment};
use crate::model::Span;

/// Emit the flat bar list for every span that received a lane.
///
/// Bars are grouped by span in input order, then by ascending slice, so
/// output is reproducible. Each bar covers one slice. Spans dropped by
/// the allocator emit nothing; there is no partial output.
pub fn assemble(spans: &[Span], allocation: &Allocation, config: &LayoutConfig) -> Vec<Bar> {
    let fade_in_len = i64::from(config.fade_len_in);
    let fade_out_len = i64::from(config.fade_len_out);
    let mut bars = Vec::new();

    for span in spans {
        let Some(assignment) = allocation.slots.get(&span.id) else {
            continue;
        };
        let (out_slot, in_slot) = match *assignment {
            SlotAssignment::Single(slot) => (slot, slot),
            SlotAssignment::Split { fade_out, fade_in } => (fade_out, fade_in),
        };

        match (span.start, span.end) {
            (Some(start), Some(end)) => {
                let (out_len, in_len) = fade::split_durations(config, end - start + 1);
                push_run(&mut bars, span, out_slot, start, &fade::fade_out(config, out_len));
                push_run(
                    &mut bars,
                    span,
                    in_slot,
                    end + 1 - in_len,
                    &fade::fade_in(config, in_len),
                );
            }
            (Some(start), None) => {
                push_run(
                    &mut bars,
                    span,
                    out_slot,
                    start,
                    &fade::fade_out(config, fade_out_len),
                );
            }
            (None, Some(end)) => {
                push_run(
                    &mut bars,
                    span,
                    in_slot,
                    end + 1 - fade_in_len,
                    &fade::fade_in(config, fade_in_len),
                );
            }
            (None, None) => {}
        }
    }

    bars
}

fn push_run(bars: &mut Vec<Bar>, span: &Span, slot: u32, base: i64, samples: &[FadeSample]) {
    bars.extend(samples.iter().map(|sample| Bar {
        span: span.id,
        slot,
        base: base + sample.offset,
        len: 1,
        opacity: sample.opacity,
    }));
}
