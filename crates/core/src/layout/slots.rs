//! Lane assignment: first-fit interval scheduling over a fixed set of
//! lanes, with lookahead reservations for spans that leave a gap and
//! return later.
//!
//! A span long enough to be drawn as two disjoint fade regions is
//! scheduled as two requests. Placing the first half reserves the
//! second half's window on that lane as a *future block*, so nothing
//! gets wedged into the gap where the span will come back, while the
//! gap itself stays reusable by anything that fits in front of the
//! reservation. The second half is re-scheduled at its own occupy time
//! and may land on a different lane.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use medialine_protocol::SpanId;

use crate::config::LayoutConfig;
use crate::model::Span;

/// Lane(s) resolved for one span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAssignment {
    /// One contiguous occupied region on a single lane.
    Single(u32),
    /// A split span: fade-out and fade-in regions scheduled
    /// independently, possibly on different lanes.
    Split { fade_out: u32, fade_in: u32 },
}

/// Result of one allocation pass.
#[derive(Debug, Clone, Default)]
pub struct Allocation {
    pub slots: HashMap<SpanId, SlotAssignment>,
    /// Spans no lane could take, in scheduling order.
    pub dropped: Vec<SpanId>,
}

/// A lane's promise to hold a later window for a split span's return.
#[derive(Debug, Clone, Copy)]
struct FutureBlock {
    occupied_from: i64,
    free_at: i64,
    owner: SpanId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    Whole,
    FadeOutHalf,
    FadeInHalf,
}

/// One scheduling unit: a half-open window `[from, until)` to place.
#[derive(Debug, Clone, Copy)]
struct Request {
    span: SpanId,
    piece: Piece,
    from: i64,
    until: i64,
    /// For a fade-out half: the window to reserve for the span's
    /// return.
    reserve: Option<(i64, i64)>,
}

struct LaneState {
    free_at: Vec<i64>,
    future: Vec<Vec<FutureBlock>>,
}

impl LaneState {
    fn new(lanes: usize) -> Self {
        Self {
            free_at: vec![i64::MIN; lanes],
            future: vec![Vec::new(); lanes],
        }
    }
}

/// Assign every span to its lane(s).
///
/// Greedy by earliest occupied slice, first-fit over lanes ordered by
/// `free_at`; ties between equally-free lanes are broken by the seeded
/// generator from `config.seed`, so output is deterministic for a fixed
/// seed. Spans that fit no lane are dropped and reported, a capacity
/// degradation rather than an error. Every call builds fresh state.
pub fn allocate(spans: &[Span], config: &LayoutConfig) -> Allocation {
    let spacing = i64::from(config.vertical_spacing);
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut state = LaneState::new(config.max_slots as usize);
    let mut allocation = Allocation::default();

    for request in build_requests(spans, config) {
        if request.piece == Piece::FadeInHalf && allocation.dropped.contains(&request.span) {
            // The first half never placed; there is nothing to return to.
            continue;
        }

        let chosen = candidate_order(&state.free_at, &mut rng)
            .into_iter()
            .find(|&lane| accepts(&state, lane, &request));

        // A returning half always has its reserved lane to fall back
        // on: a gap tenant may push `free_at` past the reservation
        // start by up to the spacing margin, never into the window.
        let chosen = chosen.or_else(|| match request.piece {
            Piece::FadeInHalf => reserved_lane(&state, request.span),
            _ => None,
        });

        let Some(lane) = chosen else {
            log::warn!(
                "no free lane for span {} in [{}, {}); dropping",
                request.span,
                request.from,
                request.until
            );
            allocation.dropped.push(request.span);
            continue;
        };

        place(&mut state, lane, &request, spacing);
        record(&mut allocation, lane as u32, &request);
    }

    allocation
}

/// Normalize spans into scheduling requests, sorted by window start.
fn build_requests(spans: &[Span], config: &LayoutConfig) -> Vec<Request> {
    let fade_in_len = i64::from(config.fade_len_in);
    let fade_out_len = i64::from(config.fade_len_out);
    let spacing = i64::from(config.vertical_spacing);

    let mut requests = Vec::with_capacity(spans.len());
    for span in spans {
        let (from, until) = match (span.start, span.end) {
            (Some(start), Some(end)) => (start, end + 1),
            // In progress: the inferred fade-out window after the start.
            (Some(start), None) => (start, start + fade_out_len),
            // Finish only: the inferred fade-in window before the end.
            (None, Some(end)) => (end + 1 - fade_in_len, end + 1),
            (None, None) => {
                log::debug!("span {} has no dates; skipping", span.id);
                continue;
            }
        };
        if until <= from {
            log::warn!(
                "span {} has an inverted window [{from}, {until}); skipping",
                span.id
            );
            continue;
        }

        if until - from > fade_out_len + fade_in_len + spacing {
            // Genuine gap between the two ramps: schedule the halves
            // separately, each padded by the spacing buffer.
            let second = (until - fade_in_len - spacing, until + spacing);
            requests.push(Request {
                span: span.id,
                piece: Piece::FadeOutHalf,
                from,
                until: from + fade_out_len + spacing,
                reserve: Some(second),
            });
            requests.push(Request {
                span: span.id,
                piece: Piece::FadeInHalf,
                from: second.0,
                until: second.1,
                reserve: None,
            });
        } else {
            requests.push(Request {
                span: span.id,
                piece: Piece::Whole,
                from,
                until,
                reserve: None,
            });
        }
    }

    requests.sort_by_key(|request| request.from);
    requests
}

/// Lanes ordered by `free_at` ascending; equally-free lanes in random
/// order so no lane is systematically preferred.
fn candidate_order(free_at: &[i64], rng: &mut SmallRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..free_at.len()).collect();
    order.shuffle(rng);
    order.sort_by_key(|&lane| free_at[lane]);
    order
}

fn accepts(state: &LaneState, lane: usize, request: &Request) -> bool {
    state.free_at[lane] <= request.from
        && state.future[lane].iter().all(|block| {
            block.owner == request.span || !overlaps(block, request.from, request.until)
        })
}

/// Half-open overlap test between a reservation and a candidate window.
fn overlaps(block: &FutureBlock, from: i64, until: i64) -> bool {
    !(block.free_at <= from || block.occupied_from >= until)
}

fn place(state: &mut LaneState, lane: usize, request: &Request, spacing: i64) {
    match request.piece {
        Piece::Whole => {
            state.free_at[lane] = request.until + spacing;
        }
        Piece::FadeOutHalf => {
            // The half's window already carries the spacing buffer.
            state.free_at[lane] = request.until;
            if let Some((from, until)) = request.reserve {
                state.future[lane].push(FutureBlock {
                    occupied_from: from,
                    free_at: until,
                    owner: request.span,
                });
            }
        }
        Piece::FadeInHalf => {
            consume_reservation(state, request.span);
            state.free_at[lane] = state.free_at[lane].max(request.until);
        }
    }
}

fn record(allocation: &mut Allocation, lane: u32, request: &Request) {
    match request.piece {
        Piece::Whole => {
            allocation
                .slots
                .insert(request.span, SlotAssignment::Single(lane));
        }
        Piece::FadeOutHalf => {
            // Provisional: the fade-in lane is finalized when the
            // second half is placed.
            allocation.slots.insert(
                request.span,
                SlotAssignment::Split {
                    fade_out: lane,
                    fade_in: lane,
                },
            );
        }
        Piece::FadeInHalf => {
            if let Some(SlotAssignment::Split { fade_in, .. }) =
                allocation.slots.get_mut(&request.span)
            {
                *fade_in = lane;
            }
        }
    }
}

fn reserved_lane(state: &LaneState, owner: SpanId) -> Option<usize> {
    state
        .future
        .iter()
        .position(|blocks| blocks.iter().any(|block| block.owner == owner))
}

/// Drop the reservation once its owner's second half has landed.
fn consume_reservation(state: &mut LaneState, owner: SpanId) {
    for blocks in &mut state.future {
        blocks.retain(|block| block.owner != owner);
    }
}
