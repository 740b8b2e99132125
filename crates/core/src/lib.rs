//! Layout engine for a chronological media-consumption timeline.
//!
//! Tracked items (books, games, shows, movies) become [`model::Span`]s
//! on a vertical axis of week slices. The engine assigns each span to
//! one of a small fixed set of horizontal lanes, computes an opacity
//! ramp at its temporal edges, and emits flat [`medialine_protocol::Bar`]
//! records plus an axis for an external renderer to draw.
//!
//! The pipeline is a pure, sequential computation: no I/O, no shared
//! state across calls. Entry point: [`layout::layout_timeline`].

pub mod config;
pub mod extract;
pub mod layout;
pub mod model;

pub use config::{ConfigError, LayoutConfig};
pub use layout::{TimelineLayout, layout_timeline};
pub use model::{MediaEntry, Span};
