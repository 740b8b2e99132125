//! Data types the layout engine hands to a renderer.
//!
//! The core crate computes a timeline layout and emits these records
//! as-is; all visual mapping (pixel geometry, color palette, tooltips)
//! happens on the renderer's side and is out of scope here.

pub mod axis;
pub mod bar;
pub mod types;

pub use axis::AxisSlice;
pub use bar::Bar;
pub use types::{MediaKind, SpanId};
