//! Series module - time axis, alignment and derived-series operators

mod aligner;
mod axis;
pub mod ops;

pub use aligner::{Entity, SeriesAligner};
pub use axis::TimeAxis;
pub use ops::{SharePolicy, Slots};
