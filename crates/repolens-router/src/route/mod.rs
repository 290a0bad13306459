//! Route pattern machinery.

pub mod pattern;

pub use pattern::{classify_segment, parse_pattern, Segment};
