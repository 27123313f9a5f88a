//! Paragraph direction analysis
//!
//! Classifies every code point, tallies strong directions and reports
//! the dominant direction with a confidence score and language hints.

pub mod analyzer;
pub mod types;

pub use analyzer::{analyze, decide, first_strong_direction, has_rtl_content, tally};
pub use types::{DirectionAnalysis, DirectionalRange, TextDirection, TextDirectionResult};
