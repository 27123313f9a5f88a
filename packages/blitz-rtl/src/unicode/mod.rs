//! Unicode data for bidirectional processing
//!
//! Range tables for directional classification and the glyph mirroring
//! table. Both are compiled-in constants; lookups are pure.

pub mod classifier;
pub mod mirroring;
mod tables;

pub use classifier::{classify, classify_char, CodePointClass};
pub use mirroring::{is_mirrored, mirror, mirrored_chars};
