//! Bidirectional reordering engine
//!
//! Implements the subset of the Unicode Bidirectional Algorithm needed for
//! single-line display of mixed LTR/RTL text:
//! - Paragraph level from a forced direction or the text itself
//! - Explicit embeddings and overrides with a bounded stack
//! - Weak, neutral and implicit type resolution
//! - Per-paragraph visual reordering and glyph mirroring

pub mod processor;
pub mod reorder;
mod resolver;
pub mod types;
pub mod validation;

pub use processor::{paragraph_level, process, BidiProcessor};
pub use reorder::{direction_runs, invert, reorder_visual};
pub use types::{
    BidiOptions, BidiProcessingResult, DirectionRun, MirroredCharacter, DEFAULT_MAX_TEXT_LENGTH,
    LRM, RLM,
};
pub use validation::BidiValidator;
