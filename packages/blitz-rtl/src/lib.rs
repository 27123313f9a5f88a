//! Right-to-left text support for Blitz
//!
//! This crate provides the direction-aware core used when laying out
//! Arabic, Hebrew, Persian and Urdu content:
//! - Unicode directional classification and glyph mirroring
//! - Paragraph direction analysis with confidence and language hints
//! - Bidirectional reordering (embedding levels, runs, visual order)
//! - Declarative layout adaptation instructions for a renderer
//! - Locale-specific digit, calendar and punctuation formatting
//!
//! Every operation is a pure function of its inputs and static tables.
//! [`RtlContext`] bundles a validated configuration with a result cache.

pub mod analysis;
pub mod batch;
pub mod bidi;
pub mod cache;
pub mod config;
pub mod context;
pub mod cultural;
pub mod error;
pub mod image_mirror;
pub mod languages;
pub mod layout;
pub mod unicode;

pub use analysis::{analyze, TextDirection, TextDirectionResult};
pub use batch::{analyze_batch, process_batch, process_batch_async};
pub use bidi::{process, BidiOptions, BidiProcessingResult, DirectionRun, MirroredCharacter};
pub use cache::AnalysisCache;
pub use config::RtlSupportConfiguration;
pub use context::{PipelineOutcome, PipelineReport, ProcessingState, RtlContext};
pub use cultural::{format, FormattingContext, RtlFormattedText, RtlNumberFormat};
pub use error::{RtlError, RtlResult};
pub use image_mirror::mirror_image;
pub use layout::{adapt, ElementRegistry, LayoutOptions, RtlLayoutResult};
pub use unicode::{classify, classify_char, mirror, CodePointClass};
