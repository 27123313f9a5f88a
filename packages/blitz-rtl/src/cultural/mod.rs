//! Cultural formatting
//!
//! Digit systems, calendar hints and punctuation for right-to-left
//! locales, with an audit trail that can undo every substitution.

pub mod formatter;
pub mod types;

pub use formatter::format;
pub use types::{
    CalendarSystem, FormatFeatures, FormattingContext, FormattingKind, Locale, RtlFormattedText,
    RtlFormatting, RtlNumberFormat,
};
