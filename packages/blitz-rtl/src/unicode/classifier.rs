//! Code point classification for bidirectional processing
//!
//! Maps each Unicode scalar value to its directional category with a
//! binary search over the static range table, falling back to the
//! Bidi_Class data compiled into `unicode-bidi` for everything else.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_bidi::BidiClass;

use super::tables::BIDI_RANGES;

/// Bidirectional character category of a single code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodePointClass {
    StrongLTR,
    StrongRTL,
    ArabicLetter,
    EuropeanNumber,
    EuropeanSeparator,
    EuropeanTerminator,
    ArabicNumber,
    CommonSeparator,
    NonSpacingMark,
    CommonNeutral,
    Whitespace,
    SegmentSeparator,
    ParagraphSeparator,
    BoundaryNeutral,
}

impl CodePointClass {
    /// Right-to-left family (Hebrew-style R and Arabic letters)
    #[inline]
    pub const fn is_rtl(self) -> bool {
        matches!(self, CodePointClass::StrongRTL | CodePointClass::ArabicLetter)
    }

    #[inline]
    pub const fn is_number(self) -> bool {
        matches!(
            self,
            CodePointClass::EuropeanNumber | CodePointClass::ArabicNumber
        )
    }

    /// Whitespace-like classes that rule L1 resets at line end
    #[inline]
    pub const fn is_whitespace_like(self) -> bool {
        matches!(
            self,
            CodePointClass::Whitespace | CodePointClass::BoundaryNeutral
        )
    }
}

impl From<BidiClass> for CodePointClass {
    fn from(class: BidiClass) -> Self {
        match class {
            BidiClass::L => CodePointClass::StrongLTR,
            BidiClass::R => CodePointClass::StrongRTL,
            BidiClass::AL => CodePointClass::ArabicLetter,
            BidiClass::EN => CodePointClass::EuropeanNumber,
            BidiClass::ES => CodePointClass::EuropeanSeparator,
            BidiClass::ET => CodePointClass::EuropeanTerminator,
            BidiClass::AN => CodePointClass::ArabicNumber,
            BidiClass::CS => CodePointClass::CommonSeparator,
            BidiClass::NSM => CodePointClass::NonSpacingMark,
            BidiClass::B => CodePointClass::ParagraphSeparator,
            BidiClass::S => CodePointClass::SegmentSeparator,
            BidiClass::WS => CodePointClass::Whitespace,
            BidiClass::BN
            | BidiClass::LRE
            | BidiClass::LRO
            | BidiClass::RLE
            | BidiClass::RLO
            | BidiClass::PDF => CodePointClass::BoundaryNeutral,
            BidiClass::ON
            | BidiClass::LRI
            | BidiClass::RLI
            | BidiClass::FSI
            | BidiClass::PDI => CodePointClass::CommonNeutral,
        }
    }
}

/// Classify a 32-bit scalar value
///
/// Values that are not Unicode scalar values (surrogates, > U+10FFFF)
/// classify as boundary neutrals.
pub fn classify(code_point: u32) -> CodePointClass {
    if let Some(class) = lookup_range(code_point) {
        return class;
    }

    match char::from_u32(code_point) {
        Some(ch) => CodePointClass::from(unicode_bidi::bidi_class(ch)),
        None => CodePointClass::BoundaryNeutral,
    }
}

/// Classify a `char`
#[inline]
pub fn classify_char(ch: char) -> CodePointClass {
    classify(ch as u32)
}

#[inline]
fn lookup_range(code_point: u32) -> Option<CodePointClass> {
    BIDI_RANGES
        .binary_search_by(|&(start, end, _)| {
            if end < code_point {
                Ordering::Less
            } else if start > code_point {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|index| BIDI_RANGES[index].2)
}
