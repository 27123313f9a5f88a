//! Compiled-in bidirectional class ranges
//!
//! Ranges are inclusive, sorted by start and non-overlapping so the
//! classifier can binary search them. Code points not covered here fall
//! back to the full Unicode data shipped with `unicode-bidi`.

use super::classifier::CodePointClass as C;

pub(crate) static BIDI_RANGES: &[(u32, u32, C)] = &[
    // C0 controls and Basic Latin
    (0x0000, 0x0008, C::BoundaryNeutral),
    (0x0009, 0x0009, C::SegmentSeparator),
    (0x000A, 0x000A, C::ParagraphSeparator),
    (0x000B, 0x000B, C::SegmentSeparator),
    (0x000C, 0x000C, C::Whitespace),
    (0x000D, 0x000D, C::ParagraphSeparator),
    (0x000E, 0x001B, C::BoundaryNeutral),
    (0x001C, 0x001E, C::ParagraphSeparator),
    (0x001F, 0x001F, C::SegmentSeparator),
    (0x0020, 0x0020, C::Whitespace),
    (0x0021, 0x0022, C::CommonNeutral),
    (0x0023, 0x0025, C::EuropeanTerminator),
    (0x0026, 0x002A, C::CommonNeutral),
    (0x002B, 0x002B, C::EuropeanSeparator),
    (0x002C, 0x002C, C::CommonSeparator),
    (0x002D, 0x002D, C::EuropeanSeparator),
    (0x002E, 0x002F, C::CommonSeparator),
    (0x0030, 0x0039, C::EuropeanNumber),
    (0x003A, 0x003A, C::CommonSeparator),
    (0x003B, 0x0040, C::CommonNeutral),
    (0x0041, 0x005A, C::StrongLTR),
    (0x005B, 0x0060, C::CommonNeutral),
    (0x0061, 0x007A, C::StrongLTR),
    (0x007B, 0x007E, C::CommonNeutral),
    // C1 controls and Latin-1 Supplement
    (0x007F, 0x0084, C::BoundaryNeutral),
    (0x0085, 0x0085, C::ParagraphSeparator),
    (0x0086, 0x009F, C::BoundaryNeutral),
    (0x00A0, 0x00A0, C::CommonSeparator),
    (0x00A1, 0x00A1, C::CommonNeutral),
    (0x00A2, 0x00A5, C::EuropeanTerminator),
    (0x00A6, 0x00A9, C::CommonNeutral),
    (0x00AA, 0x00AA, C::StrongLTR),
    (0x00AB, 0x00AC, C::CommonNeutral),
    (0x00AD, 0x00AD, C::BoundaryNeutral),
    (0x00AE, 0x00AF, C::CommonNeutral),
    (0x00B0, 0x00B1, C::EuropeanTerminator),
    (0x00B2, 0x00B3, C::EuropeanNumber),
    (0x00B4, 0x00B4, C::CommonNeutral),
    (0x00B5, 0x00B5, C::StrongLTR),
    (0x00B6, 0x00B8, C::CommonNeutral),
    (0x00B9, 0x00B9, C::EuropeanNumber),
    (0x00BA, 0x00BA, C::StrongLTR),
    (0x00BB, 0x00BF, C::CommonNeutral),
    (0x00C0, 0x00D6, C::StrongLTR),
    (0x00D7, 0x00D7, C::CommonNeutral),
    (0x00D8, 0x00F6, C::StrongLTR),
    (0x00F7, 0x00F7, C::CommonNeutral),
    // Latin-1 letters through Latin Extended-B
    (0x00F8, 0x024F, C::StrongLTR),
    // Hebrew
    (0x0590, 0x0590, C::StrongRTL),
    (0x0591, 0x05BD, C::NonSpacingMark),
    (0x05BE, 0x05BE, C::StrongRTL),
    (0x05BF, 0x05BF, C::NonSpacingMark),
    (0x05C0, 0x05C0, C::StrongRTL),
    (0x05C1, 0x05C2, C::NonSpacingMark),
    (0x05C3, 0x05C3, C::StrongRTL),
    (0x05C4, 0x05C5, C::NonSpacingMark),
    (0x05C6, 0x05C6, C::StrongRTL),
    (0x05C7, 0x05C7, C::NonSpacingMark),
    (0x05C8, 0x05FF, C::StrongRTL),
    // Arabic
    (0x0600, 0x0605, C::ArabicNumber),
    (0x0606, 0x0607, C::CommonNeutral),
    (0x0608, 0x0608, C::ArabicLetter),
    (0x0609, 0x060A, C::EuropeanTerminator),
    (0x060B, 0x060B, C::ArabicLetter),
    (0x060C, 0x060C, C::CommonSeparator),
    (0x060D, 0x060D, C::ArabicLetter),
    (0x060E, 0x060F, C::CommonNeutral),
    (0x0610, 0x061A, C::NonSpacingMark),
    (0x061B, 0x064A, C::ArabicLetter),
    (0x064B, 0x065F, C::NonSpacingMark),
    (0x0660, 0x0669, C::ArabicNumber),
    (0x066A, 0x066A, C::EuropeanTerminator),
    (0x066B, 0x066C, C::ArabicNumber),
    (0x066D, 0x066F, C::ArabicLetter),
    (0x0670, 0x0670, C::NonSpacingMark),
    (0x0671, 0x06D5, C::ArabicLetter),
    (0x06D6, 0x06DC, C::NonSpacingMark),
    (0x06DD, 0x06DD, C::ArabicNumber),
    (0x06DE, 0x06DE, C::CommonNeutral),
    (0x06DF, 0x06E4, C::NonSpacingMark),
    (0x06E5, 0x06E6, C::ArabicLetter),
    (0x06E7, 0x06E8, C::NonSpacingMark),
    (0x06E9, 0x06E9, C::CommonNeutral),
    (0x06EA, 0x06ED, C::NonSpacingMark),
    (0x06EE, 0x06EF, C::ArabicLetter),
    (0x06F0, 0x06F9, C::EuropeanNumber),
    (0x06FA, 0x06FF, C::ArabicLetter),
    // Arabic Supplement
    (0x0750, 0x077F, C::ArabicLetter),
    // Arabic Extended-A
    (0x08A0, 0x08C9, C::ArabicLetter),
    (0x08CA, 0x08E1, C::NonSpacingMark),
    (0x08E2, 0x08E2, C::ArabicNumber),
    (0x08E3, 0x08FF, C::NonSpacingMark),
    // General Punctuation
    (0x2000, 0x200A, C::Whitespace),
    (0x200B, 0x200D, C::BoundaryNeutral),
    (0x200E, 0x200E, C::StrongLTR),
    (0x200F, 0x200F, C::StrongRTL),
    (0x2010, 0x2027, C::CommonNeutral),
    (0x2028, 0x2028, C::Whitespace),
    (0x2029, 0x2029, C::ParagraphSeparator),
    // LRE, RLE, PDF, LRO, RLO
    (0x202A, 0x202E, C::BoundaryNeutral),
    (0x202F, 0x202F, C::CommonSeparator),
    (0x2030, 0x2034, C::EuropeanTerminator),
    (0x2035, 0x2043, C::CommonNeutral),
    (0x2044, 0x2044, C::CommonSeparator),
    (0x2045, 0x205E, C::CommonNeutral),
    (0x205F, 0x205F, C::Whitespace),
    (0x2060, 0x2064, C::BoundaryNeutral),
    // Isolates resolve as plain neutrals
    (0x2066, 0x2069, C::CommonNeutral),
    (0x206A, 0x206F, C::BoundaryNeutral),
    (0x3000, 0x3000, C::Whitespace),
    // Hebrew presentation forms
    (0xFB1D, 0xFB1D, C::StrongRTL),
    (0xFB1E, 0xFB1E, C::NonSpacingMark),
    (0xFB1F, 0xFB28, C::StrongRTL),
    (0xFB29, 0xFB29, C::EuropeanSeparator),
    (0xFB2A, 0xFB4F, C::StrongRTL),
    // Arabic Presentation Forms-A
    (0xFB50, 0xFD3D, C::ArabicLetter),
    (0xFD3E, 0xFD3F, C::CommonNeutral),
    (0xFD40, 0xFDFC, C::ArabicLetter),
    (0xFDFD, 0xFDFD, C::CommonNeutral),
    (0xFDFE, 0xFDFF, C::ArabicLetter),
    // Arabic Presentation Forms-B
    (0xFE70, 0xFEFE, C::ArabicLetter),
    (0xFEFF, 0xFEFF, C::BoundaryNeutral),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_sorted_and_disjoint() {
        for window in BIDI_RANGES.windows(2) {
            let (start_a, end_a, _) = window[0];
            let (start_b, _, _) = window[1];
            assert!(start_a <= end_a, "inverted range at {:#06X}", start_a);
            assert!(end_a < start_b, "overlap between {:#06X} and {:#06X}", start_a, start_b);
        }
    }
}
