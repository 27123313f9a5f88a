//! BiDi types and data structures
//!
//! Options, runs and the processing result shared by the resolver,
//! the reordering pass and validation.

use serde::{Deserialize, Serialize};

use crate::analysis::TextDirection;

/// Upper bound on input size, in bytes
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1024 * 1024;

/// Left-to-right mark
pub const LRM: char = '\u{200E}';
/// Right-to-left mark
pub const RLM: char = '\u{200F}';

/// BiDi processing configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidiOptions {
    /// Keep leading and trailing whitespace; when false the text is trimmed first
    pub preserve_whitespace: bool,
    /// Let separators and terminators join adjacent numbers
    pub handle_embedded_numbers: bool,
    /// Report mirrored glyphs for characters at right-to-left levels
    pub apply_mirroring: bool,
    /// Honour explicit embedding and override controls
    pub use_unicode_algorithm: bool,
    /// Insert LRM/RLM marks at run boundaries of the processed text
    pub insert_directional_marks: bool,
    /// Emit the processed text in visual order instead of logical order
    pub materialize_visual: bool,
    /// Force the paragraph direction instead of analyzing the text
    pub base_direction: Option<TextDirection>,
    pub max_text_length: usize,
}

impl Default for BidiOptions {
    fn default() -> Self {
        Self {
            preserve_whitespace: true,
            handle_embedded_numbers: true,
            apply_mirroring: true,
            use_unicode_algorithm: true,
            insert_directional_marks: false,
            materialize_visual: false,
            base_direction: None,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

impl BidiOptions {
    /// Options with a forced paragraph direction
    pub fn with_base_direction(mut self, direction: TextDirection) -> Self {
        self.base_direction = Some(direction);
        self
    }
}

/// Maximal span of code points sharing one embedding level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionRun {
    pub start: usize,
    pub end: usize,
    pub direction: TextDirection,
    pub embedding_level: u8,
}

impl DirectionRun {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Character displayed with its mirrored glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirroredCharacter {
    pub original_char: char,
    pub mirrored_char: char,
    pub position: usize,
}

/// Resolved levels, runs and visual ordering for one text
///
/// All offsets are code point indices into `source_text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BidiProcessingResult {
    /// Logical text the offsets refer to (trimmed when whitespace is not preserved)
    pub source_text: String,
    pub processed_text: String,
    /// `visual_order[visual] == logical`
    pub visual_order: Vec<usize>,
    /// `logical_order[logical] == visual`
    pub logical_order: Vec<usize>,
    pub direction_runs: Vec<DirectionRun>,
    pub mirrored_characters: Vec<MirroredCharacter>,
    pub paragraph_level: u8,
    pub levels: Vec<u8>,
}

impl BidiProcessingResult {
    /// Number of code points processed
    #[inline]
    pub fn len(&self) -> usize {
        self.visual_order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visual_order.is_empty()
    }

    #[inline]
    pub fn paragraph_direction(&self) -> TextDirection {
        TextDirection::from_level(self.paragraph_level)
    }

    /// Source text in visual order, with mirrored glyphs substituted
    pub fn visual_text(&self) -> String {
        let mut chars: Vec<char> = self.source_text.chars().collect();
        for mirrored in &self.mirrored_characters {
            if let Some(slot) = chars.get_mut(mirrored.position) {
                *slot = mirrored.mirrored_char;
            }
        }
        self.visual_order
            .iter()
            .filter_map(|&logical| chars.get(logical).copied())
            .collect()
    }
}
