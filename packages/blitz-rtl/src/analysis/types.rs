//! Direction analysis result types

use serde::{Deserialize, Serialize};

/// Resolved direction of a paragraph or run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
    Mixed,
    Neutral,
}

impl TextDirection {
    #[inline]
    pub const fn is_rtl(self) -> bool {
        matches!(self, TextDirection::Rtl)
    }

    /// Direction implied by an embedding level (odd levels are RTL)
    #[inline]
    pub const fn from_level(level: u8) -> Self {
        if level % 2 == 1 {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}

/// Contiguous span of code points sharing one strong direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalRange {
    pub start: usize,
    pub end: usize,
    pub direction: TextDirection,
}

impl DirectionalRange {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Code point tallies behind a direction decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DirectionAnalysis {
    pub rtl_count: usize,
    pub ltr_count: usize,
    pub neutral_count: usize,
    /// Direction of the first strong character, if any
    pub first_strong: Option<TextDirection>,
}

/// Paragraph direction with confidence and language hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDirectionResult {
    pub direction: TextDirection,
    pub confidence: f32,
    pub detected_language_hints: Vec<String>,
    pub mixed_direction_ranges: Option<Vec<DirectionalRange>>,
    pub analysis: DirectionAnalysis,
}
