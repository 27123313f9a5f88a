//! Cultural formatting types

use std::ops::Range;

use serde::{Deserialize, Serialize};
use unicode_script::Script;

use crate::analysis::TextDirection;
use crate::error::{RtlError, RtlResult};
use crate::languages;

/// Digit system used for numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RtlNumberFormat {
    /// ASCII 0-9
    #[default]
    Western,
    /// U+0660..U+0669
    ArabicIndic,
    /// U+06F0..U+06F9, used for Persian and Urdu
    ExtendedArabicIndic,
}

impl RtlNumberFormat {
    #[inline]
    pub const fn zero(self) -> char {
        match self {
            RtlNumberFormat::Western => '0',
            RtlNumberFormat::ArabicIndic => '\u{0660}',
            RtlNumberFormat::ExtendedArabicIndic => '\u{06F0}',
        }
    }

    /// The digit with the same value as an ASCII digit
    ///
    /// Anything else is returned unchanged.
    pub fn digit(self, ascii: char) -> char {
        match ascii.to_digit(10) {
            Some(value) if ascii.is_ascii_digit() => {
                char::from_u32(self.zero() as u32 + value).unwrap_or(ascii)
            }
            _ => ascii,
        }
    }
}

/// Calendar a date pattern should be read in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CalendarSystem {
    #[default]
    Gregorian,
    Hijri,
    SolarHijri,
    Hebrew,
}

bitflags::bitflags! {
    /// Independently toggleable substitutions
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct FormatFeatures: u8 {
        const DIGITS = 0b0001;
        const CALENDAR = 0b0010;
        const PUNCTUATION = 0b0100;
    }
}

impl Default for FormatFeatures {
    fn default() -> Self {
        FormatFeatures::all()
    }
}

/// What to substitute and for which direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingContext {
    pub features: FormatFeatures,
    pub direction: TextDirection,
    /// Overrides the locale's digit system
    pub number_format: Option<RtlNumberFormat>,
}

impl Default for FormattingContext {
    fn default() -> Self {
        Self {
            features: FormatFeatures::default(),
            direction: TextDirection::Rtl,
            number_format: None,
        }
    }
}

impl FormattingContext {
    pub fn new(direction: TextDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn with_features(mut self, features: FormatFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn with_number_format(mut self, number_format: RtlNumberFormat) -> Self {
        self.number_format = Some(number_format);
        self
    }
}

/// Parsed BCP 47 style locale tag (`language[-Script][-REGION]`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    pub language: String,
    pub script: Option<String>,
    pub region: Option<String>,
}

impl Locale {
    /// Parse a tag such as `ar`, `fa-IR` or `ur_Arab_PK`
    pub fn parse(tag: &str) -> RtlResult<Self> {
        let invalid = || RtlError::CulturalFormattingFailed(format!("invalid locale tag '{}'", tag));

        let mut subtags = tag.trim().split(['-', '_']);
        let language = subtags
            .next()
            .filter(|language| {
                (2..=3).contains(&language.len())
                    && language.chars().all(|ch| ch.is_ascii_alphabetic())
            })
            .ok_or_else(invalid)?
            .to_ascii_lowercase();

        let mut script = None;
        let mut region = None;
        for subtag in subtags {
            let is_script = subtag.len() == 4 && subtag.chars().all(|ch| ch.is_ascii_alphabetic());
            let is_region = (subtag.len() == 2 && subtag.chars().all(|ch| ch.is_ascii_alphabetic()))
                || (subtag.len() == 3 && subtag.chars().all(|ch| ch.is_ascii_digit()));

            if is_script && script.is_none() && region.is_none() {
                let mut normalized = subtag.to_ascii_lowercase();
                normalized[..1].make_ascii_uppercase();
                script = Some(normalized);
            } else if is_region && region.is_none() {
                region = Some(subtag.to_ascii_uppercase());
            } else {
                return Err(invalid());
            }
        }

        Ok(Self {
            language,
            script,
            region,
        })
    }

    /// Digit system customary for this locale
    pub fn default_number_format(&self) -> RtlNumberFormat {
        languages::rules_for(&self.language)
            .map(|rules| rules.number_format)
            .unwrap_or_default()
    }

    /// Calendar customary for this locale
    pub fn calendar(&self) -> CalendarSystem {
        if self.language == "ar" && self.region.as_deref() == Some("SA") {
            return CalendarSystem::Hijri;
        }
        languages::rules_for(&self.language)
            .map(|rules| rules.calendar)
            .unwrap_or_default()
    }

    /// Whether the locale writes in Arabic script
    pub fn uses_arabic_script(&self) -> bool {
        languages::rules_for(&self.language)
            .is_some_and(|rules| rules.script == Script::Arabic)
    }
}

/// Kind of substitution recorded in the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormattingKind {
    Digits,
    /// Thousands or decimal separator inside a number
    NumberSeparator,
    Punctuation,
    /// Date pattern to be read in the given calendar; the text is unchanged
    CalendarHint(CalendarSystem),
}

/// One audited substitution
///
/// Ranges are byte ranges into the original and the formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtlFormatting {
    pub kind: FormattingKind,
    pub original: String,
    pub replacement: String,
    pub original_range: Range<usize>,
    pub formatted_range: Range<usize>,
}

/// Formatted text with its audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RtlFormattedText {
    pub text: String,
    pub locale: Locale,
    pub formatting: Vec<RtlFormatting>,
}

impl RtlFormattedText {
    /// Whether any substitution changed the text
    pub fn is_modified(&self) -> bool {
        self.formatting
            .iter()
            .any(|entry| !matches!(entry.kind, FormattingKind::CalendarHint(_)))
    }

    /// Entries of one kind
    pub fn entries(&self, kind: FormattingKind) -> impl Iterator<Item = &RtlFormatting> {
        self.formatting.iter().filter(move |entry| entry.kind == kind)
    }

    /// Reconstruct the original text from the audit trail
    pub fn undo(&self) -> String {
        let mut restored = self.text.clone();
        let mut edits: Vec<&RtlFormatting> = self
            .formatting
            .iter()
            .filter(|entry| !matches!(entry.kind, FormattingKind::CalendarHint(_)))
            .collect();
        edits.sort_by_key(|entry| entry.formatted_range.start);

        for entry in edits.into_iter().rev() {
            if restored.get(entry.formatted_range.clone()) == Some(entry.replacement.as_str()) {
                restored.replace_range(entry.formatted_range.clone(), &entry.original);
            }
        }

        restored
    }
}
