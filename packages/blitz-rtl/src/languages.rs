//! Per-language validation rules for right-to-left languages
//!
//! One static table keyed by language code. Each entry is plain data:
//! which code points the language's text may contain, which of them are
//! diacritics, letters that set the language apart from others sharing
//! the script, and locale defaults used by the cultural formatter.

use serde::{Deserialize, Serialize};
use unicode_script::{Script, UnicodeScript};

use crate::cultural::{CalendarSystem, RtlNumberFormat};
use crate::error::{RtlError, RtlResult};

/// Diacritic requirement for validated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiacriticPolicy {
    Optional,
    Required,
    Forbidden,
}

/// Declarative validation rules for one language
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageRules {
    pub code: &'static str,
    pub name: &'static str,
    pub script: Script,
    pub allowed_ranges: &'static [(u32, u32)],
    pub diacritic_ranges: &'static [(u32, u32)],
    pub diacritics: DiacriticPolicy,
    pub distinctive_letters: &'static [char],
    pub number_format: RtlNumberFormat,
    pub calendar: CalendarSystem,
}

impl LanguageRules {
    /// Same rules with a different diacritic policy
    pub fn with_diacritics(mut self, policy: DiacriticPolicy) -> Self {
        self.diacritics = policy;
        self
    }

    #[inline]
    pub fn is_diacritic(&self, ch: char) -> bool {
        in_ranges(self.diacritic_ranges, ch)
    }

    #[inline]
    pub fn allows(&self, ch: char) -> bool {
        in_ranges(COMMON_RANGES, ch)
            || in_ranges(self.allowed_ranges, ch)
            || in_ranges(self.diacritic_ranges, ch)
    }
}

/// Digits, whitespace and punctuation shared by every language
static COMMON_RANGES: &[(u32, u32)] = &[
    (0x0009, 0x000D),
    (0x0020, 0x0040),
    (0x005B, 0x0060),
    (0x007B, 0x007E),
    (0x00A0, 0x00BF),
    (0x2000, 0x206F),
];

static ARABIC_SCRIPT_RANGES: &[(u32, u32)] = &[
    (0x0600, 0x06FF),
    (0x0750, 0x077F),
    (0x08A0, 0x08FF),
    (0xFB50, 0xFDFF),
    (0xFE70, 0xFEFF),
];

static ARABIC_DIACRITICS: &[(u32, u32)] = &[(0x064B, 0x065F), (0x0670, 0x0670)];

static HEBREW_SCRIPT_RANGES: &[(u32, u32)] = &[(0x0590, 0x05FF), (0xFB1D, 0xFB4F)];

static HEBREW_DIACRITICS: &[(u32, u32)] = &[(0x0591, 0x05BD), (0x05BF, 0x05C7)];

/// Ordered so that languages with more specific letters are tried first
static LANGUAGE_TABLE: &[LanguageRules] = &[
    LanguageRules {
        code: "ur",
        name: "Urdu",
        script: Script::Arabic,
        allowed_ranges: ARABIC_SCRIPT_RANGES,
        diacritic_ranges: ARABIC_DIACRITICS,
        diacritics: DiacriticPolicy::Optional,
        distinctive_letters: &['ٹ', 'ڈ', 'ڑ', 'ں', 'ے', 'ہ'],
        number_format: RtlNumberFormat::ExtendedArabicIndic,
        calendar: CalendarSystem::Gregorian,
    },
    LanguageRules {
        code: "ps",
        name: "Pashto",
        script: Script::Arabic,
        allowed_ranges: ARABIC_SCRIPT_RANGES,
        diacritic_ranges: ARABIC_DIACRITICS,
        diacritics: DiacriticPolicy::Optional,
        distinctive_letters: &['ټ', 'ډ', 'ړ', 'ږ', 'ښ', 'ځ', 'څ'],
        number_format: RtlNumberFormat::ExtendedArabicIndic,
        calendar: CalendarSystem::SolarHijri,
    },
    LanguageRules {
        code: "ckb",
        name: "Central Kurdish",
        script: Script::Arabic,
        allowed_ranges: ARABIC_SCRIPT_RANGES,
        diacritic_ranges: ARABIC_DIACRITICS,
        diacritics: DiacriticPolicy::Optional,
        distinctive_letters: &['ڵ', 'ڕ', 'ۆ', 'ێ'],
        number_format: RtlNumberFormat::ArabicIndic,
        calendar: CalendarSystem::Gregorian,
    },
    LanguageRules {
        code: "fa",
        name: "Persian",
        script: Script::Arabic,
        allowed_ranges: ARABIC_SCRIPT_RANGES,
        diacritic_ranges: ARABIC_DIACRITICS,
        diacritics: DiacriticPolicy::Optional,
        distinctive_letters: &['پ', 'چ', 'ژ', 'گ'],
        number_format: RtlNumberFormat::ExtendedArabicIndic,
        calendar: CalendarSystem::SolarHijri,
    },
    LanguageRules {
        code: "ar",
        name: "Arabic",
        script: Script::Arabic,
        allowed_ranges: ARABIC_SCRIPT_RANGES,
        diacritic_ranges: ARABIC_DIACRITICS,
        diacritics: DiacriticPolicy::Optional,
        distinctive_letters: &[],
        number_format: RtlNumberFormat::ArabicIndic,
        calendar: CalendarSystem::Gregorian,
    },
    LanguageRules {
        code: "yi",
        name: "Yiddish",
        script: Script::Hebrew,
        allowed_ranges: HEBREW_SCRIPT_RANGES,
        diacritic_ranges: HEBREW_DIACRITICS,
        diacritics: DiacriticPolicy::Optional,
        distinctive_letters: &['װ', 'ױ', 'ײ'],
        number_format: RtlNumberFormat::Western,
        calendar: CalendarSystem::Gregorian,
    },
    LanguageRules {
        code: "he",
        name: "Hebrew",
        script: Script::Hebrew,
        allowed_ranges: HEBREW_SCRIPT_RANGES,
        diacritic_ranges: HEBREW_DIACRITICS,
        diacritics: DiacriticPolicy::Optional,
        distinctive_letters: &[],
        number_format: RtlNumberFormat::Western,
        calendar: CalendarSystem::Hebrew,
    },
];

/// Every language the table knows
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGE_TABLE.iter().map(|rules| rules.code)
}

/// Rules for a language code (case-insensitive, primary subtag only)
pub fn rules_for(code: &str) -> Option<&'static LanguageRules> {
    let primary = code.split(['-', '_']).next().unwrap_or(code);
    LANGUAGE_TABLE
        .iter()
        .find(|rules| rules.code.eq_ignore_ascii_case(primary))
}

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    DisallowedCharacter { position: usize, character: char },
    UnexpectedDiacritic { position: usize, character: char },
    MissingDiacritics,
}

/// Outcome of validating text against a language's rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub language: String,
    pub letter_count: usize,
    pub diacritic_count: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate `text` against the rules registered for `code`
pub fn validate(text: &str, code: &str) -> RtlResult<ValidationReport> {
    let rules = rules_for(code).ok_or_else(|| {
        RtlError::ConfigurationError(format!("unsupported language code '{}'", code))
    })?;
    Ok(validate_against(rules, text))
}

/// Validate `text` against an explicit rule set
pub fn validate_against(rules: &LanguageRules, text: &str) -> ValidationReport {
    let mut issues = Vec::new();
    let mut letter_count = 0;
    let mut diacritic_count = 0;

    for (position, ch) in text.chars().enumerate() {
        if rules.is_diacritic(ch) {
            diacritic_count += 1;
            if rules.diacritics == DiacriticPolicy::Forbidden {
                issues.push(ValidationIssue::UnexpectedDiacritic {
                    position,
                    character: ch,
                });
            }
            continue;
        }

        if !rules.allows(ch) {
            issues.push(ValidationIssue::DisallowedCharacter {
                position,
                character: ch,
            });
        } else if in_ranges(rules.allowed_ranges, ch) && ch.is_alphabetic() {
            letter_count += 1;
        }
    }

    if rules.diacritics == DiacriticPolicy::Required && letter_count > 0 && diacritic_count == 0 {
        issues.push(ValidationIssue::MissingDiacritics);
    }

    ValidationReport {
        language: rules.code.to_string(),
        letter_count,
        diacritic_count,
        issues,
    }
}

/// Guess languages present in `text`, in order of first appearance
///
/// Arabic-script text resolves to the table entry with the most
/// distinctive-letter hits, falling back to the script's generic entry.
/// Latin-script text reports `en`.
pub fn detect_languages(text: &str) -> Vec<&'static str> {
    let mut first_seen: Vec<(usize, Script)> = Vec::with_capacity(3);

    for (position, ch) in text.chars().enumerate() {
        let script = ch.script();
        if matches!(script, Script::Arabic | Script::Hebrew | Script::Latin)
            && !first_seen.iter().any(|&(_, seen)| seen == script)
        {
            first_seen.push((position, script));
        }
    }

    first_seen
        .into_iter()
        .map(|(_, script)| match script {
            Script::Latin => "en",
            _ => best_match_for_script(text, script),
        })
        .collect()
}

fn best_match_for_script(text: &str, script: Script) -> &'static str {
    let mut best: Option<(&'static str, usize)> = None;
    let mut generic = "";

    for rules in LANGUAGE_TABLE.iter().filter(|rules| rules.script == script) {
        if rules.distinctive_letters.is_empty() {
            generic = rules.code;
            continue;
        }

        let hits = text
            .chars()
            .filter(|ch| rules.distinctive_letters.contains(ch))
            .count();
        if hits > 0 && best.map_or(true, |(_, best_hits)| hits > best_hits) {
            best = Some((rules.code, hits));
        }
    }

    best.map(|(code, _)| code).unwrap_or(generic)
}

#[inline]
fn in_ranges(ranges: &[(u32, u32)], ch: char) -> bool {
    let cp = ch as u32;
    ranges.iter().any(|&(start, end)| cp >= start && cp <= end)
}
