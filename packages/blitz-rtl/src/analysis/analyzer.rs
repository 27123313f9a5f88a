//! Paragraph direction analysis
//!
//! Counts strong code points and applies a dominance heuristic: one side
//! must outnumber the other two to one to win, otherwise the paragraph is
//! mixed. This is faster and coarser than the first-strong-character rule
//! of UAX #9 (P2/P3), which is still tracked in the analysis detail so the
//! reordering engine can pick a base level for mixed text.

use super::types::{DirectionAnalysis, DirectionalRange, TextDirection, TextDirectionResult};
use crate::error::{RtlError, RtlResult};
use crate::languages;
use crate::unicode::{classify_char, CodePointClass};

const MAX_CONFIDENCE: f32 = 0.95;
const DOMINANCE_BONUS: f32 = 0.3;
const MIXED_CONFIDENCE: f32 = 0.8;
const NEUTRAL_CONFIDENCE: f32 = 0.6;

/// Analyze the dominant direction of `text`
///
/// `language_hint` is reported first among the language hints.
pub fn analyze(text: &str, language_hint: Option<&str>) -> RtlResult<TextDirectionResult> {
    if text.trim().is_empty() {
        return Err(RtlError::EmptyText);
    }

    let analysis = tally(text);
    let (direction, confidence) = decide(&analysis);

    let mixed_direction_ranges = if direction == TextDirection::Mixed {
        Some(mixed_ranges(text))
    } else {
        None
    };

    let mut detected_language_hints: Vec<String> = Vec::new();
    if let Some(hint) = language_hint.map(str::trim).filter(|hint| !hint.is_empty()) {
        detected_language_hints.push(hint.to_ascii_lowercase());
    }
    for code in languages::detect_languages(text) {
        if !detected_language_hints.iter().any(|hint| hint == code) {
            detected_language_hints.push(code.to_string());
        }
    }

    log::debug!(
        "direction analysis: {:?} (confidence {:.2}, rtl={}, ltr={}, neutral={})",
        direction,
        confidence,
        analysis.rtl_count,
        analysis.ltr_count,
        analysis.neutral_count
    );

    Ok(TextDirectionResult {
        direction,
        confidence,
        detected_language_hints,
        mixed_direction_ranges,
        analysis,
    })
}

/// Count strong RTL, strong LTR and neutral code points
pub fn tally(text: &str) -> DirectionAnalysis {
    let mut analysis = DirectionAnalysis::default();

    for ch in text.chars() {
        let class = classify_char(ch);
        if class.is_rtl() {
            analysis.rtl_count += 1;
            analysis.first_strong.get_or_insert(TextDirection::Rtl);
        } else if class == CodePointClass::StrongLTR {
            analysis.ltr_count += 1;
            analysis.first_strong.get_or_insert(TextDirection::Ltr);
        } else {
            analysis.neutral_count += 1;
        }
    }

    analysis
}

/// Apply the dominance policy to a tally
pub fn decide(analysis: &DirectionAnalysis) -> (TextDirection, f32) {
    let rtl = analysis.rtl_count;
    let ltr = analysis.ltr_count;
    let strong = (rtl + ltr) as f32;

    if rtl > 2 * ltr {
        let fraction = rtl as f32 / strong;
        (TextDirection::Rtl, (fraction + DOMINANCE_BONUS).min(MAX_CONFIDENCE))
    } else if ltr > 2 * rtl {
        let fraction = ltr as f32 / strong;
        (TextDirection::Ltr, (fraction + DOMINANCE_BONUS).min(MAX_CONFIDENCE))
    } else if rtl > 0 && ltr > 0 {
        (TextDirection::Mixed, MIXED_CONFIDENCE)
    } else {
        (TextDirection::Neutral, NEUTRAL_CONFIDENCE)
    }
}

/// Direction of the first strong character (UAX #9 P2/P3)
pub fn first_strong_direction(text: &str) -> Option<TextDirection> {
    text.chars().find_map(|ch| {
        let class = classify_char(ch);
        if class.is_rtl() {
            Some(TextDirection::Rtl)
        } else if class == CodePointClass::StrongLTR {
            Some(TextDirection::Ltr)
        } else {
            None
        }
    })
}

/// Whether `text` contains any right-to-left letters
pub fn has_rtl_content(text: &str) -> bool {
    text.chars().any(|ch| classify_char(ch).is_rtl())
}

/// Partition `text` into strong-direction ranges
///
/// Neutrals join the range they follow; leading neutrals join the first
/// range, so the ranges cover every code point.
fn mixed_ranges(text: &str) -> Vec<DirectionalRange> {
    let mut ranges = Vec::new();
    let mut current: Option<(usize, TextDirection)> = None;
    let mut length = 0;

    for (index, ch) in text.chars().enumerate() {
        length = index + 1;
        let class = classify_char(ch);
        let direction = if class.is_rtl() {
            TextDirection::Rtl
        } else if class == CodePointClass::StrongLTR {
            TextDirection::Ltr
        } else {
            continue;
        };

        match current {
            None => current = Some((0, direction)),
            Some((start, active)) if active != direction => {
                ranges.push(DirectionalRange {
                    start,
                    end: index,
                    direction: active,
                });
                current = Some((index, direction));
            }
            Some(_) => {}
        }
    }

    if let Some((start, direction)) = current {
        ranges.push(DirectionalRange {
            start,
            end: length,
            direction,
        });
    }

    ranges
}
