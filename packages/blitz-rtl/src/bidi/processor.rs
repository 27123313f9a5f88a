//! BiDi text processing core
//!
//! Resolves levels, visual order, direction runs and mirrored glyphs for
//! one text.

use super::reorder::{direction_runs, invert, mirrored_characters, reorder_paragraphs};
use super::resolver::{resolve_levels, ResolverSettings};
use super::types::{BidiOptions, BidiProcessingResult, DirectionRun, LRM, RLM};
use super::validation::BidiValidator;
use crate::analysis::{decide, first_strong_direction, tally, TextDirection};
use crate::error::{RtlError, RtlResult};
use crate::unicode::{classify_char, CodePointClass};

/// Core BiDi text processor
#[derive(Debug, Clone, Default)]
pub struct BidiProcessor {
    options: BidiOptions,
}

impl BidiProcessor {
    /// Create a processor with the given options
    pub fn new(options: BidiOptions) -> Self {
        Self { options }
    }

    /// Process bidirectional text
    pub fn process(&self, text: &str) -> RtlResult<BidiProcessingResult> {
        let options = &self.options;

        if text.len() > options.max_text_length {
            log::warn!(
                "rejecting {} byte text, limit is {} bytes",
                text.len(),
                options.max_text_length
            );
            return Err(RtlError::BidiProcessingFailed(format!(
                "text length {} exceeds maximum of {} bytes",
                text.len(),
                options.max_text_length
            )));
        }

        let source = if options.preserve_whitespace {
            text
        } else {
            text.trim()
        };

        let chars: Vec<char> = source.chars().collect();
        let classes: Vec<CodePointClass> = chars.iter().map(|&ch| classify_char(ch)).collect();
        let paragraph_level = paragraph_level(source, options.base_direction);

        let levels = resolve_levels(
            &chars,
            &classes,
            ResolverSettings {
                paragraph_level,
                explicit_embeddings: options.use_unicode_algorithm,
                join_number_separators: options.handle_embedded_numbers,
            },
        );

        let visual_order = reorder_paragraphs(&levels, &classes);
        let logical_order = invert(&visual_order);
        let runs = direction_runs(&levels);
        let mirrored = if options.apply_mirroring {
            mirrored_characters(&chars, &levels)
        } else {
            Vec::new()
        };

        let processed_text = if options.insert_directional_marks && !options.materialize_visual {
            insert_marks(&chars, &runs, paragraph_level)
        } else {
            source.to_string()
        };

        let mut result = BidiProcessingResult {
            source_text: source.to_string(),
            processed_text,
            visual_order,
            logical_order,
            direction_runs: runs,
            mirrored_characters: mirrored,
            paragraph_level,
            levels,
        };

        if options.materialize_visual {
            result.processed_text = result.visual_text();
        }

        BidiValidator::validate(&result)?;

        log::debug!(
            "bidi processed {} code points: paragraph level {}, {} runs, {} mirrored",
            result.len(),
            result.paragraph_level,
            result.direction_runs.len(),
            result.mirrored_characters.len()
        );

        Ok(result)
    }
}

/// Process `text` with the given options
pub fn process(text: &str, options: &BidiOptions) -> RtlResult<BidiProcessingResult> {
    BidiProcessor::new(options.clone()).process(text)
}

/// Paragraph embedding level for `text`
///
/// A forced direction wins. Otherwise the dominance heuristic decides, and
/// mixed text falls back to its first strong character.
pub fn paragraph_level(text: &str, base_direction: Option<TextDirection>) -> u8 {
    let direction = match base_direction {
        Some(TextDirection::Mixed) => first_strong_direction(text).unwrap_or_default(),
        Some(direction) => direction,
        None => {
            let analysis = tally(text);
            match decide(&analysis).0 {
                TextDirection::Mixed => analysis.first_strong.unwrap_or_default(),
                direction => direction,
            }
        }
    };

    if direction.is_rtl() {
        1
    } else {
        0
    }
}

/// Logical text with the paragraph's directional mark between runs
fn insert_marks(chars: &[char], runs: &[DirectionRun], paragraph_level: u8) -> String {
    let mark = if paragraph_level % 2 == 1 { RLM } else { LRM };
    let mut marked = String::with_capacity(chars.len() * 2 + runs.len() * 3);

    for run in runs {
        if run.start > 0 {
            marked.push(mark);
        }
        marked.extend(&chars[run.start..run.end]);
    }

    marked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_digits_keep_order() {
        let result = process("السعر هو 1234 دولار", &BidiOptions::default()).unwrap();
        assert_eq!(result.paragraph_level, 1);
        assert!(result.visual_text().contains("1234"));
        assert_eq!(result.visual_text(), "رالود 1234 وه رعسلا");
    }

    #[test]
    fn test_forced_rtl_mirrors_parentheses() {
        let options = BidiOptions::default().with_base_direction(TextDirection::Rtl);
        let result = process("(Hello)", &options).unwrap();

        assert_eq!(result.levels, vec![1, 2, 2, 2, 2, 2, 1]);
        assert_eq!(result.mirrored_characters.len(), 2);
        assert_eq!(result.mirrored_characters[0].original_char, '(');
        assert_eq!(result.mirrored_characters[0].mirrored_char, ')');
        assert_eq!(result.mirrored_characters[1].original_char, ')');
        assert_eq!(result.mirrored_characters[1].mirrored_char, '(');
        assert_eq!(result.visual_order, vec![6, 1, 2, 3, 4, 5, 0]);
        assert_eq!(result.visual_text(), "(Hello)");
    }

    #[test]
    fn test_mirroring_disabled() {
        let options = BidiOptions {
            apply_mirroring: false,
            ..BidiOptions::default().with_base_direction(TextDirection::Rtl)
        };
        let result = process("(Hello)", &options).unwrap();
        assert!(result.mirrored_characters.is_empty());
    }

    #[test]
    fn test_mixed_paragraph_uses_first_strong() {
        let result = process("Hello مرحبا", &BidiOptions::default()).unwrap();
        assert_eq!(result.paragraph_level, 0);
        assert_eq!(result.direction_runs.len(), 2);
        assert_eq!(result.direction_runs[1].start, 6);
        assert_eq!(result.direction_runs[1].direction, TextDirection::Rtl);
        assert_eq!(result.visual_order, vec![0, 1, 2, 3, 4, 5, 10, 9, 8, 7, 6]);

        let result = process("مرحبا Hello", &BidiOptions::default()).unwrap();
        assert_eq!(result.paragraph_level, 1);
    }

    #[test]
    fn test_oversized_text_rejected() {
        let options = BidiOptions {
            max_text_length: 8,
            ..BidiOptions::default()
        };
        assert!(matches!(
            process("123456789", &options),
            Err(RtlError::BidiProcessingFailed(_))
        ));
    }

    #[test]
    fn test_whitespace_trimming() {
        let options = BidiOptions {
            preserve_whitespace: false,
            ..BidiOptions::default()
        };
        let result = process("  abc  ", &options).unwrap();
        assert_eq!(result.source_text, "abc");
        assert_eq!(result.len(), 3);

        let result = process("  abc  ", &BidiOptions::default()).unwrap();
        assert_eq!(result.len(), 7);
    }

    #[test]
    fn test_directional_marks() {
        let options = BidiOptions {
            insert_directional_marks: true,
            ..BidiOptions::default()
        };
        let result = process("ab אב", &options).unwrap();
        assert_eq!(result.processed_text, "ab \u{200E}אב");
        assert_eq!(result.source_text, "ab אב");
    }

    #[test]
    fn test_materialized_visual_text() {
        let options = BidiOptions {
            materialize_visual: true,
            ..BidiOptions::default()
        };
        let result = process("שלום", &options).unwrap();
        assert_eq!(result.processed_text, "םולש");
    }

    #[test]
    fn test_empty_text() {
        let result = process("", &BidiOptions::default()).unwrap();
        assert!(result.is_empty());
        assert!(result.direction_runs.is_empty());
    }

    #[test]
    fn test_paragraph_level() {
        assert_eq!(paragraph_level("abc", None), 0);
        assert_eq!(paragraph_level("שלום", None), 1);
        assert_eq!(paragraph_level("123", None), 0);
        assert_eq!(paragraph_level("abc", Some(TextDirection::Rtl)), 1);
        assert_eq!(paragraph_level("שלום abc", Some(TextDirection::Mixed)), 1);
    }
}
