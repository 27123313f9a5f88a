//! Locale-specific digit, punctuation and calendar substitution

use std::ops::Range;

use super::types::{
    FormatFeatures, FormattingContext, FormattingKind, Locale, RtlFormattedText, RtlFormatting,
    RtlNumberFormat,
};
use crate::analysis::TextDirection;
use crate::error::RtlResult;

const ARABIC_COMMA: char = '\u{060C}';
const ARABIC_SEMICOLON: char = '\u{061B}';
const ARABIC_QUESTION_MARK: char = '\u{061F}';
const ARABIC_PERCENT_SIGN: char = '\u{066A}';
const ARABIC_DECIMAL_SEPARATOR: char = '\u{066B}';
const ARABIC_THOUSANDS_SEPARATOR: char = '\u{066C}';

/// Apply the locale's substitutions to `text`
///
/// Digits follow the context's number format or the locale default.
/// Punctuation is only replaced for Arabic-script locales in right-to-left
/// or mixed text. Date patterns produce calendar hints without changing
/// the text.
pub fn format(text: &str, locale: &str, context: &FormattingContext) -> RtlResult<RtlFormattedText> {
    let locale = Locale::parse(locale)?;
    let number_format = context
        .number_format
        .unwrap_or_else(|| locale.default_number_format());

    let substitute_digits = context.features.contains(FormatFeatures::DIGITS)
        && number_format != RtlNumberFormat::Western;
    let substitute_punctuation = context.features.contains(FormatFeatures::PUNCTUATION)
        && locale.uses_arabic_script()
        && matches!(context.direction, TextDirection::Rtl | TextDirection::Mixed);

    let dates = find_dates(text);
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_end = |index: usize| chars.get(index).map_or(text.len(), |&(offset, _)| offset);

    let mut formatted = String::with_capacity(text.len() * 2);
    // Formatted offset of every original char start, plus the end
    let mut positions = Vec::with_capacity(chars.len() + 1);
    let mut formatting = Vec::new();

    let mut index = 0;
    while index < chars.len() {
        let (start, ch) = chars[index];

        if substitute_digits && ch.is_ascii_digit() {
            let mut end_index = index;
            while end_index < chars.len() && chars[end_index].1.is_ascii_digit() {
                end_index += 1;
            }
            let end = byte_end(end_index);
            let formatted_start = formatted.len();
            for &(_, digit) in &chars[index..end_index] {
                positions.push(formatted.len());
                formatted.push(number_format.digit(digit));
            }
            formatting.push(RtlFormatting {
                kind: FormattingKind::Digits,
                original: text[start..end].to_string(),
                replacement: formatted[formatted_start..].to_string(),
                original_range: start..end,
                formatted_range: formatted_start..formatted.len(),
            });
            index = end_index;
            continue;
        }

        let between_digits = number_separator(ch).is_some()
            && index > 0
            && chars[index - 1].1.is_ascii_digit()
            && chars.get(index + 1).is_some_and(|&(_, next)| next.is_ascii_digit());

        let substitution = if between_digits {
            let in_date = dates.iter().any(|date| date.contains(&start));
            if substitute_digits && !in_date {
                number_separator(ch).map(|replacement| (FormattingKind::NumberSeparator, replacement))
            } else {
                None
            }
        } else if substitute_punctuation {
            arabic_punctuation(ch).map(|replacement| (FormattingKind::Punctuation, replacement))
        } else {
            None
        };

        positions.push(formatted.len());
        match substitution {
            Some((kind, replacement)) => {
                let formatted_start = formatted.len();
                formatted.push(replacement);
                formatting.push(RtlFormatting {
                    kind,
                    original: ch.to_string(),
                    replacement: replacement.to_string(),
                    original_range: start..start + ch.len_utf8(),
                    formatted_range: formatted_start..formatted.len(),
                });
            }
            None => formatted.push(ch),
        }
        index += 1;
    }
    positions.push(formatted.len());

    if context.features.contains(FormatFeatures::CALENDAR) && !dates.is_empty() {
        let calendar = locale.calendar();
        let map = |offset: usize| match chars.binary_search_by_key(&offset, |&(start, _)| start) {
            Ok(index) => positions[index],
            Err(_) => formatted.len(),
        };
        for date in &dates {
            let formatted_range = map(date.start)..map(date.end);
            formatting.push(RtlFormatting {
                kind: FormattingKind::CalendarHint(calendar),
                original: text[date.clone()].to_string(),
                replacement: formatted[formatted_range.clone()].to_string(),
                original_range: date.clone(),
                formatted_range,
            });
        }
        formatting.sort_by_key(|entry| entry.original_range.start);
    }

    log::debug!(
        "formatted {} bytes for locale {}: {} entries",
        text.len(),
        locale.language,
        formatting.len()
    );

    Ok(RtlFormattedText {
        text: formatted,
        locale,
        formatting,
    })
}

fn number_separator(ch: char) -> Option<char> {
    match ch {
        ',' => Some(ARABIC_THOUSANDS_SEPARATOR),
        '.' => Some(ARABIC_DECIMAL_SEPARATOR),
        _ => None,
    }
}

fn arabic_punctuation(ch: char) -> Option<char> {
    match ch {
        ',' => Some(ARABIC_COMMA),
        ';' => Some(ARABIC_SEMICOLON),
        '?' => Some(ARABIC_QUESTION_MARK),
        '%' => Some(ARABIC_PERCENT_SIGN),
        _ => None,
    }
}

/// Byte ranges of `d/m/y`, `y-m-d` and `d.m.y` style dates
///
/// The outer components have one to four digits (not both longer than
/// two), the middle one or two, and both separators match.
fn find_dates(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut dates = Vec::new();
    let mut index = 0;

    while index < bytes.len() {
        let starts_number =
            bytes[index].is_ascii_digit() && (index == 0 || !bytes[index - 1].is_ascii_digit());
        if !starts_number {
            index += 1;
            continue;
        }
        match match_date(bytes, index) {
            Some(end) => {
                dates.push(index..end);
                index = end;
            }
            None => index += 1,
        }
    }

    dates
}

fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

fn match_date(bytes: &[u8], start: usize) -> Option<usize> {
    let first_end = digit_run_end(bytes, start);
    let first = first_end - start;
    let separator = *bytes.get(first_end)?;
    if !(1..=4).contains(&first) || !matches!(separator, b'/' | b'-' | b'.') {
        return None;
    }

    let second_start = first_end + 1;
    let second_end = digit_run_end(bytes, second_start);
    if !(1..=2).contains(&(second_end - second_start)) || bytes.get(second_end) != Some(&separator) {
        return None;
    }

    let third_start = second_end + 1;
    let third_end = digit_run_end(bytes, third_start);
    let third = third_end - third_start;
    if !(1..=4).contains(&third) || (first > 2 && third > 2) {
        return None;
    }

    // Longer dotted or dashed sequences are versions or addresses
    let continued_before =
        start >= 2 && bytes[start - 1] == separator && bytes[start - 2].is_ascii_digit();
    let continues = bytes.get(third_end) == Some(&separator)
        && bytes.get(third_end + 1).is_some_and(u8::is_ascii_digit);
    if continued_before || continues {
        return None;
    }

    Some(third_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cultural::types::CalendarSystem;

    #[test]
    fn test_arabic_digits() {
        let result = format("السعر 1234", "ar", &FormattingContext::default()).unwrap();
        assert_eq!(result.text, "السعر ١٢٣٤");
        let digits: Vec<_> = result.entries(FormattingKind::Digits).collect();
        assert_eq!(digits.len(), 1);
        assert_eq!(digits[0].original, "1234");
        assert_eq!(digits[0].replacement, "١٢٣٤");
        assert_eq!(&result.text[digits[0].formatted_range.clone()], "١٢٣٤");
    }

    #[test]
    fn test_persian_digits() {
        let result = format("قیمت 250", "fa-IR", &FormattingContext::default()).unwrap();
        assert_eq!(result.text, "قیمت ۲۵۰");
    }

    #[test]
    fn test_hebrew_keeps_western_digits() {
        let result = format("מחיר 100?", "he", &FormattingContext::default()).unwrap();
        assert_eq!(result.text, "מחיר 100?");
        assert!(!result.is_modified());
    }

    #[test]
    fn test_number_separators() {
        let result = format("1,234.5", "ar", &FormattingContext::default()).unwrap();
        assert_eq!(result.text, "١٬٢٣٤٫٥");
        assert_eq!(result.entries(FormattingKind::NumberSeparator).count(), 2);
        assert_eq!(result.entries(FormattingKind::Digits).count(), 3);
    }

    #[test]
    fn test_punctuation() {
        let result = format("نعم, لا; ماذا? 50%", "ar", &FormattingContext::default()).unwrap();
        assert_eq!(result.text, "نعم، لا؛ ماذا؟ ٥٠٪");
        assert_eq!(result.entries(FormattingKind::Punctuation).count(), 4);
    }

    #[test]
    fn test_punctuation_between_digits() {
        let context = FormattingContext::default();
        assert_eq!(format("3;4", "ar", &context).unwrap().text, "٣؛٤");
        assert_eq!(format("5?6", "ar", &context).unwrap().text, "٥؟٦");

        let result = format("10%5", "ar", &context).unwrap();
        assert_eq!(result.text, "١٠٪٥");
        assert_eq!(result.entries(FormattingKind::Punctuation).count(), 1);
        assert_eq!(result.entries(FormattingKind::NumberSeparator).count(), 0);
    }

    #[test]
    fn test_punctuation_requires_rtl_context() {
        let context = FormattingContext::new(TextDirection::Ltr);
        let result = format("yes, no?", "ar", &context).unwrap();
        assert_eq!(result.text, "yes, no?");
    }

    #[test]
    fn test_features_toggle_independently() {
        let context = FormattingContext::default().with_features(FormatFeatures::PUNCTUATION);
        let result = format("12, 34", "ar", &context).unwrap();
        assert_eq!(result.text, "12، 34");

        let context = FormattingContext::default().with_features(FormatFeatures::DIGITS);
        let result = format("12, 34", "ar", &context).unwrap();
        assert_eq!(result.text, "١٢, ٣٤");
    }

    #[test]
    fn test_number_format_override() {
        let context =
            FormattingContext::default().with_number_format(RtlNumberFormat::ExtendedArabicIndic);
        let result = format("7", "ar", &context).unwrap();
        assert_eq!(result.text, "۷");
    }

    #[test]
    fn test_calendar_hints() {
        let result = format("موعد 15/03/2024", "ar-SA", &FormattingContext::default()).unwrap();
        let hints: Vec<_> = result
            .entries(FormattingKind::CalendarHint(CalendarSystem::Hijri))
            .collect();
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].original, "15/03/2024");
        assert_eq!(hints[0].replacement, "١٥/٠٣/٢٠٢٤");
        assert_eq!(&result.text[hints[0].formatted_range.clone()], "١٥/٠٣/٢٠٢٤");
    }

    #[test]
    fn test_dotted_date_keeps_separators() {
        let result = format("01.02.2024", "ar", &FormattingContext::default()).unwrap();
        assert_eq!(result.text, "٠١.٠٢.٢٠٢٤");
        assert_eq!(result.entries(FormattingKind::NumberSeparator).count(), 0);
    }

    #[test]
    fn test_find_dates() {
        assert_eq!(find_dates("on 2024-03-15 and 1/2/99"), vec![3..13, 18..24]);
        assert!(find_dates("version 1.2.3.4").is_empty());
        assert!(find_dates("2024-2024-2024").is_empty());
        assert!(find_dates("12/345/6").is_empty());
    }

    #[test]
    fn test_undo_restores_original() {
        let text = "المجموع: 1,234.5 ريال, أي 15% في 15/03/2024?";
        let result = format(text, "ar-SA", &FormattingContext::default()).unwrap();
        assert_ne!(result.text, text);
        assert_eq!(result.undo(), text);
    }

    #[test]
    fn test_invalid_locale() {
        assert!(matches!(
            format("abc", "", &FormattingContext::default()),
            Err(crate::error::RtlError::CulturalFormattingFailed(_))
        ));
    }
}
