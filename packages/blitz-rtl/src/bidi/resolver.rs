//! Embedding level resolution
//!
//! Explicit embeddings and overrides (X1-X10), weak types (W1-W7),
//! neutrals (N1-N2), implicit levels (I1-I2) and the whitespace reset of
//! L1. Isolates are not supported; their controls resolve as neutrals.

use crate::unicode::CodePointClass;

/// Deepest explicit embedding level (UAX #9 max_depth)
const MAX_DEPTH: u8 = 125;

/// Explicit directional formatting character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExplicitControl {
    Lre,
    Rle,
    Lro,
    Rlo,
    Pdf,
}

impl ExplicitControl {
    pub(crate) fn from_char(ch: char) -> Option<Self> {
        match ch {
            '\u{202A}' => Some(ExplicitControl::Lre),
            '\u{202B}' => Some(ExplicitControl::Rle),
            '\u{202C}' => Some(ExplicitControl::Pdf),
            '\u{202D}' => Some(ExplicitControl::Lro),
            '\u{202E}' => Some(ExplicitControl::Rlo),
            _ => None,
        }
    }

    /// Direction and override pushed by this control, `None` for PDF
    fn pushed(self) -> Option<(bool, OverrideStatus)> {
        match self {
            ExplicitControl::Lre => Some((false, OverrideStatus::Neutral)),
            ExplicitControl::Rle => Some((true, OverrideStatus::Neutral)),
            ExplicitControl::Lro => Some((false, OverrideStatus::Ltr)),
            ExplicitControl::Rlo => Some((true, OverrideStatus::Rtl)),
            ExplicitControl::Pdf => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverrideStatus {
    Neutral,
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy)]
struct DirectionalStatus {
    level: u8,
    override_status: OverrideStatus,
}

/// Switches for one resolution pass
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolverSettings {
    pub paragraph_level: u8,
    pub explicit_embeddings: bool,
    pub join_number_separators: bool,
}

/// Resolve one embedding level per character
///
/// `classes` are the unmodified classes of `chars`.
pub(crate) fn resolve_levels(
    chars: &[char],
    classes: &[CodePointClass],
    settings: ResolverSettings,
) -> Vec<u8> {
    if chars.is_empty() {
        return Vec::new();
    }

    let paragraph_level = settings.paragraph_level;
    let mut types = classes.to_vec();
    let (mut levels, removed) = resolve_explicit(chars, &mut types, settings);

    let runs = level_runs(&levels, &removed, classes);
    let run_levels: Vec<u8> = runs.iter().map(|run| levels[run[0]]).collect();
    let ends_paragraph: Vec<bool> = runs
        .iter()
        .map(|run| classes[run[run.len() - 1]] == CodePointClass::ParagraphSeparator)
        .collect();

    for (index, run) in runs.iter().enumerate() {
        let level = run_levels[index];
        let before = match index.checked_sub(1) {
            Some(previous) if !ends_paragraph[previous] => run_levels[previous],
            _ => paragraph_level,
        };
        let after = match run_levels.get(index + 1) {
            Some(&next) if !ends_paragraph[index] => next,
            _ => paragraph_level,
        };
        let sos = strong_for_level(level.max(before));
        let eos = strong_for_level(level.max(after));

        resolve_weak(&mut types, run, sos, settings.join_number_separators);
        resolve_neutral(&mut types, run, sos, eos, level);
        resolve_implicit(&mut levels, &types, run);
    }

    // Characters removed by X9 take the level of the preceding character
    let mut previous = paragraph_level;
    for (level, &was_removed) in levels.iter_mut().zip(&removed) {
        if was_removed {
            *level = previous;
        } else {
            previous = *level;
        }
    }

    resolve_trailing_whitespace(&mut levels, classes, paragraph_level);

    log::trace!(
        "resolved {} levels across {} level runs (paragraph level {})",
        levels.len(),
        runs.len(),
        paragraph_level
    );

    levels
}

/// X1-X9: explicit levels, overrides and removed characters
fn resolve_explicit(
    chars: &[char],
    types: &mut [CodePointClass],
    settings: ResolverSettings,
) -> (Vec<u8>, Vec<bool>) {
    let paragraph_level = settings.paragraph_level;
    let base = DirectionalStatus {
        level: paragraph_level,
        override_status: OverrideStatus::Neutral,
    };

    let mut levels = vec![paragraph_level; chars.len()];
    let mut removed = vec![false; chars.len()];
    let mut stack = vec![base];
    let mut overflow = 0usize;

    for (index, &ch) in chars.iter().enumerate() {
        let current = stack.last().copied().unwrap_or(base);

        let control = if settings.explicit_embeddings {
            ExplicitControl::from_char(ch)
        } else {
            None
        };

        if let Some(control) = control {
            removed[index] = true;
            levels[index] = current.level;

            match control.pushed() {
                Some((rtl, override_status)) => {
                    let level = next_level(current.level, rtl);
                    if level <= MAX_DEPTH && overflow == 0 {
                        stack.push(DirectionalStatus {
                            level,
                            override_status,
                        });
                    } else {
                        overflow += 1;
                    }
                }
                None => {
                    if overflow > 0 {
                        overflow -= 1;
                    } else if stack.len() > 1 {
                        stack.pop();
                    }
                }
            }
            continue;
        }

        match types[index] {
            CodePointClass::ParagraphSeparator => {
                stack.truncate(1);
                overflow = 0;
                levels[index] = paragraph_level;
            }
            CodePointClass::BoundaryNeutral => {
                removed[index] = true;
                levels[index] = current.level;
            }
            _ => {
                levels[index] = current.level;
                match current.override_status {
                    OverrideStatus::Ltr => types[index] = CodePointClass::StrongLTR,
                    OverrideStatus::Rtl => types[index] = CodePointClass::StrongRTL,
                    OverrideStatus::Neutral => {}
                }
            }
        }
    }

    (levels, removed)
}

/// Least odd (rtl) or even level greater than `level`
#[inline]
fn next_level(level: u8, rtl: bool) -> u8 {
    match (rtl, level % 2 == 0) {
        (true, true) | (false, false) => level + 1,
        (true, false) | (false, true) => level + 2,
    }
}

#[inline]
fn strong_for_level(level: u8) -> CodePointClass {
    if level % 2 == 1 {
        CodePointClass::StrongRTL
    } else {
        CodePointClass::StrongLTR
    }
}

/// X10: maximal same-level sequences of retained characters
///
/// A paragraph separator always closes the run it belongs to.
fn level_runs(levels: &[u8], removed: &[bool], classes: &[CodePointClass]) -> Vec<Vec<usize>> {
    let mut runs = Vec::new();
    let mut current: Vec<usize> = Vec::new();

    for index in 0..levels.len() {
        if removed[index] {
            continue;
        }
        if let Some(&last) = current.last() {
            if levels[last] != levels[index] || classes[last] == CodePointClass::ParagraphSeparator
            {
                runs.push(std::mem::take(&mut current));
            }
        }
        current.push(index);
    }

    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// W1-W7 over one level run
fn resolve_weak(
    types: &mut [CodePointClass],
    run: &[usize],
    sos: CodePointClass,
    join_number_separators: bool,
) {
    use CodePointClass as C;

    // W1: marks take the type of what they attach to
    let mut previous = sos;
    for &index in run {
        if types[index] == C::NonSpacingMark {
            types[index] = previous;
        }
        previous = types[index];
    }

    // W2: European digits after Arabic letters behave as Arabic numbers
    let mut last_strong = sos;
    for &index in run {
        match types[index] {
            C::StrongLTR | C::StrongRTL | C::ArabicLetter => last_strong = types[index],
            C::EuropeanNumber if last_strong == C::ArabicLetter => {
                types[index] = C::ArabicNumber;
            }
            _ => {}
        }
    }

    // W3
    for &index in run {
        if types[index] == C::ArabicLetter {
            types[index] = C::StrongRTL;
        }
    }

    if join_number_separators {
        // W4: a single separator between two numbers of the same kind
        for position in 1..run.len().saturating_sub(1) {
            let before = types[run[position - 1]];
            let after = types[run[position + 1]];
            let index = run[position];
            match types[index] {
                C::EuropeanSeparator | C::CommonSeparator
                    if before == C::EuropeanNumber && after == C::EuropeanNumber =>
                {
                    types[index] = C::EuropeanNumber;
                }
                C::CommonSeparator if before == C::ArabicNumber && after == C::ArabicNumber => {
                    types[index] = C::ArabicNumber;
                }
                _ => {}
            }
        }

        // W5: terminators adjacent to European numbers
        let mut position = 0;
        while position < run.len() {
            if types[run[position]] != C::EuropeanTerminator {
                position += 1;
                continue;
            }
            let start = position;
            while position < run.len() && types[run[position]] == C::EuropeanTerminator {
                position += 1;
            }
            let touches_number = (start > 0 && types[run[start - 1]] == C::EuropeanNumber)
                || (position < run.len() && types[run[position]] == C::EuropeanNumber);
            if touches_number {
                for &index in &run[start..position] {
                    types[index] = C::EuropeanNumber;
                }
            }
        }
    }

    // W6: leftover separators and terminators are neutral
    for &index in run {
        if matches!(
            types[index],
            C::EuropeanSeparator | C::EuropeanTerminator | C::CommonSeparator
        ) {
            types[index] = C::CommonNeutral;
        }
    }

    // W7: European numbers in left-to-right context
    let mut last_strong = sos;
    for &index in run {
        match types[index] {
            C::StrongLTR | C::StrongRTL => last_strong = types[index],
            C::EuropeanNumber if last_strong == C::StrongLTR => types[index] = C::StrongLTR,
            _ => {}
        }
    }
}

#[inline]
fn is_neutral(class: CodePointClass) -> bool {
    matches!(
        class,
        CodePointClass::CommonNeutral
            | CodePointClass::Whitespace
            | CodePointClass::SegmentSeparator
            | CodePointClass::ParagraphSeparator
            | CodePointClass::BoundaryNeutral
    )
}

/// Numbers count as right-to-left when resolving neutrals
#[inline]
fn neutral_context(class: CodePointClass) -> CodePointClass {
    if class == CodePointClass::StrongLTR {
        CodePointClass::StrongLTR
    } else {
        CodePointClass::StrongRTL
    }
}

/// N1-N2 over one level run
///
/// Neutrals between matching strong context take that direction, all
/// others take the embedding direction of the run.
fn resolve_neutral(
    types: &mut [CodePointClass],
    run: &[usize],
    sos: CodePointClass,
    eos: CodePointClass,
    level: u8,
) {
    let embedding = strong_for_level(level);
    let mut position = 0;

    while position < run.len() {
        if !is_neutral(types[run[position]]) {
            position += 1;
            continue;
        }

        let start = position;
        while position < run.len() && is_neutral(types[run[position]]) {
            position += 1;
        }

        let leading = if start == 0 {
            sos
        } else {
            neutral_context(types[run[start - 1]])
        };
        let trailing = if position == run.len() {
            eos
        } else {
            neutral_context(types[run[position]])
        };

        let resolved = if leading == trailing { leading } else { embedding };
        for &index in &run[start..position] {
            types[index] = resolved;
        }
    }
}

/// I1-I2
fn resolve_implicit(levels: &mut [u8], types: &[CodePointClass], run: &[usize]) {
    use CodePointClass as C;

    for &index in run {
        let level = levels[index];
        let class = types[index];
        levels[index] = if level % 2 == 0 {
            match class {
                C::StrongRTL => level + 1,
                _ if class.is_number() => level + 2,
                _ => level,
            }
        } else if class == C::StrongLTR || class.is_number() {
            level + 1
        } else {
            level
        };
    }
}

/// L1: separators and trailing whitespace return to the paragraph level
fn resolve_trailing_whitespace(levels: &mut [u8], classes: &[CodePointClass], paragraph_level: u8) {
    let mut trailing = true;

    for index in (0..levels.len()).rev() {
        match classes[index] {
            CodePointClass::SegmentSeparator | CodePointClass::ParagraphSeparator => {
                levels[index] = paragraph_level;
                trailing = true;
            }
            class if class.is_whitespace_like() => {
                if trailing {
                    levels[index] = paragraph_level;
                }
            }
            _ => trailing = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::classify_char;

    fn levels_for(text: &str, paragraph_level: u8) -> Vec<u8> {
        let chars: Vec<char> = text.chars().collect();
        let classes: Vec<CodePointClass> = chars.iter().map(|&ch| classify_char(ch)).collect();
        resolve_levels(
            &chars,
            &classes,
            ResolverSettings {
                paragraph_level,
                explicit_embeddings: true,
                join_number_separators: true,
            },
        )
    }

    #[test]
    fn test_plain_ltr() {
        assert_eq!(levels_for("abc def", 0), vec![0; 7]);
    }

    #[test]
    fn test_plain_rtl() {
        assert_eq!(levels_for("אבג", 1), vec![1, 1, 1]);
    }

    #[test]
    fn test_rtl_word_in_ltr_paragraph() {
        // "ab אב cd"
        assert_eq!(levels_for("ab אב cd", 0), vec![0, 0, 0, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_latin_in_rtl_paragraph() {
        // "אב ab גד": the spaces sit between different directions
        assert_eq!(levels_for("אב ab גד", 1), vec![1, 1, 1, 2, 2, 1, 1, 1]);
    }

    #[test]
    fn test_numbers_in_rtl() {
        // Digits after Arabic letters become Arabic numbers at level 2
        assert_eq!(levels_for("ب 12", 1), vec![1, 1, 2, 2]);
        // Hebrew keeps European numbers, still raised to level 2
        assert_eq!(levels_for("א 12", 1), vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_number_separators() {
        // "א 1,5" keeps the comma inside the number
        assert_eq!(levels_for("א 1,5", 1), vec![1, 1, 2, 2, 2]);

        let chars: Vec<char> = "א 1,5".chars().collect();
        let classes: Vec<CodePointClass> = chars.iter().map(|&ch| classify_char(ch)).collect();
        let split = resolve_levels(
            &chars,
            &classes,
            ResolverSettings {
                paragraph_level: 1,
                explicit_embeddings: true,
                join_number_separators: false,
            },
        );
        assert_eq!(split, vec![1, 1, 2, 1, 2]);
    }

    #[test]
    fn test_trailing_whitespace_reset() {
        assert_eq!(levels_for("ab אב  ", 0), vec![0, 0, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_explicit_embedding() {
        // RLE a b PDF c
        let levels = levels_for("\u{202B}ab\u{202C}c", 0);
        assert_eq!(levels, vec![0, 2, 2, 2, 0]);
    }

    #[test]
    fn test_explicit_override() {
        // RLO forces Latin letters to right-to-left
        let levels = levels_for("\u{202E}ab\u{202C}", 0);
        assert_eq!(levels, vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_explicit_controls_ignored_when_disabled() {
        let chars: Vec<char> = "\u{202E}ab".chars().collect();
        let classes: Vec<CodePointClass> = chars.iter().map(|&ch| classify_char(ch)).collect();
        let levels = resolve_levels(
            &chars,
            &classes,
            ResolverSettings {
                paragraph_level: 0,
                explicit_embeddings: false,
                join_number_separators: true,
            },
        );
        assert_eq!(levels, vec![0, 0, 0]);
    }

    #[test]
    fn test_nonspacing_mark_follows_base() {
        // Arabic letter with fatha, then Latin
        assert_eq!(levels_for("a بَ", 0), vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_next_level() {
        assert_eq!(next_level(0, true), 1);
        assert_eq!(next_level(0, false), 2);
        assert_eq!(next_level(1, true), 3);
        assert_eq!(next_level(1, false), 2);
    }
}
