//! Visual reordering (UAX #9 L2) and run construction

use super::types::{DirectionRun, MirroredCharacter};
use crate::analysis::TextDirection;
use crate::unicode::{mirror, CodePointClass};

/// Visual-to-logical index map for one line of resolved levels
///
/// From the highest level down to the lowest odd level, every maximal
/// sequence at that level or above is reversed.
pub fn reorder_visual(levels: &[u8]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..levels.len()).collect();
    if levels.is_empty() {
        return order;
    }

    let highest = levels.iter().copied().max().unwrap_or(0);
    let lowest_odd = levels
        .iter()
        .copied()
        .filter(|level| level % 2 == 1)
        .min()
        .unwrap_or(1);

    let mut level = highest;
    while level >= lowest_odd && level > 0 {
        let mut index = 0;
        while index < order.len() {
            if levels[order[index]] < level {
                index += 1;
                continue;
            }
            let start = index;
            while index < order.len() && levels[order[index]] >= level {
                index += 1;
            }
            order[start..index].reverse();
        }
        level -= 1;
    }

    order
}

/// Reorder each paragraph independently
///
/// Paragraphs keep their logical order; only code points within one
/// paragraph move.
pub(crate) fn reorder_paragraphs(levels: &[u8], classes: &[CodePointClass]) -> Vec<usize> {
    let mut order = Vec::with_capacity(levels.len());
    let mut start = 0;

    for index in 0..levels.len() {
        if classes[index] == CodePointClass::ParagraphSeparator || index + 1 == levels.len() {
            let end = index + 1;
            order.extend(
                reorder_visual(&levels[start..end])
                    .into_iter()
                    .map(|offset| offset + start),
            );
            start = end;
        }
    }

    order
}

/// Invert a permutation
pub fn invert(order: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; order.len()];
    for (position, &index) in order.iter().enumerate() {
        if let Some(slot) = inverse.get_mut(index) {
            *slot = position;
        }
    }
    inverse
}

/// Maximal runs of equal embedding level, in logical order
pub fn direction_runs(levels: &[u8]) -> Vec<DirectionRun> {
    let mut runs = Vec::new();
    let mut start = 0;

    for index in 1..=levels.len() {
        if index == levels.len() || levels[index] != levels[start] {
            let level = levels[start];
            runs.push(DirectionRun {
                start,
                end: index,
                direction: TextDirection::from_level(level),
                embedding_level: level,
            });
            start = index;
        }
    }

    runs
}

/// Mirrorable characters resolved to right-to-left levels
pub fn mirrored_characters(chars: &[char], levels: &[u8]) -> Vec<MirroredCharacter> {
    chars
        .iter()
        .zip(levels)
        .enumerate()
        .filter(|(_, (_, level))| *level % 2 == 1)
        .filter_map(|(position, (&original_char, _))| {
            mirror(original_char).map(|mirrored_char| MirroredCharacter {
                original_char,
                mirrored_char,
                position,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_all_ltr() {
        assert_eq!(reorder_visual(&[0, 0, 0]), vec![0, 1, 2]);
    }

    #[test]
    fn test_reorder_all_rtl() {
        assert_eq!(reorder_visual(&[1, 1, 1]), vec![2, 1, 0]);
    }

    #[test]
    fn test_reorder_mixed_levels() {
        // LTR word inside RTL paragraph keeps its internal order
        assert_eq!(reorder_visual(&[1, 1, 2, 2, 1]), vec![4, 2, 3, 1, 0]);
        // RTL word inside LTR paragraph
        assert_eq!(reorder_visual(&[0, 0, 1, 1, 0]), vec![0, 1, 3, 2, 4]);
    }

    #[test]
    fn test_reorder_empty() {
        assert!(reorder_visual(&[]).is_empty());
    }

    #[test]
    fn test_reorder_per_paragraph() {
        use CodePointClass as C;
        let classes = [C::StrongRTL, C::StrongRTL, C::ParagraphSeparator, C::StrongRTL, C::StrongRTL];
        let levels = [1, 1, 1, 1, 1];
        assert_eq!(reorder_paragraphs(&levels, &classes), vec![2, 1, 0, 4, 3]);
    }

    #[test]
    fn test_invert() {
        let order = vec![2, 0, 1];
        assert_eq!(invert(&order), vec![1, 2, 0]);
    }

    #[test]
    fn test_direction_runs() {
        let runs = direction_runs(&[0, 0, 1, 1, 2, 0]);
        assert_eq!(runs.len(), 4);
        assert_eq!((runs[0].start, runs[0].end), (0, 2));
        assert_eq!(runs[1].direction, TextDirection::Rtl);
        assert_eq!(runs[2].embedding_level, 2);
        assert_eq!(runs[2].direction, TextDirection::Ltr);
        assert_eq!((runs[3].start, runs[3].end), (5, 6));
        assert!(direction_runs(&[]).is_empty());
    }

    #[test]
    fn test_mirrored_characters() {
        let chars: Vec<char> = "(a)[".chars().collect();
        let mirrored = mirrored_characters(&chars, &[1, 2, 1, 0]);
        assert_eq!(mirrored.len(), 2);
        assert_eq!(mirrored[0].original_char, '(');
        assert_eq!(mirrored[0].mirrored_char, ')');
        assert_eq!(mirrored[1].position, 2);
    }
}
