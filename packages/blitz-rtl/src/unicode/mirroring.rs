//! Bidi_Mirroring_Glyph lookup
//!
//! Every pair is registered in both directions, so `mirror` is an
//! involution over the table.

use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Paired glyphs, each listed once
pub(crate) static MIRROR_PAIRS: &[(char, char)] = &[
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('<', '>'),
    ('«', '»'),
    ('‹', '›'),
    ('⁅', '⁆'),
    ('⁽', '⁾'),
    ('₍', '₎'),
    ('∈', '∋'),
    ('∉', '∌'),
    ('∊', '∍'),
    ('≤', '≥'),
    ('≦', '≧'),
    ('≪', '≫'),
    ('≮', '≯'),
    ('≰', '≱'),
    ('≲', '≳'),
    ('≺', '≻'),
    ('⊂', '⊃'),
    ('⊆', '⊇'),
    ('⌈', '⌉'),
    ('⌊', '⌋'),
    ('\u{2329}', '\u{232A}'),
    ('❨', '❩'),
    ('❪', '❫'),
    ('❬', '❭'),
    ('⟨', '⟩'),
    ('⟪', '⟫'),
    ('⟦', '⟧'),
    ('⟮', '⟯'),
    ('⦃', '⦄'),
    ('⦅', '⦆'),
    ('〈', '〉'),
    ('《', '》'),
    ('「', '」'),
    ('『', '』'),
    ('【', '】'),
    ('〔', '〕'),
    ('〖', '〗'),
    ('﹙', '﹚'),
    ('﹛', '﹜'),
    ('﹝', '﹞'),
    ('（', '）'),
    ('＜', '＞'),
    ('［', '］'),
    ('｛', '｝'),
];

static MIRROR_MAP: Lazy<AHashMap<char, char>> = Lazy::new(|| {
    let mut map = AHashMap::with_capacity(MIRROR_PAIRS.len() * 2);
    for &(open, close) in MIRROR_PAIRS {
        map.insert(open, close);
        map.insert(close, open);
    }
    map
});

/// Mirrored counterpart of `ch`, if it has one
#[inline]
pub fn mirror(ch: char) -> Option<char> {
    MIRROR_MAP.get(&ch).copied()
}

/// Whether `ch` takes a different glyph in right-to-left context
#[inline]
pub fn is_mirrored(ch: char) -> bool {
    MIRROR_MAP.contains_key(&ch)
}

/// Iterate every character present in the table
pub fn mirrored_chars() -> impl Iterator<Item = char> {
    MIRROR_PAIRS
        .iter()
        .flat_map(|&(open, close)| [open, close])
}
