//! Kana and character-width helpers.

use unicode_normalization::UnicodeNormalization;

// Small katakana ァ through ヶ; the hiragana syllabary sits one fixed
// offset below this block. ー and the halfwidth forms are outside it.
const KATA_FIRST: u32 = 0x30A1;
const KATA_LAST: u32 = 0x30F6;
const HIRA_FIRST: u32 = KATA_FIRST - KANA_SHIFT;
const HIRA_LAST: u32 = KATA_LAST - KANA_SHIFT;
const KANA_SHIFT: u32 = 0x60;

/// NFC-normalize without trimming.
///
/// Decomposed voicing marks (か followed by U+3099) would otherwise fall
/// outside the configured character classes.
pub fn nfc(s: &str) -> String {
    s.nfc().collect()
}

/// Convert katakana to hiragana character by character.
///
/// Code points in the katakana syllabary shift down by a fixed offset;
/// everything else, including the long-vowel mark ー, passes through.
pub fn kata_to_hira(s: &str) -> String {
    s.chars()
        .map(|ch| {
            let code = ch as u32;
            if (KATA_FIRST..=KATA_LAST).contains(&code) {
                char::from_u32(code - KANA_SHIFT).unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}

/// Convert hiragana to katakana, the inverse shift.
pub fn hira_to_kata(s: &str) -> String {
    s.chars()
        .map(|ch| {
            let code = ch as u32;
            if (HIRA_FIRST..=HIRA_LAST).contains(&code) {
                char::from_u32(code + KANA_SHIFT).unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}

/// True if any character falls in the katakana block (ー included).
pub fn contains_katakana(s: &str) -> bool {
    s.chars().any(|ch| matches!(ch as u32, 0x30A1..=0x30FF))
}

/// True if any character is East-Asian narrow: printable ASCII or the
/// halfwidth forms block.
pub fn has_narrow(s: &str) -> bool {
    s.chars()
        .any(|ch| matches!(ch as u32, 0x20..=0x7E | 0xFF61..=0xFFDC | 0xFFE8..=0xFFEE))
}

/// Remove every whitespace character except CR and LF.
pub fn strip_inline_whitespace(s: &str) -> String {
    s.chars()
        .filter(|ch| !ch.is_whitespace() || matches!(ch, '\r' | '\n'))
        .collect()
}
