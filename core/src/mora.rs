//! Mora segmentation.
//!
//! One mora is one phonetic beat: a base character plus any trailing
//! small-kana or punctuation marks, or a maximal alphabetic run not broken
//! by whitespace. Attachment marks never start a new beat except at the
//! very start of the input.

use crate::charset::CharClasses;
use crate::kana;

/// Split `text` into mora tokens, left to right. Pure and total.
pub fn segment(text: &str, classes: &CharClasses) -> Vec<String> {
    let mut moras: Vec<String> = Vec::new();
    let mut in_alpha_run = false;

    for ch in kana::nfc(text).chars() {
        if ch.is_whitespace() {
            in_alpha_run = false;
        } else if classes.attaches(ch) {
            match moras.last_mut() {
                Some(last) => last.push(ch),
                None => moras.push(ch.to_string()),
            }
        } else if classes.is_alphabet(ch) {
            match moras.last_mut() {
                Some(last) if in_alpha_run => last.push(ch),
                _ => moras.push(ch.to_string()),
            }
            in_alpha_run = true;
        } else {
            moras.push(ch.to_string());
            in_alpha_run = false;
        }
    }

    moras
}

/// Re-space `text` so each line carries one space between moras.
///
/// Splitting the result again yields the same tokens, so respacing never
/// moves a phonetic boundary.
pub fn respace(text: &str, classes: &CharClasses) -> String {
    let mut out = String::new();
    for line in text.lines() {
        out.push_str(&segment(line, classes).join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yoon_attaches() {
        let classes = CharClasses::default();
        assert_eq!(segment("きゃ a", &classes), vec!["きゃ", "a"]);
    }

    #[test]
    fn test_plain_kana_is_one_mora_each() {
        let classes = CharClasses::default();
        assert_eq!(
            segment("さようなら", &classes),
            vec!["さ", "よ", "う", "な", "ら"]
        );
    }

    #[test]
    fn test_alphabet_words_merge() {
        let classes = CharClasses::default();
        assert_eq!(segment("Hello World", &classes), vec!["Hello", "World"]);
    }

    #[test]
    fn test_attachment_reaches_across_whitespace() {
        let classes = CharClasses::default();
        assert_eq!(segment("きゃ 。", &classes), vec!["きゃ。"]);
    }

    #[test]
    fn test_leading_mark_starts_the_only_token() {
        let classes = CharClasses::default();
        assert_eq!(segment("「きみ", &classes), vec!["「", "き", "み"]);
    }

    #[test]
    fn test_kana_interrupts_alphabet_run() {
        let classes = CharClasses::default();
        assert_eq!(segment("abあc", &classes), vec!["ab", "あ", "c"]);
    }

    #[test]
    fn test_respace_is_stable() {
        let classes = CharClasses::default();
        for text in [
            "きゃりーぱみゅぱみゅ",
            "夜空に瞬くシリウスの煌めき",
            "Hello World",
            "きゃ 。",
            "さようなら、せかい。",
        ] {
            let once = segment(text, &classes);
            let respaced = once.join(" ");
            assert_eq!(segment(&respaced, &classes), once, "input: {text}");
        }
    }

    #[test]
    fn test_respace_handles_lines() {
        let classes = CharClasses::default();
        assert_eq!(
            respace("きゃらめる\nHello World", &classes),
            "きゃ ら め る\nHello World\n"
        );
    }
}
