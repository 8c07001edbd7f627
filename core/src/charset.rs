//! Character class registry.
//!
//! Immutable sets of characters driving segmentation, masking and
//! highlighting, built once from the configuration. Classification order is
//! fixed: attachment marks (yoon and kigo) win over the alphabet, the
//! alphabet wins over everything else. The katakana set is only consulted
//! by the transliteration masking step, and the highlight set only by the
//! span scanner, so the sets need not be disjoint.

use ahash::AHashSet;

use crate::config::Config;
use crate::kana;

/// Registry of the six configured character classes.
#[derive(Debug, Clone)]
pub struct CharClasses {
    yoon: AHashSet<char>,
    sokuon: AHashSet<char>,
    kigo: AHashSet<char>,
    alphabet: AHashSet<char>,
    katakana: AHashSet<char>,
    highlight: AHashSet<char>,
}

fn char_set(field: &str) -> AHashSet<char> {
    kana::nfc(field).chars().collect()
}

impl CharClasses {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            yoon: char_set(&cfg.yoon),
            sokuon: char_set(&cfg.sokuon),
            kigo: char_set(&cfg.kigo),
            alphabet: char_set(&cfg.alphabet),
            katakana: char_set(&cfg.katakana),
            highlight: char_set(&cfg.highlight),
        }
    }

    /// True for marks that attach to the preceding mora (yoon and kigo).
    pub fn attaches(&self, ch: char) -> bool {
        self.yoon.contains(&ch) || self.kigo.contains(&ch)
    }

    pub fn is_sokuon(&self, ch: char) -> bool {
        self.sokuon.contains(&ch)
    }

    pub fn is_alphabet(&self, ch: char) -> bool {
        self.alphabet.contains(&ch)
    }

    pub fn is_katakana(&self, ch: char) -> bool {
        self.katakana.contains(&ch)
    }

    pub fn is_highlight(&self, ch: char) -> bool {
        self.highlight.contains(&ch)
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classification() {
        let classes = CharClasses::default();
        assert!(classes.attaches('ゃ'));
        assert!(classes.attaches('。'));
        assert!(classes.is_sokuon('っ'));
        assert!(classes.is_alphabet('a'));
        assert!(classes.is_alphabet('é'));
        assert!(classes.is_katakana('ア'));
        assert!(!classes.is_katakana('あ'));
    }

    #[test]
    fn test_highlight_covers_choon_sokuon_kigo() {
        let classes = CharClasses::default();
        assert!(classes.is_highlight('ー'));
        assert!(classes.is_highlight('っ'));
        assert!(classes.is_highlight('、'));
        assert!(!classes.is_highlight('あ'));
    }
}
