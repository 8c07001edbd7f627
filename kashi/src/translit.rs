//! Kanji to kana transliteration pipeline.
//!
//! Ordered stages: user dictionary overrides, katakana masking, whitespace-
//! preserving segmentation, oracle readings, katakana restoration. The
//! oracle erases whitespace it is given, so segments go out one at a time
//! and the runs between them are kept verbatim. Failure is atomic: any
//! oracle error fails the whole call and no partial output escapes.

use once_cell::sync::Lazy;
use regex::Regex;

use kashi_core::charset::CharClasses;
use kashi_core::kana;

use crate::oracle::{OracleError, ReadingOracle};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Kanji to kana converter over a reading oracle.
pub struct Transliterator<O> {
    oracle: O,
    classes: CharClasses,
    conv_dict: Vec<(String, String)>,
}

impl<O: ReadingOracle> Transliterator<O> {
    pub fn new(oracle: O, classes: CharClasses, conv_dict: Vec<(String, String)>) -> Self {
        Self {
            oracle,
            classes,
            conv_dict,
        }
    }

    /// Transliterate kanji to kana, keeping katakana as written.
    pub fn transliterate(&self, text: &str) -> Result<String, OracleError> {
        let mut work = kana::nfc(text);

        // Hard-coded readings win over the oracle: every pair, in list
        // order, every occurrence, before anything else runs.
        for (surface, reading) in &self.conv_dict {
            work = work.replace(surface.as_str(), reading);
        }

        // Mask katakana runs so the later stages cannot reword them. The
        // placeholders are pure ASCII, which the token stage leaves alone.
        let (masked, runs) = mask_katakana(&work, &self.classes);

        // Segment-at-a-time conversion; whitespace runs pass through
        // verbatim at their original positions.
        let mut converted = String::new();
        let mut cur = 0;
        for m in WHITESPACE_RUN.find_iter(&masked) {
            converted.push_str(&self.read_segment(&masked[cur..m.start()])?);
            converted.push_str(m.as_str());
            cur = m.end();
        }
        converted.push_str(&self.read_segment(&masked[cur..])?);

        // Put the recorded katakana back, first occurrence of each
        // placeholder in the order the runs were seen.
        for (placeholder, original) in &runs {
            converted = converted.replacen(placeholder.as_str(), original, 1);
        }

        tracing::debug!(
            chars_in = text.chars().count(),
            chars_out = converted.chars().count(),
            masked_runs = runs.len(),
            "transliterated"
        );
        Ok(converted)
    }

    // One oracle round trip for a whitespace-free segment.
    fn read_segment(&self, segment: &str) -> Result<String, OracleError> {
        if segment.is_empty() {
            return Ok(String::new());
        }

        let mut result = String::new();
        for token in self.oracle.analyze(segment)? {
            if kana::has_narrow(&token.surface)
                || token.tag.is_punct()
                || kana::contains_katakana(&token.surface)
            {
                result.push_str(&token.surface);
            } else {
                result.push_str(&kana::kata_to_hira(&token.reading));
            }
        }
        Ok(result)
    }
}

// Replace each maximal katakana run with a unique placeholder, recording
// the original run text per placeholder for restoration.
fn mask_katakana(text: &str, classes: &CharClasses) -> (String, Vec<(String, String)>) {
    let mut masked = String::new();
    let mut runs: Vec<(String, String)> = Vec::new();
    let mut run = String::new();

    let mut flush = |masked: &mut String, runs: &mut Vec<(String, String)>, run: &mut String| {
        if !run.is_empty() {
            let placeholder = format!("{{@K{}@}}", runs.len());
            masked.push_str(&placeholder);
            runs.push((placeholder, std::mem::take(run)));
        }
    };

    for ch in text.chars() {
        if classes.is_katakana(ch) {
            run.push(ch);
        } else {
            flush(&mut masked, &mut runs, &mut run);
            masked.push(ch);
        }
    }
    flush(&mut masked, &mut runs, &mut run);

    (masked, runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_assigns_unique_placeholders() {
        let classes = CharClasses::default();
        let (masked, runs) = mask_katakana("ソラとウミ", &classes);
        assert_eq!(masked, "{@K0@}と{@K1@}");
        assert_eq!(
            runs,
            vec![
                ("{@K0@}".to_string(), "ソラ".to_string()),
                ("{@K1@}".to_string(), "ウミ".to_string()),
            ]
        );
    }

    #[test]
    fn test_mask_without_katakana_is_identity() {
        let classes = CharClasses::default();
        let (masked, runs) = mask_katakana("よぞらの漢字", &classes);
        assert_eq!(masked, "よぞらの漢字");
        assert!(runs.is_empty());
    }

    #[test]
    fn test_mask_run_spans_whole_word() {
        let classes = CharClasses::default();
        let (masked, runs) = mask_katakana("シリウス", &classes);
        assert_eq!(masked, "{@K0@}");
        assert_eq!(runs[0].1, "シリウス");
    }
}
