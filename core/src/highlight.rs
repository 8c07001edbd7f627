//! Highlight span scanning.
//!
//! Finds maximal runs of highlight-class characters (the long-vowel mark,
//! sokuon and punctuation by default) inside a queried range and partitions
//! the range into `Highlighted` and `Normal` spans. The host widget maps
//! the two tags onto its own rendering attributes.

use crate::charset::CharClasses;

/// The two style tags a host can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Normal,
    Highlighted,
}

/// One styled span over a scanned range. Offsets are char positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    pub start: usize,
    pub end: usize,
    pub style: Style,
}

/// Partition `[start, end)` of `text` into highlight and normal spans.
///
/// Spans come back ordered, contiguous and non-overlapping, covering the
/// queried range exactly; zero-length spans are never produced. Callers
/// should snap the range outward to whole-line boundaries so a run
/// straddling an edit is never re-scanned partially.
pub fn scan(text: &str, start: usize, end: usize, classes: &CharClasses) -> Vec<StyleSpan> {
    let flags: Vec<bool> = text
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .map(|ch| classes.is_highlight(ch))
        .collect();

    let mut spans = Vec::new();
    let mut i = 0;
    while i < flags.len() {
        let mut j = i + 1;
        while j < flags.len() && flags[j] == flags[i] {
            j += 1;
        }
        spans.push(StyleSpan {
            start: start + i,
            end: start + j,
            style: if flags[i] {
                Style::Highlighted
            } else {
                Style::Normal
            },
        });
        i = j;
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partition(spans: &[StyleSpan], start: usize, end: usize) {
        let mut cursor = start;
        for span in spans {
            assert_eq!(span.start, cursor);
            assert!(span.end > span.start, "zero-length span");
            cursor = span.end;
        }
        assert_eq!(cursor, end);
    }

    #[test]
    fn test_partition_covers_range() {
        let classes = CharClasses::default();
        let text = "きらーり、ひかって";
        let len = text.chars().count();
        let spans = scan(text, 0, len, &classes);
        assert_partition(&spans, 0, len);
    }

    #[test]
    fn test_runs_and_gaps() {
        let classes = CharClasses::default();
        // き ら ー り 、 ひ か っ て
        let spans = scan("きらーり、ひかって", 0, 9, &classes);
        assert_eq!(
            spans,
            vec![
                StyleSpan { start: 0, end: 2, style: Style::Normal },
                StyleSpan { start: 2, end: 3, style: Style::Highlighted },
                StyleSpan { start: 3, end: 4, style: Style::Normal },
                StyleSpan { start: 4, end: 5, style: Style::Highlighted },
                StyleSpan { start: 5, end: 7, style: Style::Normal },
                StyleSpan { start: 7, end: 8, style: Style::Highlighted },
                StyleSpan { start: 8, end: 9, style: Style::Normal },
            ]
        );
    }

    #[test]
    fn test_subrange_is_restricted() {
        let classes = CharClasses::default();
        let spans = scan("ーーあーー", 1, 4, &classes);
        assert_partition(&spans, 1, 4);
        assert_eq!(spans[0].style, Style::Highlighted);
        assert_eq!(spans[1].style, Style::Normal);
        assert_eq!(spans[2].style, Style::Highlighted);
    }

    #[test]
    fn test_empty_range() {
        let classes = CharClasses::default();
        assert!(scan("あいう", 2, 2, &classes).is_empty());
        assert!(scan("", 0, 0, &classes).is_empty());
    }

    #[test]
    fn test_all_highlighted() {
        let classes = CharClasses::default();
        let spans = scan("ーっ、。", 0, 4, &classes);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style, Style::Highlighted);
    }
}
