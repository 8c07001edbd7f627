//! Reading oracle: the external morphological analysis service.
//!
//! The oracle receives one whitespace-free text segment and returns ordered
//! tokens carrying surface text, a part-of-speech tag and a katakana
//! reading. Model inference is slow, so every call is a long-latency
//! blocking operation; callers keep it off latency-sensitive threads and
//! never run two calls for the same request at once.
//!
//! Transliteration cannot proceed without readings, so failures surface as
//! errors immediately instead of degrading to an empty result.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use kashi_core::kana;

/// Oracle failure. Opaque to callers: there is no partial result.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("reading service unavailable: {0}")]
    Unavailable(String),

    #[error("unexpected reading service response: {0}")]
    BadResponse(String),
}

/// Part-of-speech tag, UPOS-style closed set. Tags the wire format does
/// not name collapse to `Other` instead of failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Other,
}

impl From<String> for PosTag {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "ADJ" => PosTag::Adj,
            "ADP" => PosTag::Adp,
            "ADV" => PosTag::Adv,
            "AUX" => PosTag::Aux,
            "CCONJ" => PosTag::Cconj,
            "DET" => PosTag::Det,
            "INTJ" => PosTag::Intj,
            "NOUN" => PosTag::Noun,
            "NUM" => PosTag::Num,
            "PART" => PosTag::Part,
            "PRON" => PosTag::Pron,
            "PROPN" => PosTag::Propn,
            "PUNCT" => PosTag::Punct,
            "SCONJ" => PosTag::Sconj,
            "SYM" => PosTag::Sym,
            "VERB" => PosTag::Verb,
            "X" => PosTag::X,
            _ => PosTag::Other,
        }
    }
}

impl PosTag {
    pub fn is_punct(&self) -> bool {
        matches!(self, PosTag::Punct)
    }
}

/// One analyzed token. `reading` is katakana.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingToken {
    pub surface: String,
    #[serde(rename = "pos")]
    pub tag: PosTag,
    pub reading: String,
}

impl ReadingToken {
    pub fn new<S: Into<String>, R: Into<String>>(surface: S, tag: PosTag, reading: R) -> Self {
        Self {
            surface: surface.into(),
            tag,
            reading: reading.into(),
        }
    }
}

/// Morphological analysis backend.
pub trait ReadingOracle {
    /// Analyze one whitespace-free segment into ordered tokens.
    fn analyze(&self, segment: &str) -> Result<Vec<ReadingToken>, OracleError>;
}

impl<T: ReadingOracle + ?Sized> ReadingOracle for Box<T> {
    fn analyze(&self, segment: &str) -> Result<Vec<ReadingToken>, OracleError> {
        (**self).analyze(segment)
    }
}

/// HTTP client for a user-deployed analysis server.
///
/// Request: POST to the endpoint with JSON body `{"text": segment}`.
/// Response: JSON array
/// `[{"surface": "夜空", "pos": "NOUN", "reading": "ヨゾラ"}, ...]`.
pub struct HttpReadingOracle {
    endpoint: String,
    timeout_ms: u64,
}

impl HttpReadingOracle {
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms: 30_000,
        }
    }

    /// Set the request timeout in milliseconds.
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl ReadingOracle for HttpReadingOracle {
    fn analyze(&self, segment: &str) -> Result<Vec<ReadingToken>, OracleError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(self.timeout_ms))
            .build()
            .map_err(|e| OracleError::Unavailable(e.to_string()))?;

        let body = serde_json::json!({ "text": segment });

        let response = client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .map_err(|e| OracleError::Unavailable(e.to_string()))?;

        let tokens: Vec<ReadingToken> = response
            .json()
            .map_err(|e| OracleError::BadResponse(e.to_string()))?;

        tracing::debug!(segment, tokens = tokens.len(), "oracle answered");
        Ok(tokens)
    }
}

/// Table-backed oracle for offline runs and tests.
///
/// Longest-match lookup over registered surfaces; kana outside the table
/// fall back to their own katakana reading, and anything else passes
/// through as an `X`-tagged surface so it survives conversion unchanged.
#[derive(Debug, Clone, Default)]
pub struct StaticOracle {
    entries: Vec<(String, PosTag, String)>,
}

impl StaticOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handful of lyric vocabulary so the CLI works out of the box.
    pub fn with_demo_entries() -> Self {
        let mut oracle = Self::new();
        for (surface, tag, reading) in [
            ("夜空", PosTag::Noun, "ヨゾラ"),
            ("瞬く", PosTag::Verb, "マタタク"),
            ("煌めき", PosTag::Noun, "キラメキ"),
            ("歌詞", PosTag::Noun, "カシ"),
            ("世界", PosTag::Noun, "セカイ"),
            ("歌う", PosTag::Verb, "ウタウ"),
            ("光", PosTag::Noun, "ヒカリ"),
            ("海", PosTag::Noun, "ウミ"),
            ("、", PosTag::Punct, "、"),
            ("。", PosTag::Punct, "。"),
        ] {
            oracle.insert(surface, tag, reading);
        }
        oracle
    }

    pub fn insert<S: Into<String>, R: Into<String>>(&mut self, surface: S, tag: PosTag, reading: R) {
        self.entries.push((surface.into(), tag, reading.into()));
    }

    // Longest registered surface matching at the head of `rest`.
    fn best_match(&self, rest: &str) -> Option<&(String, PosTag, String)> {
        self.entries
            .iter()
            .filter(|(surface, _, _)| !surface.is_empty() && rest.starts_with(surface.as_str()))
            .max_by_key(|(surface, _, _)| surface.len())
    }
}

impl ReadingOracle for StaticOracle {
    fn analyze(&self, segment: &str) -> Result<Vec<ReadingToken>, OracleError> {
        let mut tokens = Vec::new();
        let mut rest = segment;
        while !rest.is_empty() {
            if let Some((surface, tag, reading)) = self.best_match(rest) {
                tokens.push(ReadingToken::new(surface.clone(), *tag, reading.clone()));
                rest = &rest[surface.len()..];
            } else {
                let ch = match rest.chars().next() {
                    Some(ch) => ch,
                    None => break,
                };
                let surface = ch.to_string();
                tokens.push(ReadingToken::new(
                    surface.clone(),
                    PosTag::X,
                    kana::hira_to_kata(&surface),
                ));
                rest = &rest[ch.len_utf8()..];
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tag_wire_names() {
        let token: ReadingToken =
            serde_json::from_str(r#"{"surface":"夜空","pos":"NOUN","reading":"ヨゾラ"}"#).unwrap();
        assert_eq!(token.tag, PosTag::Noun);
        assert!(!token.tag.is_punct());

        let punct: ReadingToken =
            serde_json::from_str(r#"{"surface":"、","pos":"PUNCT","reading":"、"}"#).unwrap();
        assert!(punct.tag.is_punct());

        // unknown tags collapse instead of failing the whole response
        let odd: ReadingToken =
            serde_json::from_str(r#"{"surface":"?","pos":"NEWTAG","reading":""}"#).unwrap();
        assert_eq!(odd.tag, PosTag::Other);
    }

    #[test]
    fn test_static_oracle_prefers_longest_match() {
        let mut oracle = StaticOracle::new();
        oracle.insert("歌", PosTag::Noun, "ウタ");
        oracle.insert("歌詞", PosTag::Noun, "カシ");
        let tokens = oracle.analyze("歌詞").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].reading, "カシ");
    }

    #[test]
    fn test_static_oracle_kana_fallback() {
        let oracle = StaticOracle::new();
        let tokens = oracle.analyze("うた").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].reading, "ウ");
        assert_eq!(tokens[1].reading, "タ");
    }

    #[test]
    fn test_static_oracle_unknown_passes_through() {
        let oracle = StaticOracle::new();
        let tokens = oracle.analyze("謎x").unwrap();
        assert_eq!(tokens[0].surface, "謎");
        assert_eq!(tokens[0].reading, "謎");
        assert_eq!(tokens[1].surface, "x");
    }
}
