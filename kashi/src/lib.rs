//! kashi crate root
//!
//! Japanese lyric entry assistant. This crate composes the pure machinery
//! from `kashi-core` (mora segmentation, highlight scanning, the send
//! cursor) with the external reading oracle into the kanji-to-kana
//! pipeline and an editor session facade; `main.rs` wraps it all in an
//! interactive CLI.
//!
//! Public API exported here:
//! - `Transliterator` from `translit`
//! - `ReadingOracle`, `HttpReadingOracle`, `StaticOracle` from `oracle`
//! - `LyricsEditor` and `Restyle` from `editor`

pub mod editor;
pub mod oracle;
pub mod translit;

pub use editor::{LyricsEditor, Restyle};
pub use oracle::{HttpReadingOracle, OracleError, PosTag, ReadingOracle, ReadingToken, StaticOracle};
pub use translit::Transliterator;

// Convenience re-exports for common types used by callers.
pub use kashi_core::{
    address_width, scan, Advance, CaptureEmitter, CharClasses, Config, ConfigError, Emitter,
    PlainTextBuffer, SendCursor, Style, StyleSpan, TextBuffer,
};
