//! kashi-core
//!
//! Mora segmentation, highlight scanning, and send-cursor logic for Japanese
//! lyric entry, shared by the `kashi` tool crate.
//!
//! The GUI widget, hotkey capture and keystroke backend live in host
//! applications; this crate only works against the `TextBuffer` and
//! `Emitter` seams and never owns rendering or input capture.
//!
//! Public API:
//! - `Config` - flat configuration record (TOML, with JSON import)
//! - `CharClasses` - immutable character class registry built from config
//! - `mora` - mora segmentation and respacing
//! - `scan` / `StyleSpan` - highlight span computation over a text range
//! - `TextBuffer` / `PlainTextBuffer` - host buffer seam and reference impl
//! - `SendCursor` - cursor emitting text mora-by-mora or line-by-line

pub mod buffer;
pub use buffer::{address_width, PlainTextBuffer, TextBuffer};

pub mod charset;
pub use charset::CharClasses;

pub mod config;
pub use config::{Config, ConfigError};

pub mod cursor;
pub use cursor::{Advance, SendCursor};

pub mod emit;
pub use emit::{CaptureEmitter, Emitter};

pub mod highlight;
pub use highlight::{scan, Style, StyleSpan};

pub mod kana;

pub mod mora;
