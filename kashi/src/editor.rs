//! Editor session facade.
//!
//! Owns the document buffer, the send cursor and the transliteration
//! pipeline for one open document. Every mutating operation returns a
//! `Restyle` describing what the host must re-highlight; the caller
//! consumes it exactly once. No pending-restyle state is kept between
//! calls, so a host redraw can never observe a half-updated flag.

use std::time::Duration;

use kashi_core::buffer::{address_width, PlainTextBuffer, TextBuffer};
use kashi_core::charset::CharClasses;
use kashi_core::config::Config;
use kashi_core::cursor::{Advance, SendCursor};
use kashi_core::emit::Emitter;
use kashi_core::{highlight, kana, mora};

use crate::oracle::{OracleError, ReadingOracle};
use crate::translit::Transliterator;

/// What a mutation left for the host to re-highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restyle {
    None,
    All,
    Range { start: usize, end: usize },
}

/// Session over one open document.
pub struct LyricsEditor<O> {
    buffer: PlainTextBuffer,
    cursor: SendCursor,
    classes: CharClasses,
    translit: Transliterator<O>,
}

impl<O: ReadingOracle> LyricsEditor<O> {
    pub fn new(cfg: &Config, oracle: O) -> Self {
        let classes = CharClasses::from_config(cfg);
        let translit = Transliterator::new(oracle, classes.clone(), cfg.conv_dict.clone());
        Self {
            buffer: PlainTextBuffer::new(),
            cursor: SendCursor::new(),
            classes,
            translit,
        }
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &PlainTextBuffer {
        &self.buffer
    }

    pub fn cursor_offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Move the send cursor, e.g. when the user clicks a new caret spot.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor.set_offset(pos.min(self.buffer.last_position()));
    }

    /// Load a new document. The send cursor starts over.
    pub fn load(&mut self, text: &str) -> Restyle {
        self.buffer.set_text(text);
        self.cursor.reset();
        Restyle::All
    }

    /// Replace the whole document, keeping the cursor where it was.
    pub fn replace_all(&mut self, text: &str) -> Restyle {
        let end = self.buffer.last_position();
        self.buffer.replace(0, end, text);
        Restyle::All
    }

    /// Replace one range; the returned restyle covers the new text.
    pub fn replace_range(&mut self, start: usize, end: usize, text: &str) -> Restyle {
        self.buffer.replace(start, end, text);
        Restyle::Range {
            start,
            end: start + address_width(text),
        }
    }

    /// Remove every whitespace character except newlines.
    pub fn strip_whitespace(&mut self) -> Restyle {
        let stripped = kana::strip_inline_whitespace(self.buffer.text());
        self.replace_all(&stripped)
    }

    /// Re-space every line so each mora is separated by one space.
    pub fn insert_mora_spaces(&mut self) -> Restyle {
        let respaced = mora::respace(self.buffer.text(), &self.classes);
        self.replace_all(&respaced)
    }

    /// Transliterate the whole document. On oracle failure the document is
    /// left untouched.
    pub fn transliterate_all(&mut self) -> Result<Restyle, OracleError> {
        let converted = self.translit.transliterate(self.buffer.text())?;
        Ok(self.replace_all(&converted))
    }

    /// Transliterate one range (a selection). On oracle failure the
    /// document is left untouched.
    pub fn transliterate_range(
        &mut self,
        start: usize,
        end: usize,
    ) -> Result<Restyle, OracleError> {
        let selected = self.buffer.range_text(start, end);
        let converted = self.translit.transliterate(&selected)?;
        Ok(self.replace_range(start, end, &converted))
    }

    /// Re-highlight what a mutation reported, snapped outward to whole
    /// lines and scanned line by line.
    ///
    /// Every edit gets a full rescan of its lines; there is no shortcut
    /// for single-character input.
    pub fn apply_restyle(&mut self, restyle: Restyle) {
        let (from, to) = match restyle {
            Restyle::None => return,
            Restyle::All => (0, self.buffer.last_position()),
            Restyle::Range { start, end } => (start, end.min(self.buffer.last_position())),
        };

        let (_, first_row) = self.buffer.position_to_rowcol(from);
        let (_, last_row) = self.buffer.position_to_rowcol(to);
        for row in first_row..=last_row {
            let line = self.buffer.line_text(row);
            let spans = highlight::scan(&line, 0, line.chars().count(), &self.classes);
            for span in spans {
                let a = self.buffer.rowcol_to_position(span.start, row);
                let b = self.buffer.rowcol_to_position(span.end, row);
                self.buffer.apply_style(a, b, span.style);
            }
        }
        tracing::debug!(?restyle, rows = last_row - first_row + 1, "restyled");
    }

    /// Emit the next mora chunk and advance the cursor.
    pub fn send_mora(&mut self, out: &mut impl Emitter, delay: Duration) -> Advance {
        self.cursor.advance_by_mora(&self.buffer, out, delay)
    }

    /// Emit the rest of the current line and advance to the next
    /// non-blank line.
    pub fn send_line(&mut self, out: &mut impl Emitter, delay: Duration) -> Advance {
        self.cursor.advance_by_line(&self.buffer, out, delay)
    }
}
