//! Host text buffer seam.
//!
//! The send cursor and the editor facade never own text storage; they talk
//! to the host widget through this trait. Positions use the host's
//! addressing convention where a newline occupies two address units, so a
//! position is not usable as an index into extracted text.

use crate::highlight::Style;

/// Number of address units `text` occupies in the host buffer.
pub fn address_width(text: &str) -> usize {
    text.chars().map(|ch| if ch == '\n' { 2 } else { 1 }).sum()
}

/// Read/replace/style access to a host text widget.
pub trait TextBuffer {
    /// Position just past the last character.
    fn last_position(&self) -> usize;

    /// Text between two positions; newlines come back as single chars.
    fn range_text(&self, from: usize, to: usize) -> String;

    /// Replace the text between two positions.
    fn replace(&mut self, from: usize, to: usize, text: &str);

    /// Map a position to (column, row).
    fn position_to_rowcol(&self, pos: usize) -> (usize, usize);

    /// Map (column, row) to a position. Requests past the end clamp to the
    /// buffer end.
    fn rowcol_to_position(&self, col: usize, row: usize) -> usize;

    /// Text of one row, without its newline.
    fn line_text(&self, row: usize) -> String;

    fn line_count(&self) -> usize;

    /// Apply one of the two style tags to a range.
    fn apply_style(&mut self, from: usize, to: usize, style: Style);
}

/// In-memory reference implementation, used by tests and the CLI host.
///
/// Applied styles are recorded in application order and cleared on every
/// text change, so a test can observe exactly what a host widget would
/// have been asked to render.
#[derive(Debug, Clone, Default)]
pub struct PlainTextBuffer {
    text: String,
    styles: Vec<(usize, usize, Style)>,
}

impl PlainTextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            styles: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.styles.clear();
    }

    /// Styles applied since the last text change.
    pub fn styles(&self) -> &[(usize, usize, Style)] {
        &self.styles
    }

    // Byte index of the first char at or past the given position. A
    // position inside a newline's second unit snaps past the newline.
    fn addr_to_byte(&self, pos: usize) -> usize {
        let mut addr = 0;
        for (b, ch) in self.text.char_indices() {
            if addr >= pos {
                return b;
            }
            addr += if ch == '\n' { 2 } else { 1 };
        }
        self.text.len()
    }
}

impl TextBuffer for PlainTextBuffer {
    fn last_position(&self) -> usize {
        address_width(&self.text)
    }

    fn range_text(&self, from: usize, to: usize) -> String {
        let a = self.addr_to_byte(from);
        let b = self.addr_to_byte(to).max(a);
        self.text[a..b].to_string()
    }

    fn replace(&mut self, from: usize, to: usize, text: &str) {
        let a = self.addr_to_byte(from);
        let b = self.addr_to_byte(to).max(a);
        self.text.replace_range(a..b, text);
        self.styles.clear();
    }

    fn position_to_rowcol(&self, pos: usize) -> (usize, usize) {
        let rows = self.line_count();
        let mut row_start = 0;
        for row in 0..rows {
            let len = self.line_text(row).chars().count();
            if pos <= row_start + len || row == rows - 1 {
                return (pos.saturating_sub(row_start).min(len), row);
            }
            row_start += len + 2;
        }
        (0, 0)
    }

    fn rowcol_to_position(&self, col: usize, row: usize) -> usize {
        let rows = self.line_count();
        if row >= rows {
            return self.last_position();
        }
        let mut pos = 0;
        for r in 0..row {
            pos += self.line_text(r).chars().count() + 2;
        }
        pos + col.min(self.line_text(row).chars().count())
    }

    fn line_text(&self, row: usize) -> String {
        self.text.split('\n').nth(row).unwrap_or("").to_string()
    }

    fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn apply_style(&mut self, from: usize, to: usize, style: Style) {
        self.styles.push((from, to, style));
    }
}
