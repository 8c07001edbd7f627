//! Send cursor.
//!
//! Steps a position through a host buffer one mora chunk or one line at a
//! time, pushing the skipped text to an `Emitter`. The cursor state is one
//! position in the host's addressing space (newline = two units); callers
//! must serialize advances per document since the emission channel may be
//! slow and one call's output has to finish before the next starts.

use std::time::Duration;

use crate::buffer::TextBuffer;
use crate::emit::Emitter;

/// Outcome of an advance request. `Eof` is a normal condition, not an
/// error: the cursor was already at the buffer end and did not move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Emitted,
    Eof,
}

/// Cursor over a host buffer, persisted per open document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendCursor {
    offset: usize,
}

// First maximal whitespace run of `s`, as char offsets.
fn whitespace_run(s: &str) -> Option<(usize, usize)> {
    let mut start = None;
    for (i, ch) in s.chars().enumerate() {
        match (ch.is_whitespace(), start) {
            (true, None) => start = Some(i),
            (false, Some(st)) => return Some((st, i)),
            _ => {}
        }
    }
    start.map(|st| (st, s.chars().count()))
}

impl SendCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move the cursor, e.g. when the user repositions the caret.
    pub fn set_offset(&mut self, pos: usize) {
        self.offset = pos;
    }

    /// Back to the start of the document.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Emit everything from the cursor up to the next whitespace run, plus
    /// one trailing space, and move past the run. The last chunk of the
    /// buffer goes out with a trailing newline instead.
    ///
    /// Positions count a newline twice, so the skip over the run is padded
    /// by one extra unit per newline inside it.
    pub fn advance_by_mora(
        &mut self,
        buf: &impl TextBuffer,
        out: &mut impl Emitter,
        delay: Duration,
    ) -> Advance {
        if self.offset == buf.last_position() {
            return Advance::Eof;
        }

        let rest = buf.range_text(self.offset, buf.last_position());
        match whitespace_run(&rest) {
            Some((ws_start, ws_end)) => {
                let chunk: String = rest.chars().take(ws_start).collect();
                let newlines = rest
                    .chars()
                    .take(ws_end)
                    .skip(ws_start)
                    .filter(|ch| *ch == '\n')
                    .count();
                out.emit(&format!("{chunk} "), delay);
                self.offset += ws_end + newlines;
            }
            None => {
                out.emit(&format!("{rest}\n"), delay);
                self.offset = buf.last_position();
            }
        }
        tracing::debug!(offset = self.offset, "advanced by mora");
        Advance::Emitted
    }

    /// Emit the rest of the current line plus one trailing space, then move
    /// to the head of the next line that is not blank, paying two address
    /// units per skipped newline.
    pub fn advance_by_line(
        &mut self,
        buf: &impl TextBuffer,
        out: &mut impl Emitter,
        delay: Duration,
    ) -> Advance {
        if self.offset == buf.last_position() {
            return Advance::Eof;
        }

        let (col, row) = buf.position_to_rowcol(self.offset);
        let tail: String = buf.line_text(row).chars().skip(col).collect();
        out.emit(&format!("{tail} "), delay);

        let mut next = buf.rowcol_to_position(0, row + 1);
        let blank = buf
            .range_text(next, buf.last_position())
            .chars()
            .take_while(|ch| matches!(ch, '\r' | '\n'))
            .count();
        next += blank * 2;
        self.offset = next.min(buf.last_position());

        tracing::debug!(offset = self.offset, "advanced by line");
        Advance::Emitted
    }
}
