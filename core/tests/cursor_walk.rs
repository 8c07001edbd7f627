// Integration tests walking the send cursor across whole documents,
// exercising the newline-width-2 position convention end to end.

use std::time::Duration;

use kashi_core::{Advance, CaptureEmitter, PlainTextBuffer, SendCursor, TextBuffer};

#[test]
fn mora_walk_over_single_line() {
    let buf = PlainTextBuffer::from_text("こんにちは せかい");
    let mut cursor = SendCursor::new();
    let mut out = CaptureEmitter::new();

    assert_eq!(
        cursor.advance_by_mora(&buf, &mut out, Duration::ZERO),
        Advance::Emitted
    );
    assert_eq!(out.sent, vec!["こんにちは "]);
    assert_eq!(cursor.offset(), 6);

    assert_eq!(
        cursor.advance_by_mora(&buf, &mut out, Duration::ZERO),
        Advance::Emitted
    );
    assert_eq!(out.sent, vec!["こんにちは ", "せかい\n"]);
    assert_eq!(cursor.offset(), buf.last_position());

    assert_eq!(
        cursor.advance_by_mora(&buf, &mut out, Duration::ZERO),
        Advance::Eof
    );
    assert_eq!(out.sent.len(), 2);
    assert_eq!(cursor.offset(), buf.last_position());
}

#[test]
fn mora_walk_pays_double_for_newlines() {
    // ひかり(3) space(1) そら(2) newline(2) うみ(2) = 10 units
    let buf = PlainTextBuffer::from_text("ひかり そら\nうみ");
    let mut cursor = SendCursor::new();
    let mut out = CaptureEmitter::new();

    cursor.advance_by_mora(&buf, &mut out, Duration::ZERO);
    assert_eq!(cursor.offset(), 4);

    cursor.advance_by_mora(&buf, &mut out, Duration::ZERO);
    // the whitespace run is the newline: one char, two address units
    assert_eq!(cursor.offset(), 8);

    cursor.advance_by_mora(&buf, &mut out, Duration::ZERO);
    assert_eq!(cursor.offset(), 10);
    assert_eq!(out.sent, vec!["ひかり ", "そら ", "うみ\n"]);
}

#[test]
fn mora_walk_consumes_mixed_whitespace_run() {
    let buf = PlainTextBuffer::from_text("あ \n い");
    let mut cursor = SendCursor::new();
    let mut out = CaptureEmitter::new();

    cursor.advance_by_mora(&buf, &mut out, Duration::ZERO);
    // run " \n " is three chars plus one extra unit for the newline
    assert_eq!(out.sent, vec!["あ "]);
    assert_eq!(cursor.offset(), 5);

    cursor.advance_by_mora(&buf, &mut out, Duration::ZERO);
    assert_eq!(out.sent, vec!["あ ", "い\n"]);
    assert_eq!(
        cursor.advance_by_mora(&buf, &mut out, Duration::ZERO),
        Advance::Eof
    );
}

#[test]
fn line_walk_emits_tail_from_cursor_column() {
    let buf = PlainTextBuffer::from_text("こんにちは\nせかい");
    let mut cursor = SendCursor::new();
    cursor.set_offset(2);
    let mut out = CaptureEmitter::new();

    cursor.advance_by_line(&buf, &mut out, Duration::ZERO);
    assert_eq!(out.sent, vec!["にちは "]);
    assert_eq!(cursor.offset(), 7);

    cursor.advance_by_line(&buf, &mut out, Duration::ZERO);
    assert_eq!(out.sent, vec!["にちは ", "せかい "]);
    assert_eq!(cursor.offset(), buf.last_position());
    assert_eq!(
        cursor.advance_by_line(&buf, &mut out, Duration::ZERO),
        Advance::Eof
    );
}

#[test]
fn line_walk_skips_blank_lines() {
    // あい(2) \n(2) \n(2) かき(2) = 8 units; row1 is blank
    let buf = PlainTextBuffer::from_text("あい\n\nかき");
    let mut cursor = SendCursor::new();
    let mut out = CaptureEmitter::new();

    cursor.advance_by_line(&buf, &mut out, Duration::ZERO);
    assert_eq!(out.sent, vec!["あい "]);
    // head of row1 is 4; the blank line's newline costs two more units
    assert_eq!(cursor.offset(), 6);

    cursor.advance_by_line(&buf, &mut out, Duration::ZERO);
    assert_eq!(out.sent, vec!["あい ", "かき "]);
    assert_eq!(cursor.offset(), buf.last_position());
}

#[test]
fn line_walk_stops_at_trailing_newlines() {
    let buf = PlainTextBuffer::from_text("あ\n\n");
    let mut cursor = SendCursor::new();
    let mut out = CaptureEmitter::new();

    cursor.advance_by_line(&buf, &mut out, Duration::ZERO);
    assert_eq!(out.sent, vec!["あ "]);
    assert_eq!(cursor.offset(), buf.last_position());
    assert_eq!(
        cursor.advance_by_line(&buf, &mut out, Duration::ZERO),
        Advance::Eof
    );
}
