//! Interactive CLI for the lyric entry assistant.
//!
//! Drives the full pipeline without a GUI host: load lyrics, re-space them
//! on mora boundaries, transliterate kanji through the reading service,
//! inspect highlight spans, and step the send cursor with a stdout
//! emitter standing in for the keystroke backend.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use kashi::{
    Advance, Config, Emitter, HttpReadingOracle, LyricsEditor, ReadingOracle, StaticOracle, Style,
    TextBuffer,
};
use kashi_core::{highlight, mora, CharClasses};

#[derive(Parser, Debug)]
#[command(name = "kashi", about = "Japanese lyric entry assistant")]
struct Args {
    /// Configuration file; written with defaults when absent
    #[arg(short, long, default_value = "kashi.toml")]
    config: PathBuf,

    /// Reading service endpoint; the built-in demo oracle is used when
    /// omitted
    #[arg(long)]
    oracle_url: Option<String>,

    /// Reading service timeout in milliseconds
    #[arg(long, default_value_t = 30_000)]
    oracle_timeout_ms: u64,

    /// Inter-character delay for emitted text, in milliseconds
    #[arg(long, default_value_t = 0)]
    send_delay_ms: u64,
}

/// Stdout stand-in for the keystroke backend: one character at a time,
/// honoring the inter-character delay.
struct StdoutEmitter;

impl Emitter for StdoutEmitter {
    fn emit(&mut self, text: &str, delay: Duration) {
        let mut stdout = io::stdout();
        for ch in text.chars() {
            print!("{ch}");
            stdout.flush().ok();
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }
        println!();
    }
}

const HELP: &str = "\
commands:
  :load            read document lines until a lone '.'
  :show            print the document
  :mora            print mora tokens per line
  :spaces          re-space the document on mora boundaries
  :strip           remove whitespace except newlines
  :conv            transliterate kanji to kana
  :marks           show highlighted runs per line
  :send            emit the next mora chunk
  :sendline        emit the rest of the current line
  :cursor <pos>    move the send cursor
  :quit            exit";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let cfg = Config::load_or_init(&args.config)?;
    let classes = CharClasses::from_config(&cfg);
    let delay = Duration::from_millis(args.send_delay_ms);

    let oracle: Box<dyn ReadingOracle> = match &args.oracle_url {
        Some(url) => {
            println!("✓ Using reading service at {url}");
            Box::new(HttpReadingOracle::new(url.clone()).with_timeout(args.oracle_timeout_ms))
        }
        None => {
            println!("ℹ No reading service configured, using the built-in demo oracle");
            Box::new(StaticOracle::with_demo_entries())
        }
    };
    let mut editor = LyricsEditor::new(&cfg, oracle);

    println!("kashi interactive. :help for commands.");
    let mut lines = io::stdin().lock().lines();
    let mut out = StdoutEmitter;

    while let Some(line) = lines.next() {
        let line = line?;
        let input = line.trim_end();
        let mut parts = input.splitn(2, ' ');
        match parts.next().unwrap_or("") {
            ":help" => println!("{HELP}"),
            ":quit" | ":q" => break,
            ":load" => {
                println!("(end with a lone '.')");
                let mut doc = String::new();
                while let Some(doc_line) = lines.next() {
                    let doc_line = doc_line?;
                    if doc_line == "." {
                        break;
                    }
                    doc.push_str(&doc_line);
                    doc.push('\n');
                }
                let restyle = editor.load(doc.trim_end_matches('\n'));
                editor.apply_restyle(restyle);
                println!("✓ Loaded {} lines", editor.buffer().line_count());
            }
            ":show" => println!("{}", editor.text()),
            ":mora" => {
                for text_line in editor.text().lines() {
                    println!("{:?}", mora::segment(text_line, &classes));
                }
            }
            ":spaces" => {
                let restyle = editor.insert_mora_spaces();
                editor.apply_restyle(restyle);
                println!("{}", editor.text());
            }
            ":strip" => {
                let restyle = editor.strip_whitespace();
                editor.apply_restyle(restyle);
                println!("{}", editor.text());
            }
            ":conv" => match editor.transliterate_all() {
                Ok(restyle) => {
                    editor.apply_restyle(restyle);
                    println!("{}", editor.text());
                }
                Err(e) => eprintln!("⚠ {e}"),
            },
            ":marks" => {
                for text_line in editor.text().lines() {
                    let spans =
                        highlight::scan(text_line, 0, text_line.chars().count(), &classes);
                    let marked: String = spans
                        .iter()
                        .map(|span| {
                            let run: String = text_line
                                .chars()
                                .skip(span.start)
                                .take(span.end - span.start)
                                .collect();
                            match span.style {
                                Style::Highlighted => format!("[{run}]"),
                                Style::Normal => run,
                            }
                        })
                        .collect();
                    println!("{marked}");
                }
            }
            ":send" => {
                if editor.send_mora(&mut out, delay) == Advance::Eof {
                    println!("ℹ End of document; move the cursor to send again");
                }
            }
            ":sendline" => {
                if editor.send_line(&mut out, delay) == Advance::Eof {
                    println!("ℹ End of document; move the cursor to send again");
                }
            }
            ":cursor" => match parts.next().and_then(|arg| arg.trim().parse().ok()) {
                Some(pos) => {
                    editor.set_cursor(pos);
                    println!("✓ Cursor at {}", editor.cursor_offset());
                }
                None => eprintln!("⚠ Usage: :cursor <pos>"),
            },
            "" => {}
            other => eprintln!("⚠ Unknown command {other}; :help lists commands"),
        }
    }

    Ok(())
}
