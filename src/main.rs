// SPDX-License-Identifier: MIT
//
// homend — repeat-sensitive home/end navigation, driven headlessly.
//
// The binary loads a file into a Document, places the window and cursor,
// then feeds a key script through the Navigator one token at a time:
//
//   --keys → parse_script → Navigator::execute → Document
//                                  │
//                                  └→ one report line per key
//
// Report lines look like:
//
//   end        121:9     line, from 121:1
//   end        140:9     window
//   home       1:1       Nothing to do: already at the beginning of the buffer
//   -- window 1-24, 1 mark(s)
//
// Positions are 1-indexed. Set RUST_LOG=homend_nav=debug to watch the
// cycle decisions.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use homend_editor::buffer::Buffer;
use homend_editor::command::{Command, parse_script};
use homend_editor::document::{Document, DocumentId};
use homend_editor::position::Position;
use homend_nav::{NavOutcome, NavSession, Navigator};

/// Replay home/end key presses against a file and report where the cursor lands
#[derive(Parser, Debug)]
#[command(name = "homend", version, about, long_about = None)]
struct Cli {
    /// File to load
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Whitespace-separated key script, e.g. "end end 3home left home"
    #[arg(short, long, value_name = "SCRIPT")]
    keys: String,

    /// Window height in rows
    #[arg(long, default_value_t = 24)]
    height: usize,

    /// First visible line (1-indexed)
    #[arg(long, value_name = "LINE")]
    top: Option<usize>,

    /// Starting cursor line (1-indexed)
    #[arg(long, default_value_t = 1)]
    line: usize,

    /// Starting cursor column (1-indexed)
    #[arg(long, default_value_t = 1)]
    col: usize,

    /// Options in `:set` syntax, e.g. "nopastend so=3"
    #[arg(long, value_name = "DIRECTIVES")]
    set: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let buffer = Buffer::from_file(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let mut doc = Document::new(DocumentId(1), buffer, cli.height);

    if let Some(args) = &cli.set {
        let mut options = doc.options();
        for shown in options.apply_str(args).context("invalid --set")? {
            println!("{shown}");
        }
        doc.set_options(options);
    }

    let line_count = doc.buffer().line_count();
    if cli.line == 0 || cli.col == 0 {
        bail!("--line and --col are 1-indexed");
    }
    if cli.line > line_count || cli.top.is_some_and(|top| top > line_count) {
        bail!("{} has only {line_count} lines", cli.file.display());
    }
    if let Some(top) = cli.top {
        doc.set_top_line(top.saturating_sub(1));
    }
    doc.move_cursor_to(Position::new(cli.line - 1, cli.col - 1));

    let commands = parse_script(&cli.keys).context("invalid --keys")?;

    let mut navigator = Navigator::new();
    for (token, cmd) in cli.keys.split_whitespace().zip(commands) {
        let status = match navigator.execute(&mut doc, cmd) {
            Ok(outcome) => {
                let origin = navigator.session(doc.id()).and_then(NavSession::origin);
                describe(cmd, outcome, origin)
            }
            Err(err) => err.to_string(),
        };
        println!("{token:<10} {:<9} {status}", doc.cursor().to_string());
    }

    let window = doc.window();
    println!(
        "-- window {}-{}, {} mark(s)",
        window.top_line() + 1,
        window.bottom_line(doc.buffer()) + 1,
        doc.marks().len()
    );

    Ok(())
}

/// The status column for a key that ran.
fn describe(cmd: Command, outcome: Option<NavOutcome>, origin: Option<Position>) -> String {
    match (outcome, origin) {
        (Some(NavOutcome::Moved { stage, fresh: true, .. }), Some(origin)) => {
            format!("{stage}, from {origin}")
        }
        (Some(NavOutcome::Moved { stage, .. }), _) => stage.to_string(),
        (Some(NavOutcome::PercentJump { decile, .. }), _) => format!("{}0%", decile.min(10)),
        (None, _) => cmd.id().to_string(),
    }
}
