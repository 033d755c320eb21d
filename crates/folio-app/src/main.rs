//! Folio terminal console entry point.
//!
//! Reads lines from stdin and replays each one as key presses: every
//! character is typed, a trailing tab asks for completion, and the line is
//! then submitted. New log lines are printed as plain text.
//! An optional first argument names a TOML config file.

mod console;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use console::ConsoleHost;
use folio_platform::DesktopClock;
use folio_terminal::Terminal;
use folio_terminal::markup::to_plain;
use folio_terminal::renderer::LineKind;
use folio_types::config::TerminalConfig;
use folio_types::input::{InputEvent, Key, KeyEvent};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => TerminalConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TerminalConfig::default(),
    };
    log::info!(
        "Starting folio terminal ({} sections, nav command '{}')",
        config.sections.len(),
        config.nav_command
    );

    let host = ConsoleHost::new(config.sections.clone(), io::stderr());
    let mut terminal = Terminal::new(config, host).with_clock(DesktopClock::new());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut printed = print_new_lines(&terminal, None, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let (text, wants_completion) = match line.strip_suffix('\t') {
            Some(rest) => (rest, true),
            None => (line.as_str(), false),
        };

        for ch in text.chars() {
            press(&mut terminal, Key::Char(ch));
        }
        if wants_completion {
            press(&mut terminal, Key::Tab);
            writeln!(out, "(completed) {}", terminal.input_text())?;
        }
        press(&mut terminal, Key::Enter);

        printed = print_new_lines(&terminal, printed, &mut out)?;
    }

    log::info!("Session ended after {} command(s)", terminal.history().len());
    Ok(())
}

fn press<H: folio_platform::PageHost>(terminal: &mut Terminal<H>, key: Key) {
    terminal.handle_event(&InputEvent::Key(KeyEvent::plain(key)));
}

/// Print every line newer than `after`; returns the id of the newest line.
fn print_new_lines<H: folio_platform::PageHost>(
    terminal: &Terminal<H>,
    after: Option<u64>,
    out: &mut impl Write,
) -> Result<Option<u64>> {
    let mut newest = after;
    for line in terminal.log().lines() {
        if after.is_some_and(|id| line.id <= id) {
            continue;
        }
        let text = to_plain(&line.content);
        match line.kind {
            LineKind::Error => writeln!(out, "! {text}")?,
            _ => writeln!(out, "{text}")?,
        }
        newest = Some(line.id);
    }
    out.flush()?;
    Ok(newest)
}
