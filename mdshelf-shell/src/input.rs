//! Prompting and key input with interrupt handling
//!
//! All reads go through raw mode so that Ctrl+C arrives as a key event and
//! can be turned into a clean cancellation instead of killing the process
//! mid-screen.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::{self, Write};

use crate::terminal::RawMode;

/// Outcome of a prompt: a value, or a user-initiated cancel (Ctrl+C or Esc)
#[derive(Debug, PartialEq, Eq)]
pub enum Prompt<T> {
    Value(T),
    Cancelled,
}

/// Read the next key press. Raw mode must already be enabled.
fn next_key() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read().context("Failed to read key event")? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Block until the user advances (Enter or space) or cancels (q, Esc, Ctrl+C)
pub fn wait_for_advance() -> Result<Prompt<()>> {
    let _raw = RawMode::enter()?;
    loop {
        let key = next_key()?;
        if is_interrupt(&key) {
            return Ok(Prompt::Cancelled);
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => return Ok(Prompt::Value(())),
            KeyCode::Char('q') => return Ok(Prompt::Cancelled),
            _ => {}
        }
    }
}

/// Pause until the user presses Enter (a cancel also returns)
pub fn pause() -> Result<()> {
    print!("\nPress Enter to continue...");
    io::stdout().flush().context("Failed to flush prompt")?;
    let _ = wait_for_advance()?;
    println!();
    Ok(())
}

/// Read a line of input, echoing as typed, with backspace editing.
pub fn read_line(prompt: &str) -> Result<Prompt<String>> {
    let mut out = io::stdout();
    write!(out, "{prompt}")?;
    out.flush().context("Failed to flush prompt")?;

    let _raw = RawMode::enter()?;
    let mut buffer = String::new();
    loop {
        let key = next_key()?;
        if is_interrupt(&key) {
            write!(out, "\r\n")?;
            out.flush()?;
            return Ok(Prompt::Cancelled);
        }
        match key.code {
            KeyCode::Enter => {
                write!(out, "\r\n")?;
                out.flush()?;
                return Ok(Prompt::Value(buffer));
            }
            KeyCode::Backspace => {
                if buffer.pop().is_some() {
                    write!(out, "\u{8} \u{8}")?;
                    out.flush()?;
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.push(c);
                write!(out, "{c}")?;
                out.flush()?;
            }
            _ => {}
        }
    }
}

/// Prompt for a 1-based selection out of `len` items, re-prompting on
/// out-of-range or non-numeric input. Returns the 0-based index.
pub fn read_index(prompt: &str, len: usize) -> Result<Prompt<usize>> {
    loop {
        match read_line(prompt)? {
            Prompt::Cancelled => return Ok(Prompt::Cancelled),
            Prompt::Value(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if (1..=len).contains(&n) => return Ok(Prompt::Value(n - 1)),
                _ => println!("Invalid selection, enter a number between 1 and {len}."),
            },
        }
    }
}
