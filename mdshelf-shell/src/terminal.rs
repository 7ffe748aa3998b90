//! Terminal size detection and screen control

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{self, Clear, ClearType},
};
use mdshelf_core::Viewport;
use std::io::stdout;

/// Query the current terminal size, falling back to the default viewport
/// (100x30) when detection fails.
pub fn viewport() -> Viewport {
    match terminal::size() {
        Ok((columns, rows)) if columns > 0 && rows > 0 => Viewport { columns, rows },
        _ => Viewport::default(),
    }
}

/// Clear the screen and home the cursor
pub fn clear_screen() -> Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0)).context("Failed to clear screen")
}

/// Raw-mode guard. Raw mode stays enabled while the guard is alive and is
/// restored on drop, including on early returns and errors.
pub struct RawMode;

impl RawMode {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
