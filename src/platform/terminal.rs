//! Crossterm-backed key source and render sink.
//!
//! The display mirrors the selection model: a yellow shortcut label per row,
//! the combined text with a cyan separator between the executable-name and
//! title regions, matched characters in green, and the query prompt at the
//! bottom.

use std::io::{Stdout, Write, stdout};

use anyhow::Context;
use crossterm::cursor::{MoveTo, MoveToNextLine};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use crate::error::Result;
use crate::search::DISPLAY_LINE_COUNT;
use crate::session::{Frame, Key, KeyEvent, KeySource, RenderSink};

const PROMPT: &str = "> ";
const HEADER: &str = "Press Enter to select the top match or Alt + label (case sensitive)";

/// Puts the terminal into raw mode on an alternate screen and restores it on
/// drop, so a panic or early return cannot leave the shell unusable.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw terminal mode")?;
        execute!(stdout(), EnterAlternateScreen)
            .context("failed to enter the alternate screen")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Blocking keyboard reader over crossterm events.
pub struct TerminalInput;

impl KeySource for TerminalInput {
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            // Resize, mouse, focus and key-release events carry no meaning
            // for the session; keep blocking until a usable press arrives.
            if let Event::Key(key) = event::read().context("failed to read a key event")? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(event) = translate(key) {
                    return Ok(event);
                }
            }
        }
    }
}

/// Maps a crossterm key press onto the session's key model.
///
/// Ctrl+`[` is the vim-style alternate escape; control-chorded characters are
/// otherwise dropped rather than typed into the query.
fn translate(key: event::KeyEvent) -> Option<KeyEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let logical = match key.code {
        KeyCode::Esc => Key::Escape,
        KeyCode::Char('[') if ctrl => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) if !ctrl => Key::Char(c),
        _ => return None,
    };
    Some(KeyEvent {
        key: logical,
        alt: key.modifiers.contains(KeyModifiers::ALT),
    })
}

/// Renders frames to stdout.
pub struct TerminalScreen {
    out: Stdout,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self { out: stdout() }
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for TerminalScreen {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        queue!(self.out, Print(HEADER), MoveToNextLine(1))?;

        for row in &frame.rows {
            queue!(
                self.out,
                SetForegroundColor(Color::Yellow),
                Print(row.shortcut),
                ResetColor,
                Print(") ")
            )?;
            for (pos, c) in row.text.chars().enumerate() {
                if pos == row.split_point {
                    queue!(
                        self.out,
                        SetForegroundColor(Color::Cyan),
                        Print(" | "),
                        ResetColor
                    )?;
                }
                let matched = row.indices.binary_search(&pos).is_ok();
                if matched {
                    queue!(self.out, SetForegroundColor(Color::Green))?;
                }
                queue!(self.out, Print(c))?;
                if matched {
                    queue!(self.out, ResetColor)?;
                }
            }
            queue!(self.out, MoveToNextLine(1))?;
        }
        // Keep the prompt anchored below a fixed-height list.
        for _ in frame.rows.len()..DISPLAY_LINE_COUNT {
            queue!(self.out, MoveToNextLine(1))?;
        }

        queue!(self.out, Print(PROMPT), Print(&frame.query))?;
        self.out.flush().context("failed to flush the display")?;
        Ok(())
    }
}
