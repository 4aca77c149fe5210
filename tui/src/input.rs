//! Input handling for Termodoro TUI.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tracing::debug;

const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Drains pending terminal events without blocking.
///
/// Returns `true` when the user asked to quit. Resize events need no
/// handling: the next frame lays out against the new size.
pub fn handle_events() -> Result<bool> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        if !event::poll(Duration::ZERO)? {
            break;
        }
        let event = event::read()?;
        if is_quit(&event) {
            debug!("Quit requested from keyboard");
            return Ok(true);
        }
    }
    Ok(false)
}

/// `q`, `Esc` or `Ctrl-C`.
#[must_use]
pub fn is_quit(event: &Event) -> bool {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return false;
    };

    if *kind == KeyEventKind::Release {
        return false;
    }

    match code {
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => true,
        _ => false,
    }
}
