//! Status text beside the clock.

use ratatui::text::{Line, Span};

use termodoro_types::{DisplayOptions, format_remaining};

use crate::theme::{Palette, styles};

/// Numbers the labels report, read once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Status {
    pub completed_rounds: u32,
    pub next_long_in: u32,
    pub seconds_remaining: u64,
}

#[must_use]
pub(crate) fn rounds_noun(count: u32) -> &'static str {
    if count == 1 { "round" } else { "rounds" }
}

/// Label lines in display order, skipping the ones turned off.
pub(crate) fn status_lines(
    status: Status,
    options: DisplayOptions,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let label = styles::label(palette);
    let value = styles::value(palette);
    let mut lines = Vec::with_capacity(3);

    if options.show_completed {
        lines.push(Line::from(vec![
            Span::styled("Rounds completed: ", label),
            Span::styled(status.completed_rounds.to_string(), value),
        ]));
    }

    if options.show_next_long {
        lines.push(Line::from(vec![
            Span::styled("Next long break in ", label),
            Span::styled(status.next_long_in.to_string(), value),
            Span::styled(format!(" {}", rounds_noun(status.next_long_in)), label),
        ]));
    }

    if options.show_digital {
        lines.push(Line::from(vec![
            Span::styled("Time remaining: ", label),
            Span::styled(format_remaining(status.seconds_remaining), value),
        ]));
    }

    lines
}
