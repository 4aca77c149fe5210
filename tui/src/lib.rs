//! TUI rendering for Termodoro using ratatui.
//!
//! One frame is the analog face at the left edge and a column of status
//! labels to its right. Below [`MIN_SCREEN_WIDTH`] x [`MIN_SCREEN_HEIGHT`]
//! the frame holds only [`SCREEN_TOO_SMALL`]; the check runs every frame,
//! so growing the terminal recovers on the next tick.

mod face;
mod input;
mod labels;
mod theme;

pub use input::{handle_events, is_quit};
pub use theme::{Palette, palette, styles};

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};
use tracing::debug;

use termodoro_core::{Session, TimeSource};
use termodoro_types::DisplayOptions;

use self::face::{FaceState, RimCache};
use self::labels::{Status, status_lines};

/// Smallest face that still reads as a clock.
pub const MIN_CLOCK_DIAMETER: u16 = 4;
/// Columns reserved for the status labels.
pub const LABEL_WIDTH: u16 = 30;
pub const MIN_SCREEN_WIDTH: u16 = LABEL_WIDTH + MIN_CLOCK_DIAMETER;
pub const MIN_SCREEN_HEIGHT: u16 = MIN_CLOCK_DIAMETER + 1;
pub const SCREEN_TOO_SMALL: &str = "screen too small";

/// Long-lived render state: display options and the cached rim.
#[derive(Debug)]
pub struct Dashboard {
    options: DisplayOptions,
    palette: Palette,
    rim: RimCache,
    undersized: bool,
}

impl Dashboard {
    #[must_use]
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            options,
            palette: palette(options),
            rim: RimCache::default(),
            undersized: false,
        }
    }

    fn note_size(&mut self, area: Rect, undersized: bool) {
        if undersized != self.undersized {
            debug!(
                width = area.width,
                height = area.height,
                undersized,
                "Terminal size policy changed"
            );
            self.undersized = undersized;
        }
    }
}

#[must_use]
pub fn is_undersized(area: Rect) -> bool {
    area.width < MIN_SCREEN_WIDTH || area.height < MIN_SCREEN_HEIGHT
}

/// Face diameter for a terminal that passed [`is_undersized`].
///
/// One row short of the height, and never so wide that the label column
/// loses its space.
#[must_use]
pub fn clock_diameter(area: Rect) -> u16 {
    area.height
        .saturating_sub(1)
        .min(area.width.saturating_sub(LABEL_WIDTH))
        .max(MIN_CLOCK_DIAMETER)
}

/// First label column for a face of `diameter`, leaving one blank column.
///
/// An odd diameter's circle stops one column short of its bounding square.
#[must_use]
pub fn label_offset(diameter: u16) -> u16 {
    diameter + if diameter % 2 == 0 { 2 } else { 1 }
}

/// Main draw function
pub fn draw<C>(frame: &mut Frame, dashboard: &mut Dashboard, session: &Session<C>)
where
    C: TimeSource + Clone,
{
    let area = frame.area();

    if is_undersized(area) {
        dashboard.note_size(area, true);
        let message = Line::styled(SCREEN_TOO_SMALL, styles::warning(&dashboard.palette));
        frame.render_widget(Paragraph::new(message), area);
        return;
    }
    dashboard.note_size(area, false);

    let options = dashboard.options;
    let mut label_x = 0;

    if options.show_analog {
        let diameter = clock_diameter(area);
        label_x = label_offset(diameter);
        let state = FaceState {
            diameter,
            phase: session.phase(),
            hand_position: session.hand_position(),
            hand_length: options.hand_length,
        };
        face::paint(
            frame.buffer_mut(),
            area,
            &mut dashboard.rim,
            state,
            &dashboard.palette,
        );
    }

    let status = Status {
        completed_rounds: session.completed_rounds(),
        next_long_in: session.next_long_in(),
        seconds_remaining: session.seconds_remaining(),
    };
    let lines = status_lines(status, options, &dashboard.palette);

    if lines.is_empty() || label_x >= area.width {
        return;
    }
    let label_area = Rect::new(
        area.x + label_x,
        area.y,
        area.width - label_x,
        area.height,
    );
    frame.render_widget(Paragraph::new(lines), label_area);
}
