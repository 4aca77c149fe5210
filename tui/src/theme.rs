//! Color theme for Termodoro TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use termodoro_types::{DisplayOptions, PhaseKind};

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Face ===
    pub const RIM: Color = Color::Rgb(200, 192, 147); // oldWhite

    // === Accent Colors ===
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub rim: Color,
    pub hand_work: Color,
    pub hand_break: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub warning: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rim: colors::RIM,
            hand_work: colors::CYAN,
            hand_break: colors::GREEN,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            warning: colors::YELLOW,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            rim: Color::White,
            hand_work: Color::Cyan,
            hand_break: Color::Green,
            text_primary: Color::White,
            text_muted: Color::Gray,
            warning: Color::Yellow,
        }
    }

    #[must_use]
    pub fn hand(&self, phase: PhaseKind) -> Color {
        if phase.is_break() {
            self.hand_break
        } else {
            self.hand_work
        }
    }
}

#[must_use]
pub fn palette(options: DisplayOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, PhaseKind, Style};

    /// Face cells are blanks painted by background.
    #[must_use]
    pub fn rim(palette: &Palette) -> Style {
        Style::default().bg(palette.rim)
    }

    #[must_use]
    pub fn hand(palette: &Palette, phase: PhaseKind) -> Style {
        Style::default().bg(palette.hand(phase))
    }

    #[must_use]
    pub fn label(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn value(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn warning(palette: &Palette) -> Style {
        Style::default().fg(palette.warning)
    }
}
