use crate::hand::HandLength;

/// What the dashboard shows, derived from config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayOptions {
    pub show_completed: bool,
    pub show_next_long: bool,
    pub show_digital: bool,
    pub show_analog: bool,
    pub hand_length: HandLength,
    pub high_contrast: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_completed: true,
            show_next_long: true,
            show_digital: true,
            show_analog: true,
            hand_length: HandLength::HALF,
            high_contrast: false,
        }
    }
}
