//! Core domain types for Termodoro.
//!
//! This crate contains the clock geometry engine and the plain data types
//! shared by the session driver, the config loader and the TUI. No IO, no
//! async, and no terminal dependency: everything here is a pure function of
//! its inputs.
//!
//! # Geometry
//!
//! A clock face of diameter `d` occupies the square `[0, d] x [0, d]` of
//! terminal cells and is centered on `(d / 2, d / 2)`. [`rim`] yields the
//! outline, [`hand`] the rotating indicator for a given elapsed fraction.
//!
//! ```
//! use termodoro_types::{Cell, HandLength, hand, rim};
//!
//! let outline = rim(10);
//! assert!(outline.contains(&Cell::new(5, 0)));
//!
//! let up = hand(10, HandLength::HALF, 0.0);
//! assert!(up.contains(&Cell::new(5, 3)));
//! ```

mod angle;
mod display;
mod face;
mod hand;
mod session;

pub use angle::{Slope, slope_for_phase_fraction};
pub use display::DisplayOptions;
pub use face::{Cell, ClockFace, rim};
pub use hand::{HandLength, HandLengthError, hand};
pub use session::{PhaseKind, SessionSettings, SettingsError, format_remaining};
