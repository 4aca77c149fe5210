//! Session timing for Termodoro.
//!
//! [`SessionTimer`] measures a single phase, [`SessionState`] counts rounds
//! and picks the break kind, and [`Session`] drives the
//! `Idle -> Work -> (Short|Long)Break -> Work -> ...` cycle on every tick.
//!
//! Time is read through [`TimeSource`] so tests can step a [`ManualClock`]
//! instead of sleeping.

mod clock;
mod session;
mod state;
mod timer;

pub use clock::{ManualClock, SystemClock, TimeSource};
pub use session::Session;
pub use state::SessionState;
pub use timer::SessionTimer;
