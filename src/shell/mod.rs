//! Interaction shell around the calculator machine.
//!
//! A [`Session`] owns one machine per UI session and turns each button
//! press into exactly one event. Every dispatch returns a [`Snapshot`]
//! for the rendering surface; there is no subscriber list to register with.

mod button;
mod presses;
mod session;

pub use button::{keypad, Button, ButtonError, KEYPAD_LABELS};
pub use presses::{parse_press_args, parse_presses};
pub use session::{Session, SessionSummary, Snapshot};
