//! Calcflow: a four-function calculator on a pure functional state machine
//!
//! The calculator follows a "pure core, imperative shell" split. The core
//! is a transition table whose actions are pure functions over an owned
//! context; the shell is a session that feeds it one event at a time and
//! hands back a snapshot to render.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Guards**: Pure predicate functions that control transitions
//! - **History**: Immutable tracking of state transitions over time
//! - **Engine**: Table-driven `StateMachine` with first-match dispatch
//! - **Calculator**: The three-state calculator built on top of it
//! - **Shell**: `Session`, keypad buttons and press parsing
//!
//! # Example
//!
//! ```rust
//! use calcflow::shell::{Button, Session};
//!
//! let mut session = Session::start().unwrap();
//! for label in ['1', '2', '+', '3', '='] {
//!     session.press(Button::from_label(label).unwrap());
//! }
//! assert_eq!(session.display(), "15");
//!
//! let summary = session.stop();
//! assert_eq!(summary.final_display, "15");
//! ```

pub mod builder;
pub mod calculator;
pub mod core;
pub mod engine;
pub mod shell;
pub mod telemetry;

// Re-export commonly used types
pub use calculator::{CalculatorEvent, CalculatorState, Digit, MachineContext, Operator};
pub use core::{Guard, State, StateHistory, StateTransition};
pub use engine::{StateMachine, StepResult};
pub use shell::{Button, Session, Snapshot};
