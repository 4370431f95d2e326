//! Table-driven execution of state machines.
//!
//! This module is the "imperative shell" around the pure core: it holds the
//! current state and context, picks the transition that matches an incoming
//! event and folds the context through that transition's actions.
//!
//! # Key Concepts
//!
//! - **Events**: Typed inputs exposing a discriminant (`Event::Kind`)
//! - **Transitions**: `(from, on, guard) -> (actions, to)` rows of a table
//! - **State Machine**: Executes transitions synchronously and records history

mod machine;
mod transition;

pub use machine::{StateMachine, StepResult};
pub use transition::{Event, Transition, TransitionAction};
