//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, State};
use crate::engine::{Event, Transition, TransitionAction};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, C, E: Event> {
    from: Option<S>,
    on: Option<E::Kind>,
    to: Option<S>,
    guard: Option<Guard<C>>,
    actions: Vec<TransitionAction<C, E>>,
}

impl<S: State, C, E: Event> TransitionBuilder<S, C, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            on: None,
            to: None,
            guard: None,
            actions: Vec::new(),
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event kind (required).
    pub fn on(mut self, kind: E::Kind) -> Self {
        self.on = Some(kind);
        self
    }

    /// Set the target state.
    /// Without it the transition stays in its source state.
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Append an action. Actions run in the order they are added.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(C, &E) -> C + Send + Sync + 'static,
    {
        self.actions.push(Arc::new(action));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, C, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let on = self.on.ok_or(BuildError::MissingEvent)?;
        let to = self.to.unwrap_or_else(|| from.clone());

        Ok(Transition {
            from,
            on,
            to,
            guard: self.guard,
            actions: self.actions,
        })
    }
}

impl<S: State, C, E: Event> Default for TransitionBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
