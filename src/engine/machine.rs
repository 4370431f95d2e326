//! State machine that executes table-driven transitions.

use crate::core::{State, StateHistory, StateTransition};
use crate::engine::transition::{Event, Transition};
use chrono::Utc;
use std::fmt::Debug;

/// Result of dispatching a single event
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult<S: State> {
    /// A transition fired; `from` may equal `to` for self-transitions
    Transitioned { from: S, to: S },

    /// No transition matched; state and context are unchanged
    Ignored { state: S },
}

impl<S: State> StepResult<S> {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// The state the machine is in after the step.
    pub fn state(&self) -> &S {
        match self {
            Self::Transitioned { to, .. } => to,
            Self::Ignored { state } => state,
        }
    }
}

/// State machine that owns its context and executes transitions.
///
/// Events are processed one at a time to completion: `send` takes
/// `&mut self`, so a second event cannot be accepted while the actions of
/// the first are still running.
pub struct StateMachine<S: State, C, E: Event> {
    current: S,
    context: C,
    transitions: Vec<Transition<S, C, E>>,
    history: StateHistory<S>,
}

impl<S: State, C: Clone + Debug, E: Event> StateMachine<S, C, E> {
    /// Create a new state machine in the initial state
    pub fn new(initial: S, context: C) -> Self {
        Self {
            current: initial,
            context,
            transitions: Vec::new(),
            history: StateHistory::new(),
        }
    }

    /// Add a transition to the machine.
    ///
    /// Transitions are tried in insertion order; the first match wins.
    pub fn add_transition(&mut self, transition: Transition<S, C, E>) {
        self.transitions.push(transition);
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the current context (pure)
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn transitions(&self) -> &[Transition<S, C, E>] {
        &self.transitions
    }

    /// Find the transition that would handle `event` right now (pure)
    pub fn find_transition(&self, event: &E) -> Option<&Transition<S, C, E>> {
        self.transitions
            .iter()
            .find(|t| t.can_execute(&self.current, &self.context, event))
    }

    /// Dispatch one event synchronously.
    ///
    /// Runs every action of the matching transition before returning.
    /// Unmatched events leave the machine untouched.
    pub fn send(&mut self, event: E) -> StepResult<S> {
        let Some(transition) = self.find_transition(&event) else {
            tracing::trace!(
                state = self.current.name(),
                event = event.name(),
                "No transition for event, ignoring"
            );
            return StepResult::Ignored {
                state: self.current.clone(),
            };
        };

        let from = self.current.clone();
        let to = transition.to.clone();
        let self_transition = transition.is_self_transition();
        let context = transition.apply(self.context.clone(), &event);

        self.history = std::mem::take(&mut self.history).record(StateTransition {
            from: from.clone(),
            to: to.clone(),
            event: event.name().into(),
            timestamp: Utc::now(),
        });
        self.context = context;
        self.current = to.clone();

        tracing::debug!(
            from = from.name(),
            to = to.name(),
            event = event.name(),
            self_transition,
            context = ?self.context,
            "Transitioned"
        );

        StepResult::Transitioned { from, to }
    }
}
