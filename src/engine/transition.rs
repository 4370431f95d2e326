//! Transition rows and the event contract they match on.

use crate::core::{Guard, State};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// An input the machine reacts to.
///
/// Transitions match on `Kind`, a payload-free discriminant, so a single
/// row covers every value of a parameterised event (all ten digits, all
/// four operators).
pub trait Event: Clone + Debug + Send + Sync {
    type Kind: Copy + PartialEq + Debug + Send + Sync;

    fn kind(&self) -> Self::Kind;

    /// Stable name used in history records and logs.
    fn name(&self) -> &'static str;
}

/// Pure context update attached to a transition.
///
/// Actions take the context by value and return the next one, so every
/// mutation is explicit and no action ever sees a shared context.
pub type TransitionAction<C, E> = Arc<dyn Fn(C, &E) -> C + Send + Sync>;

/// A transition from one state to another, triggered by one event kind.
pub struct Transition<S: State, C, E: Event> {
    pub from: S,
    pub on: E::Kind,
    pub to: S,
    pub guard: Option<Guard<C>>,
    pub actions: Vec<TransitionAction<C, E>>,
}

impl<S: State, C, E: Event> Transition<S, C, E> {
    /// Check if this transition handles `event` in `current` (pure).
    pub fn can_execute(&self, current: &S, context: &C, event: &E) -> bool {
        if *current != self.from || event.kind() != self.on {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(context))
    }

    /// Run the actions in declaration order, threading the context through.
    pub fn apply(&self, context: C, event: &E) -> C {
        self.actions
            .iter()
            .fold(context, |context, action| action(context, event))
    }

    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

impl<S: State, C, E: Event> Debug for Transition<S, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("on", &self.on)
            .field("to", &self.to)
            .field("guarded", &self.guard.is_some())
            .field("actions", &self.actions.len())
            .finish()
    }
}
