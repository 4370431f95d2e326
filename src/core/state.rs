//! Core State trait for state machine states.
//!
//! Every machine state implements this trait, which exposes pure methods
//! for inspecting a state without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. A state is an immutable value describing the
/// current position of a machine; the data a machine accumulates lives in
/// its context, not in the state.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: transitions are matched against the current state
/// - `Debug`: states appear in diagnostics and logs
/// - `Serialize` + `Deserialize`: states are carried in display snapshots
///
/// # Example
///
/// ```rust
/// use calcflow::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Entry {
///     Typing,
///     Showing,
/// }
///
/// impl State for Entry {
///     fn name(&self) -> &str {
///         match self {
///             Self::Typing => "Typing",
///             Self::Showing => "Showing",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Showing)
///     }
/// }
///
/// assert_eq!(Entry::Typing.name(), "Typing");
/// assert!(Entry::Showing.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final state.
    ///
    /// A final state marks a completed computation. Machines may still
    /// leave a final state, for example on a reset event.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
