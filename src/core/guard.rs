//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether a transition
//! may fire. A guard inspects whatever value it is typed over; the
//! calculator guards over its machine context.

use std::fmt;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use calcflow::core::Guard;
///
/// struct Draft {
///     digits: String,
/// }
///
/// let has_digits = Guard::new(|d: &Draft| !d.digits.is_empty());
///
/// assert!(has_digits.check(&Draft { digits: "42".into() }));
/// assert!(!has_digits.check(&Draft { digits: String::new() }));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic, free of side effects and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows a transition for this value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
