//! The four-function calculator machine.
//!
//! Three states, four events and a handful of pure actions over a
//! [`MachineContext`]. The transition table lives in [`definition`]; the
//! arithmetic and the number formatting used for display live in
//! [`context`].
//!
//! ```rust
//! use calcflow::calculator::{calculator_machine, CalculatorEvent, Digit, Operator};
//!
//! let mut machine = calculator_machine().unwrap();
//! machine.send(CalculatorEvent::Digit(Digit::new(3).unwrap()));
//! machine.send(CalculatorEvent::SetOperator(Operator::Add));
//! machine.send(CalculatorEvent::Digit(Digit::new(4).unwrap()));
//! machine.send(CalculatorEvent::Equals);
//!
//! assert_eq!(machine.context().display(), "7");
//! ```

pub mod actions;
pub mod context;
pub mod definition;
pub mod error;
pub mod event;
pub mod operator;

pub use context::{compute, format_output, parse_operand, MachineContext};
pub use definition::{
    calculator_machine, first_operand_entered, CalculatorMachine, CalculatorState,
};
pub use error::InputError;
pub use event::{CalculatorEvent, Digit, EventKind};
pub use operator::Operator;
