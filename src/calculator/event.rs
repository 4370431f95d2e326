//! Calculator events.

use crate::calculator::error::InputError;
use crate::calculator::operator::Operator;
use crate::engine::Event;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, InputError> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(InputError::InvalidDigit(value))
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Digit(d as u8))
    }

    /// All ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Digit)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the calculator reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculatorEvent {
    Clear,
    Digit(Digit),
    SetOperator(Operator),
    Equals,
}

/// Payload-free discriminant of [`CalculatorEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Clear,
    Digit,
    SetOperator,
    Equals,
}

impl Event for CalculatorEvent {
    type Kind = EventKind;

    fn kind(&self) -> EventKind {
        match self {
            Self::Clear => EventKind::Clear,
            Self::Digit(_) => EventKind::Digit,
            Self::SetOperator(_) => EventKind::SetOperator,
            Self::Equals => EventKind::Equals,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Clear => "CLEAR",
            Self::Digit(_) => "DIGIT",
            Self::SetOperator(_) => "SET_OPERATOR",
            Self::Equals => "EQUALS",
        }
    }
}

impl From<Digit> for CalculatorEvent {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for CalculatorEvent {
    fn from(operator: Operator) -> Self {
        Self::SetOperator(operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_accepts_zero_through_nine() {
        for value in 0..=9 {
            assert_eq!(Digit::new(value).map(Digit::value), Ok(value));
        }
        assert_eq!(Digit::new(10), Err(InputError::InvalidDigit(10)));
    }

    #[test]
    fn digit_char_conversions() {
        assert_eq!(Digit::from_char('7').map(Digit::as_char), Some('7'));
        assert_eq!(Digit::from_char('a'), None);
        let chars: String = Digit::all().map(Digit::as_char).collect();
        assert_eq!(chars, "0123456789");
    }

    #[test]
    fn digit_deserialization_is_validated() {
        let digit: Digit = serde_json::from_str("4").unwrap();
        assert_eq!(digit.value(), 4);
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }

    #[test]
    fn event_kinds_and_names() {
        let cases = [
            (CalculatorEvent::Clear, EventKind::Clear, "CLEAR"),
            (
                CalculatorEvent::from(Digit::new(1).unwrap()),
                EventKind::Digit,
                "DIGIT",
            ),
            (
                CalculatorEvent::from(Operator::Divide),
                EventKind::SetOperator,
                "SET_OPERATOR",
            ),
            (CalculatorEvent::Equals, EventKind::Equals, "EQUALS"),
        ];

        for (event, kind, name) in cases {
            assert_eq!(event.kind(), kind);
            assert_eq!(event.name(), name);
        }
    }
}
