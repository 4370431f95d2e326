//! Keypad buttons and their labels.

use crate::calculator::{CalculatorEvent, Digit, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A press label that names no button.
///
/// `argument` is the zero-based index of the input the label came from and
/// `position` the character offset within that input.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown button '{label}' at position {position} of argument {}", .argument + 1)]
pub struct ButtonError {
    pub argument: usize,
    pub position: usize,
    pub label: String,
}

/// One key on the calculator keypad.
///
/// Buttons carry no logic: each press maps to exactly one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Digit(Digit),
    Operator(Operator),
    Clear,
    Equals,
}

impl Button {
    /// Map a single-character label to its button.
    pub fn from_label(label: char) -> Option<Self> {
        match label {
            'C' | 'c' => Some(Button::Clear),
            '=' => Some(Button::Equals),
            _ => Digit::from_char(label)
                .map(Button::Digit)
                .or_else(|| Operator::from_symbol(label).map(Button::Operator)),
        }
    }

    pub fn label(self) -> char {
        match self {
            Button::Digit(digit) => digit.as_char(),
            Button::Operator(operator) => operator.symbol(),
            Button::Clear => 'C',
            Button::Equals => '=',
        }
    }

    pub fn event(self) -> CalculatorEvent {
        match self {
            Button::Digit(digit) => CalculatorEvent::Digit(digit),
            Button::Operator(operator) => CalculatorEvent::SetOperator(operator),
            Button::Clear => CalculatorEvent::Clear,
            Button::Equals => CalculatorEvent::Equals,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Button {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let button = match (chars.next(), chars.next()) {
            (Some(label), None) => Button::from_label(label),
            _ => None,
        };
        button.ok_or_else(|| ButtonError {
            argument: 0,
            position: 0,
            label: s.to_string(),
        })
    }
}

/// Labels of the keypad, row by row.
pub const KEYPAD_LABELS: [[char; 4]; 4] = [
    ['1', '2', '3', '+'],
    ['4', '5', '6', '-'],
    ['7', '8', '9', '*'],
    ['C', '0', '=', '/'],
];

/// The keypad layout as buttons, row by row.
pub fn keypad() -> Vec<Vec<Button>> {
    KEYPAD_LABELS
        .iter()
        .map(|row| row.iter().filter_map(|&label| Button::from_label(label)).collect())
        .collect()
}
