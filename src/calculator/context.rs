//! Machine context and the numeric helpers that read and write it.

use crate::calculator::operator::Operator;
use serde::{Deserialize, Serialize};

/// Everything the calculator accumulates between events.
///
/// Operand strings hold digits in click order. The only exception is a
/// folded running result, which is written back to `first_operand` in
/// its display form (for example `"-3"` or `"NaN"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineContext {
    pub first_operand: String,
    pub operator: Option<Operator>,
    pub second_operand: String,
    /// May be NaN or infinite; never clamped.
    pub output: f64,
}

impl Default for MachineContext {
    fn default() -> Self {
        Self {
            first_operand: String::new(),
            operator: None,
            second_operand: String::new(),
            output: 0.0,
        }
    }
}

impl MachineContext {
    /// The output as the display shows it.
    pub fn display(&self) -> String {
        format_output(self.output)
    }

    pub fn is_initial(&self) -> bool {
        self.first_operand.is_empty()
            && self.operator.is_none()
            && self.second_operand.is_empty()
            && self.output == 0.0
    }
}

/// Read the leading integer of an operand string.
///
/// Skips leading whitespace, accepts one optional sign, then takes the
/// longest run of ASCII digits. Anything after that run is ignored, and a
/// string with no digits reads as NaN.
pub fn parse_operand(operand: &str) -> f64 {
    let trimmed = operand.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        return f64::NAN;
    }
    let value = digits.parse::<f64>().unwrap_or(f64::NAN);
    if negative {
        -value
    } else {
        value
    }
}

/// Render a value for the display.
pub fn format_output(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // Covers negative zero
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Parse both operands and apply the operator.
pub fn compute(first: &str, second: &str, operator: Operator) -> f64 {
    operator.apply(parse_operand(first), parse_operand(second))
}
