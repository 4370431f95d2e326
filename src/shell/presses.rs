//! Turning a string of button labels into presses.
//!
//! Every unknown label is reported, not just the first one, using
//! Stillwater's `Validation` to accumulate failures.

use crate::shell::button::{Button, ButtonError};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Parse one press per non-whitespace character.
///
/// Positions in the returned errors are character offsets into `input`.
/// Equivalent to [`parse_press_args`] with a single argument.
///
/// # Example
///
/// ```rust
/// use calcflow::shell::parse_presses;
/// use stillwater::validation::Validation;
///
/// match parse_presses("12 + 3 =") {
///     Validation::Success(buttons) => assert_eq!(buttons.len(), 5),
///     Validation::Failure(_) => panic!("all labels are valid"),
/// }
///
/// match parse_presses("1x2y") {
///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
///     Validation::Success(_) => panic!("x and y are not buttons"),
/// }
/// ```
pub fn parse_presses(input: &str) -> Validation<Vec<Button>, NonEmptyVec<ButtonError>> {
    parse_press_args(&[input])
}

/// Parse presses spread over several inputs, such as command-line arguments.
///
/// Buttons come back in order across all inputs. Each error names the
/// input it came from and its character offset within that input.
pub fn parse_press_args<S: AsRef<str>>(
    args: &[S],
) -> Validation<Vec<Button>, NonEmptyVec<ButtonError>> {
    let checks: Vec<Validation<Button, NonEmptyVec<ButtonError>>> = args
        .iter()
        .enumerate()
        .flat_map(|(argument, input)| {
            input
                .as_ref()
                .chars()
                .enumerate()
                .filter(|(_, label)| !label.is_whitespace())
                .map(move |(position, label)| check_label(argument, position, label))
        })
        .collect();

    Validation::all_vec(checks)
}

fn check_label(
    argument: usize,
    position: usize,
    label: char,
) -> Validation<Button, NonEmptyVec<ButtonError>> {
    match Button::from_label(label) {
        Some(button) => Validation::success(button),
        None => Validation::fail(ButtonError {
            argument,
            position,
            label: label.to_string(),
        }),
    }
}
