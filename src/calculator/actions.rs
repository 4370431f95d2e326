//! Pure actions attached to calculator transitions.
//!
//! Each action takes the context by value and returns the next one. An
//! action handed an event it does not use returns the context unchanged;
//! the transition table only pairs actions with the event kinds they read.

use crate::calculator::context::{compute, format_output, parse_operand, MachineContext};
use crate::calculator::event::CalculatorEvent;

pub fn reset_context(_context: MachineContext, _event: &CalculatorEvent) -> MachineContext {
    MachineContext::default()
}

pub fn append_first_operand(mut context: MachineContext, event: &CalculatorEvent) -> MachineContext {
    if let CalculatorEvent::Digit(digit) = event {
        context.first_operand.push(digit.as_char());
        context.output = parse_operand(&context.first_operand);
    }
    context
}

/// Begin a new first operand after a result, discarding both operand strings.
pub fn start_first_operand(mut context: MachineContext, event: &CalculatorEvent) -> MachineContext {
    if let CalculatorEvent::Digit(digit) = event {
        context.first_operand = digit.as_char().to_string();
        context.second_operand.clear();
        context.output = parse_operand(&context.first_operand);
    }
    context
}

pub fn append_second_operand(
    mut context: MachineContext,
    event: &CalculatorEvent,
) -> MachineContext {
    if let CalculatorEvent::Digit(digit) = event {
        context.second_operand.push(digit.as_char());
        context.output = parse_operand(&context.second_operand);
    }
    context
}

pub fn store_operator(mut context: MachineContext, event: &CalculatorEvent) -> MachineContext {
    if let CalculatorEvent::SetOperator(operator) = event {
        context.operator = Some(*operator);
    }
    context
}

pub fn reset_output(mut context: MachineContext, _event: &CalculatorEvent) -> MachineContext {
    context.output = 0.0;
    context
}

/// Fold the pending computation into the first operand so operators chain
/// left to right: `3 + 4 - 5` becomes `7 - 5`.
pub fn fold_running_result(
    mut context: MachineContext,
    _event: &CalculatorEvent,
) -> MachineContext {
    let Some(operator) = context.operator else {
        return context;
    };

    let result = compute(&context.first_operand, &context.second_operand, operator);
    context.first_operand = format_output(result);
    context.second_operand.clear();
    context.output = result;
    context
}

pub fn submit(mut context: MachineContext, _event: &CalculatorEvent) -> MachineContext {
    let Some(operator) = context.operator else {
        return context;
    };

    context.output = compute(&context.first_operand, &context.second_operand, operator);
    context.first_operand.clear();
    context.second_operand.clear();
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::event::Digit;
    use crate::calculator::operator::Operator;

    fn digit(value: u8) -> CalculatorEvent {
        CalculatorEvent::Digit(Digit::new(value).unwrap())
    }

    fn context(first: &str, operator: Option<Operator>, second: &str) -> MachineContext {
        MachineContext {
            first_operand: first.to_string(),
            operator,
            second_operand: second.to_string(),
            output: 0.0,
        }
    }

    #[test]
    fn reset_restores_defaults() {
        let dirty = MachineContext {
            output: 9.0,
            ..context("1", Some(Operator::Add), "8")
        };

        assert!(reset_context(dirty, &CalculatorEvent::Clear).is_initial());
    }

    #[test]
    fn append_first_operand_updates_output() {
        let ctx = append_first_operand(MachineContext::default(), &digit(4));
        let ctx = append_first_operand(ctx, &digit(2));

        assert_eq!(ctx.first_operand, "42");
        assert_eq!(ctx.output, 42.0);
    }

    #[test]
    fn append_ignores_non_digit_events() {
        let ctx = append_first_operand(context("5", None, ""), &CalculatorEvent::Equals);
        assert_eq!(ctx, context("5", None, ""));
    }

    #[test]
    fn start_first_operand_discards_previous_operands() {
        let ctx = start_first_operand(context("", Some(Operator::Add), "9"), &digit(3));

        assert_eq!(ctx.first_operand, "3");
        assert!(ctx.second_operand.is_empty());
        assert_eq!(ctx.output, 3.0);
        assert_eq!(ctx.operator, Some(Operator::Add));
    }

    #[test]
    fn append_second_operand_shows_second_value() {
        let ctx = append_second_operand(context("12", Some(Operator::Add), "3"), &digit(0));

        assert_eq!(ctx.second_operand, "30");
        assert_eq!(ctx.output, 30.0);
        assert_eq!(ctx.first_operand, "12");
    }

    #[test]
    fn store_operator_replaces_pending_operator() {
        let ctx = store_operator(
            context("1", Some(Operator::Add), ""),
            &CalculatorEvent::SetOperator(Operator::Divide),
        );
        assert_eq!(ctx.operator, Some(Operator::Divide));
    }

    #[test]
    fn fold_running_result_writes_back_display_form() {
        let ctx = fold_running_result(
            context("3", Some(Operator::Subtract), "5"),
            &CalculatorEvent::SetOperator(Operator::Add),
        );

        assert_eq!(ctx.first_operand, "-2");
        assert!(ctx.second_operand.is_empty());
        assert_eq!(ctx.output, -2.0);
    }

    #[test]
    fn fold_with_empty_second_operand_is_nan() {
        let ctx = fold_running_result(
            context("3", Some(Operator::Add), ""),
            &CalculatorEvent::SetOperator(Operator::Add),
        );

        assert_eq!(ctx.first_operand, "NaN");
        assert!(ctx.output.is_nan());
    }

    #[test]
    fn fold_and_submit_skip_without_operator() {
        let before = context("3", None, "4");

        assert_eq!(
            fold_running_result(before.clone(), &CalculatorEvent::Equals),
            before
        );
        assert_eq!(submit(before.clone(), &CalculatorEvent::Equals), before);
    }

    #[test]
    fn submit_computes_and_clears_operands() {
        let ctx = submit(
            context("12", Some(Operator::Add), "3"),
            &CalculatorEvent::Equals,
        );

        assert_eq!(ctx.output, 15.0);
        assert!(ctx.first_operand.is_empty());
        assert!(ctx.second_operand.is_empty());
        assert_eq!(ctx.operator, Some(Operator::Add));
    }
}
