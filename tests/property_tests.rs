//! Property-based tests for the calculator machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated event sequences.

use calcflow::calculator::{
    calculator_machine, first_operand_entered, format_output, parse_operand, CalculatorEvent,
    CalculatorState, Digit, MachineContext, Operator,
};
use calcflow::core::State;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(value in 0..=9u8) -> Digit {
        Digit::new(value).unwrap()
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4usize) -> Operator {
        Operator::ALL[variant]
    }
}

fn arbitrary_event() -> impl Strategy<Value = CalculatorEvent> {
    prop_oneof![
        1 => Just(CalculatorEvent::Clear),
        6 => arbitrary_digit().prop_map(CalculatorEvent::Digit),
        2 => arbitrary_operator().prop_map(CalculatorEvent::SetOperator),
        1 => Just(CalculatorEvent::Equals),
    ]
}

fn digits_to_string(digits: &[Digit]) -> String {
    digits.iter().map(|d| d.as_char()).collect()
}

proptest! {
    #[test]
    fn output_tracks_first_operand_digits(digits in prop::collection::vec(arbitrary_digit(), 1..15)) {
        let mut machine = calculator_machine().unwrap();

        for (i, digit) in digits.iter().enumerate() {
            machine.send(CalculatorEvent::Digit(*digit));
            let entered = digits_to_string(&digits[..=i]);
            prop_assert_eq!(machine.context().output, parse_operand(&entered));
            prop_assert_eq!(&machine.context().first_operand, &entered);
        }
        prop_assert_eq!(machine.current_state(), &CalculatorState::EnteringFirstOperand);
    }

    #[test]
    fn operator_without_first_operand_is_a_no_op(
        prefix in prop::collection::vec(arbitrary_event(), 0..20),
        operator in arbitrary_operator()
    ) {
        let mut machine = calculator_machine().unwrap();
        for event in prefix {
            machine.send(event);
        }
        machine.send(CalculatorEvent::Clear);

        let before = machine.history().len();
        let result = machine.send(CalculatorEvent::SetOperator(operator));

        prop_assert!(!result.is_transitioned());
        prop_assert_eq!(machine.current_state(), &CalculatorState::EnteringFirstOperand);
        prop_assert!(machine.context().is_initial());
        prop_assert_eq!(machine.history().len(), before);
    }

    #[test]
    fn clear_resets_from_any_state(events in prop::collection::vec(arbitrary_event(), 0..40)) {
        let mut machine = calculator_machine().unwrap();
        for event in events {
            machine.send(event);
        }

        let result = machine.send(CalculatorEvent::Clear);

        prop_assert!(result.is_transitioned());
        prop_assert_eq!(machine.current_state(), &CalculatorState::EnteringFirstOperand);
        prop_assert_eq!(machine.context(), &MachineContext::default());
    }

    #[test]
    fn two_operand_computation_matches_operator(
        a in prop::collection::vec(arbitrary_digit(), 1..6),
        b in prop::collection::vec(arbitrary_digit(), 1..6),
        operator in arbitrary_operator()
    ) {
        let mut machine = calculator_machine().unwrap();
        for digit in &a {
            machine.send(CalculatorEvent::Digit(*digit));
        }
        machine.send(CalculatorEvent::SetOperator(operator));
        for digit in &b {
            machine.send(CalculatorEvent::Digit(*digit));
        }
        machine.send(CalculatorEvent::Equals);

        let expected = operator.apply(
            parse_operand(&digits_to_string(&a)),
            parse_operand(&digits_to_string(&b)),
        );
        prop_assert_eq!(machine.current_state(), &CalculatorState::ShowingResult);
        prop_assert_eq!(machine.context().display(), format_output(expected));
        prop_assert!(machine.context().first_operand.is_empty());
        prop_assert!(machine.context().second_operand.is_empty());
    }

    #[test]
    fn chained_operators_fold_left_to_right(
        a in 0..1000u32,
        b in 0..1000u32,
        c in 1..1000u32,
        first in arbitrary_operator(),
        second in arbitrary_operator()
    ) {
        let mut machine = calculator_machine().unwrap();
        let press_number = |machine: &mut calcflow::calculator::CalculatorMachine, n: u32| {
            for label in n.to_string().chars() {
                machine.send(CalculatorEvent::Digit(Digit::from_char(label).unwrap()));
            }
        };

        press_number(&mut machine, a);
        machine.send(CalculatorEvent::SetOperator(first));
        press_number(&mut machine, b);
        machine.send(CalculatorEvent::SetOperator(second));
        press_number(&mut machine, c);
        machine.send(CalculatorEvent::Equals);

        // The folded value is written back in display form and re-read as an integer
        let folded = parse_operand(&format_output(first.apply(a as f64, b as f64)));
        let expected = second.apply(folded, c as f64);
        prop_assert_eq!(machine.context().display(), format_output(expected));
    }

    #[test]
    fn display_is_never_empty(events in prop::collection::vec(arbitrary_event(), 0..40)) {
        let mut machine = calculator_machine().unwrap();
        for event in events {
            machine.send(event);
            prop_assert!(!machine.context().display().is_empty());
        }
    }

    #[test]
    fn operator_guard_checks_first_operand(
        first_operand in "[0-9]{0,4}",
        second_operand in "[0-9]{0,4}",
        operator in prop::option::of(arbitrary_operator())
    ) {
        let guard = first_operand_entered();
        let context = MachineContext {
            first_operand,
            operator,
            second_operand,
            ..MachineContext::default()
        };

        prop_assert_eq!(guard.check(&context), !context.first_operand.is_empty());
        prop_assert_eq!(guard.check(&context), guard.check(&context));
    }

    #[test]
    fn history_path_ends_at_current_state(events in prop::collection::vec(arbitrary_event(), 1..30)) {
        let mut machine = calculator_machine().unwrap();
        for event in events {
            machine.send(event);
        }

        let path = machine.history().get_path();
        if let Some(last) = path.last() {
            prop_assert_eq!(*last, machine.current_state());
            prop_assert_eq!(path[0], &CalculatorState::EnteringFirstOperand);
        }
        prop_assert_eq!(machine.is_final(), machine.current_state().is_final());
    }
}
