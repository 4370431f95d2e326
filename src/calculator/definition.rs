//! States and the transition table of the calculator.

use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
use crate::calculator::actions;
use crate::calculator::context::MachineContext;
use crate::calculator::event::{CalculatorEvent, EventKind};
use crate::core::Guard;
use crate::engine::StateMachine;
use crate::state_enum;

state_enum! {
    #[derive(Copy, Eq, Hash)]
    pub enum CalculatorState {
        EnteringFirstOperand,
        EnteringSecondOperand,
        ShowingResult,
    }
    final: [ShowingResult]
}

pub type CalculatorMachine = StateMachine<CalculatorState, MachineContext, CalculatorEvent>;

type Row = TransitionBuilder<CalculatorState, MachineContext, CalculatorEvent>;

/// An operator may only be chosen once the first operand has digits.
pub fn first_operand_entered() -> Guard<MachineContext> {
    Guard::new(|context: &MachineContext| !context.first_operand.is_empty())
}

fn row(from: CalculatorState, on: EventKind) -> Row {
    TransitionBuilder::new().from(from).on(on)
}

/// Build a fresh calculator in `EnteringFirstOperand` with an empty context.
///
/// Pairs missing from the table (EQUALS before an operator, SET_OPERATOR
/// or EQUALS on a result, SET_OPERATOR with no digits) are ignored.
pub fn calculator_machine() -> Result<CalculatorMachine, BuildError> {
    use CalculatorState::{EnteringFirstOperand, EnteringSecondOperand, ShowingResult};

    StateMachineBuilder::new()
        .initial(EnteringFirstOperand)
        .context(MachineContext::default())
        // Entering the first operand
        .transition(row(EnteringFirstOperand, EventKind::Clear).action(actions::reset_context))?
        .transition(
            row(EnteringFirstOperand, EventKind::Digit).action(actions::append_first_operand),
        )?
        .transition(
            row(EnteringFirstOperand, EventKind::SetOperator)
                .to(EnteringSecondOperand)
                .guard(first_operand_entered())
                .action(actions::store_operator)
                .action(actions::reset_output),
        )?
        // Entering the second operand
        .transition(
            row(EnteringSecondOperand, EventKind::Clear)
                .to(EnteringFirstOperand)
                .action(actions::reset_context),
        )?
        .transition(
            row(EnteringSecondOperand, EventKind::Digit).action(actions::append_second_operand),
        )?
        .transition(
            row(EnteringSecondOperand, EventKind::SetOperator)
                .action(actions::fold_running_result)
                .action(actions::store_operator),
        )?
        .transition(
            row(EnteringSecondOperand, EventKind::Equals)
                .to(ShowingResult)
                .action(actions::submit),
        )?
        // Showing a result
        .transition(
            row(ShowingResult, EventKind::Clear)
                .to(EnteringFirstOperand)
                .action(actions::reset_context),
        )?
        .transition(
            row(ShowingResult, EventKind::Digit)
                .to(EnteringFirstOperand)
                .action(actions::start_first_operand),
        )?
        .build()
}
