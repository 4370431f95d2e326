//! A calculator session: one machine, driven one event at a time.

use crate::builder::BuildError;
use crate::calculator::{
    calculator_machine, CalculatorEvent, CalculatorMachine, CalculatorState, MachineContext,
};
use crate::core::{State, StateHistory};
use crate::engine::Event;
use crate::shell::button::Button;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, info_span};
use uuid::Uuid;

/// What the display needs after an event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub state: CalculatorState,
    pub context: MachineContext,
    pub display: String,
    /// False when the event was ignored in the current state
    pub changed: bool,
}

/// Returned when a session is torn down.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub stopped_at: DateTime<Utc>,
    pub events: usize,
    pub transitions: usize,
    /// Milliseconds between the first and last transition, if any fired
    pub active_ms: Option<u64>,
    pub final_display: String,
}

/// Owns the calculator machine for the lifetime of one UI session.
///
/// The session never touches the context itself; every change goes
/// through a machine transition. Dropping or stopping the session drops
/// the machine, so no action can run afterwards.
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    machine: CalculatorMachine,
    events: usize,
}

impl Session {
    /// Start a session with a fresh machine and an empty context.
    pub fn start() -> Result<Self, BuildError> {
        let machine = calculator_machine()?;
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            machine,
            events: 0,
        };

        info!(
            session_id = %session.id,
            state = session.machine.current_state().name(),
            "Calculator session started"
        );
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> CalculatorState {
        *self.machine.current_state()
    }

    pub fn context(&self) -> &MachineContext {
        self.machine.context()
    }

    /// The output coerced to its display string.
    pub fn display(&self) -> String {
        self.machine.context().display()
    }

    pub fn history(&self) -> &StateHistory<CalculatorState> {
        self.machine.history()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_with(true)
    }

    /// Dispatch one event and return the resulting snapshot.
    pub fn send(&mut self, event: CalculatorEvent) -> Snapshot {
        let span = info_span!("dispatch", session_id = %self.id);
        let _guard = span.enter();

        self.events += 1;
        let step = self.machine.send(event);
        let snapshot = self.snapshot_with(step.is_transitioned());

        debug!(
            event = event.name(),
            state = snapshot.state.name(),
            display = %snapshot.display,
            changed = snapshot.changed,
            "Rendered snapshot"
        );
        snapshot
    }

    /// Translate a button press into its event and dispatch it.
    pub fn press(&mut self, button: Button) -> Snapshot {
        self.send(button.event())
    }

    /// Tear the session down.
    pub fn stop(self) -> SessionSummary {
        let summary = SessionSummary {
            id: self.id,
            started_at: self.started_at,
            stopped_at: Utc::now(),
            events: self.events,
            transitions: self.machine.history().len(),
            active_ms: self
                .machine
                .history()
                .duration()
                .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)),
            final_display: self.display(),
        };

        info!(
            session_id = %summary.id,
            events = summary.events,
            transitions = summary.transitions,
            active_ms = ?summary.active_ms,
            display = %summary.final_display,
            "Calculator session stopped"
        );
        summary
    }

    fn snapshot_with(&self, changed: bool) -> Snapshot {
        Snapshot {
            state: self.state(),
            context: self.machine.context().clone(),
            display: self.display(),
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Digit, Operator};

    fn digit(value: u8) -> Button {
        Button::Digit(Digit::new(value).unwrap())
    }

    #[test]
    fn new_session_shows_zero() {
        let session = Session::start().unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, CalculatorState::EnteringFirstOperand);
        assert_eq!(snapshot.display, "0");
        assert!(snapshot.context.is_initial());
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let a = Session::start().unwrap();
        let b = Session::start().unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn press_returns_rendered_snapshot() {
        let mut session = Session::start().unwrap();

        assert_eq!(session.press(digit(1)).display, "1");
        assert_eq!(session.press(digit(2)).display, "12");
        assert_eq!(
            session.press(Button::Operator(Operator::Add)).display,
            "0"
        );
        assert_eq!(session.press(digit(3)).display, "3");

        let result = session.press(Button::Equals);
        assert_eq!(result.display, "15");
        assert_eq!(result.state, CalculatorState::ShowingResult);
    }

    #[test]
    fn ignored_event_is_reported_unchanged() {
        let mut session = Session::start().unwrap();

        let snapshot = session.send(CalculatorEvent::Equals);

        assert!(!snapshot.changed);
        assert_eq!(snapshot.display, "0");
        assert!(session.history().is_empty());
    }

    #[test]
    fn snapshot_serializes_for_rendering() {
        let mut session = Session::start().unwrap();
        session.press(digit(7));

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["state"], "EnteringFirstOperand");
        assert_eq!(json["display"], "7");
        assert_eq!(json["context"]["first_operand"], "7");
    }

    #[test]
    fn stop_summarises_the_session() {
        let mut session = Session::start().unwrap();
        let id = session.id();
        session.press(Button::Operator(Operator::Add));
        session.press(digit(6));
        session.press(Button::Operator(Operator::Divide));
        session.press(digit(0));
        session.press(Button::Equals);

        let summary = session.stop();

        assert_eq!(summary.id, id);
        assert_eq!(summary.events, 5);
        // The first operator press was ignored
        assert_eq!(summary.transitions, 4);
        assert_eq!(summary.final_display, "Infinity");
        assert!(summary.stopped_at >= summary.started_at);
        assert!(summary.active_ms.is_some());
    }

    #[test]
    fn stop_without_transitions_has_no_active_time() {
        let mut session = Session::start().unwrap();
        session.send(CalculatorEvent::Equals);

        let summary = session.stop();

        assert_eq!(summary.events, 1);
        assert_eq!(summary.transitions, 0);
        assert_eq!(summary.active_ms, None);
    }
}
