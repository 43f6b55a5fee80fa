// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types emitted by swipe controls and their host.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::ui::swipe_button::{SwipeOutcome, VisualState};

/// Interactions worth correlating when something looks wrong.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Pointer pressed on an interactive control.
    PointerDown {
        x: f32,
    },

    /// Pointer released; carries how the drag was classified.
    PointerReleased {
        offset: f32,
        outcome: SwipeOutcome,
    },

    /// Host confirmed the swipe without a gesture.
    ProgrammaticConfirm,

    /// Host reported the outcome of its operation.
    ResultReported {
        success: bool,
        reset: bool,
    },

    /// Host enabled or disabled the control.
    SetEnabled {
        enabled: bool,
    },
}

/// A diagnostic event with timestamp and emitting control.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// Label of the control that emitted the event, if any.
    pub source: Option<String>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(source: Option<String>, kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(source, kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(
        source: Option<String>,
        kind: DiagnosticEventKind,
        timestamp: Instant,
    ) -> Self {
        Self {
            timestamp,
            source,
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
    },

    /// The control's visual state machine moved.
    StateTransition {
        from: VisualState,
        to: VisualState,
    },

    /// A request was ignored or a value had to be corrected.
    Warning {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_is_timestamped_now() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(
            None,
            DiagnosticEventKind::Warning {
                message: "ignored".to_string(),
            },
        );
        assert!(event.timestamp >= before);
        assert!(event.timestamp <= Instant::now());
    }

    #[test]
    fn user_action_serializes_with_tag() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::PointerReleased {
                offset: 12.0,
                outcome: SwipeOutcome::SnapBack,
            },
        };
        let json = serde_json::to_value(&kind).expect("serialization should succeed");
        assert_eq!(json["type"], "user_action");
        assert_eq!(json["action"]["action"], "pointer_released");
        assert_eq!(json["action"]["outcome"], "snap_back");
    }

    #[test]
    fn transition_round_trips_through_json() {
        let kind = DiagnosticEventKind::StateTransition {
            from: VisualState::Tracking,
            to: VisualState::MorphedWaiting,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        let back: DiagnosticEventKind =
            serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(back, kind);
    }
}
