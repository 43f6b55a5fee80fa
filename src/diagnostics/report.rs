// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report generation and JSON export.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DiagnosticEvent, DiagnosticEventKind, UserAction};
use crate::ui::swipe_button::SwipeOutcome;

// =============================================================================
// Report Metadata
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub collection_started_at: DateTime<Utc>,
    /// Version of the crate that generated the report
    pub version: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            collection_started_at,
            version: env!("CARGO_PKG_VERSION").to_string(),
            collection_duration_ms,
            event_count,
        }
    }
}

// =============================================================================
// Serializable Event
// =============================================================================

/// `DiagnosticEvent` with its `Instant` replaced by milliseconds since
/// collection started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(event: &DiagnosticEvent, collection_start: Instant) -> Self {
        let timestamp_ms = event
            .timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;

        Self {
            timestamp_ms,
            source: event.source.clone(),
            kind: event.kind.clone(),
        }
    }
}

// =============================================================================
// Report Summary
// =============================================================================

/// Gesture and result tallies over the reported events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub confirmed: usize,
    pub snapped_back: usize,
    pub taps: usize,
    pub programmatic_confirms: usize,
    pub successes: usize,
    pub failures: usize,
    pub warnings: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        let mut summary = Self::default();
        for event in events {
            match &event.kind {
                DiagnosticEventKind::UserAction { action } => match action {
                    UserAction::PointerReleased { outcome, .. } => match outcome {
                        SwipeOutcome::Confirmed => summary.confirmed += 1,
                        SwipeOutcome::SnapBack => summary.snapped_back += 1,
                        SwipeOutcome::ReturnToRest => summary.taps += 1,
                    },
                    UserAction::ProgrammaticConfirm => summary.programmatic_confirms += 1,
                    UserAction::ResultReported { success: true, .. } => summary.successes += 1,
                    UserAction::ResultReported { success: false, .. } => summary.failures += 1,
                    UserAction::PointerDown { .. } | UserAction::SetEnabled { .. } => {}
                },
                DiagnosticEventKind::Warning { .. } => summary.warnings += 1,
                DiagnosticEventKind::StateTransition { .. } => {}
            }
        }
        summary
    }
}

// =============================================================================
// Report
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            summary,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn released(outcome: SwipeOutcome) -> SerializableEvent {
        SerializableEvent {
            timestamp_ms: 0,
            source: None,
            kind: DiagnosticEventKind::UserAction {
                action: UserAction::PointerReleased {
                    offset: 0.0,
                    outcome,
                },
            },
        }
    }

    #[test]
    fn serializable_event_uses_relative_milliseconds() {
        let start = Instant::now();
        let event = DiagnosticEvent::with_timestamp(
            Some("pay".to_string()),
            DiagnosticEventKind::Warning {
                message: "late".to_string(),
            },
            start + Duration::from_millis(1500),
        );

        let serializable = SerializableEvent::new(&event, start);
        assert_eq!(serializable.timestamp_ms, 1500);
        assert_eq!(serializable.source.as_deref(), Some("pay"));
    }

    #[test]
    fn summary_counts_outcomes() {
        let events = vec![
            released(SwipeOutcome::Confirmed),
            released(SwipeOutcome::SnapBack),
            released(SwipeOutcome::SnapBack),
            released(SwipeOutcome::ReturnToRest),
            SerializableEvent {
                timestamp_ms: 10,
                source: None,
                kind: DiagnosticEventKind::UserAction {
                    action: UserAction::ResultReported {
                        success: false,
                        reset: true,
                    },
                },
            },
        ];

        let summary = ReportSummary::from_events(&events);
        assert_eq!(summary.confirmed, 1);
        assert_eq!(summary.snapped_back, 2);
        assert_eq!(summary.taps, 1);
        assert_eq!(summary.failures, 1);
        assert_eq!(summary.successes, 0);
    }

    #[test]
    fn flattened_event_json_has_type_at_top_level() {
        let json = serde_json::to_value(released(SwipeOutcome::Confirmed))
            .expect("serialization should succeed");
        assert_eq!(json["type"], "user_action");
        assert!(json.get("source").is_none());
    }
}
