// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting swipe activity reports.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: Non-blocking sender handed to each control
//! - [`DiagnosticsCollector`]: Owns the [`CircularBuffer`] of received events
//! - [`DiagnosticEvent`]: Gesture outcomes, state transitions and warnings
//! - [`DiagnosticReport`]: JSON export with a per-outcome summary

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
