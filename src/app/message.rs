// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::swipe_button;
use std::time::Instant;

/// The two controls on the demo screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoSlot {
    /// Reports success and keeps the result on screen.
    Succeeding,
    /// Reports failure and resets after the delay.
    Failing,
}

impl DemoSlot {
    pub const ALL: [DemoSlot; 2] = [DemoSlot::Succeeding, DemoSlot::Failing];

    /// Whether the simulated operation succeeds for this control.
    #[must_use]
    pub fn succeeds(self) -> bool {
        matches!(self, DemoSlot::Succeeding)
    }

    /// Diagnostics source label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DemoSlot::Succeeding => "succeeding",
            DemoSlot::Failing => "failing",
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Swipe {
        slot: DemoSlot,
        message: swipe_button::Message,
    },
    /// Animation frame for every control.
    Tick(Instant),
    /// Enable or disable the succeeding control.
    ToggleEnabled(bool),
    /// Confirm the succeeding control without a gesture.
    ConfirmProgrammatically,
    /// Simulated host operation finished.
    WorkFinished(DemoSlot),
    ExportDiagnostics,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SWIPE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional confirm threshold for the succeeding control.
    pub ratio: Option<f32>,
}
