// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Swipe**: Distance ratio and hint geometry
//! - **Timing**: Durations of every control animation
//! - **Shape**: Corner radii of the rest and morphed shapes
//! - **Appearance**: Text, size and colour defaults
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Share of the control width the hint must cover before a release confirms.
pub const DEFAULT_SWIPE_DISTANCE_RATIO: f32 = 0.85;

/// Minimum swipe distance ratio.
pub const MIN_SWIPE_DISTANCE_RATIO: f32 = 0.0;

/// Maximum swipe distance ratio (the hint must travel the full width).
pub const MAX_SWIPE_DISTANCE_RATIO: f32 = 1.0;

/// Default width of the draggable hint (two 24px chevrons).
pub const DEFAULT_HINT_WIDTH: f32 = 48.0;

// ==========================================================================
// Timing Defaults (milliseconds)
// ==========================================================================

/// First phase of the entry hint: sweep across the full width.
pub const ENTRY_SWEEP_DURATION_MS: u64 = 1000;

/// Second phase of the entry hint: slide back in from the left edge.
pub const HINT_INIT_DURATION_MS: u64 = 300;

/// Snap-back of a released but unconfirmed hint.
pub const HINT_BACK_DURATION_MS: u64 = 300;

/// Rectangle to square morph, and the reverse.
pub const MORPH_DURATION_MS: u64 = 500;

/// Fade in/out of hint, label, spinner and result glyph.
pub const FADE_DURATION_MS: u64 = 300;

/// Delay between showing a result and morphing back, when a reset is requested.
pub const DEFAULT_RESET_DELAY_MS: u64 = 1200;

/// Minimum configurable reset delay.
pub const MIN_RESET_DELAY_MS: u64 = 200;

/// Maximum configurable reset delay.
pub const MAX_RESET_DELAY_MS: u64 = 10_000;

/// Spinner angular speed while waiting for the host (radians per second).
pub const SPINNER_SPEED_RAD_PER_SEC: f32 = 6.0;

// ==========================================================================
// Shape Defaults
// ==========================================================================

/// Corner radius of the control at rest.
pub const DEFAULT_CORNER_RADIUS: f32 = 3.0;

/// Corner radius once morphed; large enough to turn the square into a circle.
pub const MORPHED_CORNER_RADIUS: f32 = 100.0;

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Default label size in pixels.
pub const DEFAULT_TEXT_SIZE: f32 = 14.0;

/// Default label.
pub const DEFAULT_BUTTON_TEXT: &str = "Swipe to confirm";

/// Default label colour.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// Default background colour.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#4d99e6";

/// Default chevron tint (alpha included for translucency).
pub const DEFAULT_ARROW_COLOR: &str = "#ffffffb3";

/// Opacity applied to the whole control while disabled.
pub const DISABLED_OPACITY: f32 = 0.5;

// ==========================================================================
// Demo Defaults
// ==========================================================================

/// Duration of the simulated host operation after a confirmed swipe.
pub const DEFAULT_SIMULATED_WORK_MS: u64 = 2000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default diagnostics buffer capacity (number of events).
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

/// Control notices kept for the host between two drains.
pub const CONTROL_EVENT_CAPACITY: usize = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ratio_is_within_bounds() {
        assert!(DEFAULT_SWIPE_DISTANCE_RATIO >= MIN_SWIPE_DISTANCE_RATIO);
        assert!(DEFAULT_SWIPE_DISTANCE_RATIO <= MAX_SWIPE_DISTANCE_RATIO);
    }

    #[test]
    fn default_reset_delay_is_within_bounds() {
        assert!(DEFAULT_RESET_DELAY_MS >= MIN_RESET_DELAY_MS);
        assert!(DEFAULT_RESET_DELAY_MS <= MAX_RESET_DELAY_MS);
    }

    #[test]
    fn morphed_radius_exceeds_rest_radius() {
        assert!(MORPHED_CORNER_RADIUS > DEFAULT_CORNER_RADIUS);
    }

    #[test]
    fn default_colors_parse() {
        for hex in [
            DEFAULT_TEXT_COLOR,
            DEFAULT_BACKGROUND_COLOR,
            DEFAULT_ARROW_COLOR,
        ] {
            assert!(hex.parse::<iced::Color>().is_ok(), "{hex} should parse");
        }
    }
}
