// SPDX-License-Identifier: MPL-2.0
//! Swipe newtypes.
//!
//! Type-safe wrappers for swipe control values, ensuring they are always
//! within valid ranges.

use crate::config::{
    DEFAULT_RESET_DELAY_MS, DEFAULT_SWIPE_DISTANCE_RATIO, MAX_RESET_DELAY_MS,
    MAX_SWIPE_DISTANCE_RATIO, MIN_RESET_DELAY_MS, MIN_SWIPE_DISTANCE_RATIO,
};
use std::time::Duration;

// =============================================================================
// Ratio Bounds
// =============================================================================

/// Swipe distance ratio bounds (0.0 to 1.0).
pub mod ratio_bounds {
    /// Minimum ratio: any displacement past the hint width confirms.
    pub const MIN: f32 = super::MIN_SWIPE_DISTANCE_RATIO;
    /// Maximum ratio: the hint must cover the full width.
    pub const MAX: f32 = super::MAX_SWIPE_DISTANCE_RATIO;
    /// Default ratio.
    pub const DEFAULT: f32 = super::DEFAULT_SWIPE_DISTANCE_RATIO;
}

// =============================================================================
// SwipeDistanceRatio
// =============================================================================

/// How far the hint must travel, as a share of the control width, before a
/// release counts as a confirmed swipe.
///
/// Out-of-range values are clamped silently; NaN falls back to the default.
///
/// # Example
///
/// ```
/// use iced_swipe::domain::swipe::SwipeDistanceRatio;
///
/// assert_eq!(SwipeDistanceRatio::new(0.5).value(), 0.5);
/// assert_eq!(SwipeDistanceRatio::new(1.5).value(), 1.0);
/// assert_eq!(SwipeDistanceRatio::new(-0.3).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeDistanceRatio(f32);

impl SwipeDistanceRatio {
    /// Creates a new ratio, clamping the value to `[0.0, 1.0]`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(ratio_bounds::MIN, ratio_bounds::MAX))
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Distance in pixels the hint's trailing edge must exceed on a control
    /// of the given width.
    #[must_use]
    pub fn threshold_for(self, control_width: f32) -> f32 {
        control_width * self.0
    }
}

impl Default for SwipeDistanceRatio {
    fn default() -> Self {
        Self(ratio_bounds::DEFAULT)
    }
}

impl From<f32> for SwipeDistanceRatio {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// ResetDelay
// =============================================================================

/// Delay between showing a result glyph and morphing back to the rest shape.
///
/// Clamped to 200 ms – 10 s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetDelay(u64);

impl ResetDelay {
    /// Creates a new delay in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_RESET_DELAY_MS, MAX_RESET_DELAY_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ResetDelay {
    fn default() -> Self {
        Self(DEFAULT_RESET_DELAY_MS)
    }
}

// =============================================================================
// ResetPolicy
// =============================================================================

/// What happens after a result glyph is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Morph back to the rest shape after the reset delay.
    Reset,
    /// Leave the result on screen until the control is rebuilt.
    Keep,
}

impl ResetPolicy {
    /// Resolves the caller's explicit choice, defaulting to resetting only
    /// after a failure.
    #[must_use]
    pub fn resolve(success: bool, explicit: Option<bool>) -> Self {
        if explicit.unwrap_or(!success) {
            ResetPolicy::Reset
        } else {
            ResetPolicy::Keep
        }
    }

    #[must_use]
    pub fn should_reset(self) -> bool {
        matches!(self, ResetPolicy::Reset)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_clamps_out_of_range_values() {
        assert_eq!(SwipeDistanceRatio::new(1.5).value(), 1.0);
        assert_eq!(SwipeDistanceRatio::new(-0.3).value(), 0.0);
    }

    #[test]
    fn ratio_keeps_in_range_values() {
        assert_eq!(SwipeDistanceRatio::new(0.5).value(), 0.5);
        assert_eq!(SwipeDistanceRatio::new(0.0).value(), 0.0);
        assert_eq!(SwipeDistanceRatio::new(1.0).value(), 1.0);
    }

    #[test]
    fn ratio_always_within_unit_interval() {
        for raw in [-100.0, -1.0, -0.0001, 0.25, 0.999, 1.0001, 42.0, f32::INFINITY] {
            let value = SwipeDistanceRatio::new(raw).value();
            assert!((0.0..=1.0).contains(&value), "{raw} -> {value}");
        }
    }

    #[test]
    fn ratio_nan_falls_back_to_default() {
        assert_eq!(
            SwipeDistanceRatio::new(f32::NAN),
            SwipeDistanceRatio::default()
        );
    }

    #[test]
    fn ratio_threshold_scales_with_width() {
        let ratio = SwipeDistanceRatio::new(0.85);
        assert!((ratio.threshold_for(300.0) - 255.0).abs() < 1e-3);
    }

    #[test]
    fn reset_delay_clamps() {
        assert_eq!(ResetDelay::from_millis(0).millis(), MIN_RESET_DELAY_MS);
        assert_eq!(ResetDelay::from_millis(60_000).millis(), MAX_RESET_DELAY_MS);
        assert_eq!(ResetDelay::default().as_duration(), Duration::from_millis(1200));
    }

    #[test]
    fn reset_policy_defaults_to_reset_only_on_failure() {
        assert_eq!(ResetPolicy::resolve(true, None), ResetPolicy::Keep);
        assert_eq!(ResetPolicy::resolve(false, None), ResetPolicy::Reset);
    }

    #[test]
    fn reset_policy_honours_explicit_choice() {
        assert_eq!(ResetPolicy::resolve(true, Some(true)), ResetPolicy::Reset);
        assert_eq!(ResetPolicy::resolve(false, Some(false)), ResetPolicy::Keep);
    }
}
