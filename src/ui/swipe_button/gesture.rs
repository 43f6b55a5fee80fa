// SPDX-License-Identifier: MPL-2.0
//! Drag tracking for the swipe hint.
//!
//! Handles the single-pointer drag that moves the hint along the horizontal
//! axis and classifies the release.

use crate::domain::swipe::SwipeDistanceRatio;
use serde::{Deserialize, Serialize};

/// How a released drag is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeOutcome {
    /// The hint's trailing edge passed the ratio threshold.
    Confirmed,
    /// Released without displacing the hint: replays the entry hint.
    ReturnToRest,
    /// Released short of the threshold: the hint slides back to rest.
    SnapBack,
}

/// Horizontal geometry the tracker works against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub control_width: f32,
    pub hint_width: f32,
}

impl TrackGeometry {
    #[must_use]
    pub fn half_hint(&self) -> f32 {
        self.hint_width / 2.0
    }
}

/// A pointer-down to pointer-up interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    offset: f32,
    geometry: TrackGeometry,
}

impl GestureSession {
    /// Opens a session with the hint at `offset`. The hint does not move yet.
    #[must_use]
    pub fn begin(offset: f32, geometry: TrackGeometry) -> Self {
        Self { offset, geometry }
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Follows the pointer, centring the hint under it when allowed.
    ///
    /// The hint only snaps to the pointer while the pointer stays inside the
    /// track (half a hint away from both edges) and is either on the hint
    /// itself or the hint has already left its rest position. Returns whether
    /// the offset changed.
    pub fn track(&mut self, pointer_x: f32) -> bool {
        let half = self.geometry.half_hint();
        let inside_track =
            pointer_x > half && pointer_x + half < self.geometry.control_width;
        let grabbing = pointer_x < self.offset + self.geometry.hint_width || self.offset != 0.0;

        if inside_track && grabbing {
            let next = pointer_x - half;
            let changed = next != self.offset;
            self.offset = next;
            changed
        } else {
            false
        }
    }

    /// Classifies the release.
    #[must_use]
    pub fn release(&self, ratio: SwipeDistanceRatio) -> SwipeOutcome {
        classify_release(self.offset, self.geometry, ratio)
    }
}

/// Classifies a release at `offset`.
///
/// The threshold comparison is strict: a trailing edge exactly on
/// `control_width * ratio` does not confirm.
#[must_use]
pub fn classify_release(
    offset: f32,
    geometry: TrackGeometry,
    ratio: SwipeDistanceRatio,
) -> SwipeOutcome {
    if offset + geometry.hint_width > ratio.threshold_for(geometry.control_width) {
        SwipeOutcome::Confirmed
    } else if offset <= 0.0 {
        SwipeOutcome::ReturnToRest
    } else {
        SwipeOutcome::SnapBack
    }
}
