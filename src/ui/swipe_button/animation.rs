// SPDX-License-Identifier: MPL-2.0
//! Tweening primitives driving the control's cosmetic transitions.
//!
//! Every animated property is an [`Animated`] value. Time is never read from
//! the system clock here: callers pass the current [`Instant`] to
//! [`Animated::advance`], which lets tests replay a transition frame by frame.

use std::time::{Duration, Instant};

/// Timing curve applied to a tween's linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Slow start, fast middle, slow end (cosine curve).
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t ∈ [0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5,
        }
    }
}

/// A single interpolation from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub started_at: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Outcome of advancing an [`Animated`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// No tween attached.
    Idle,
    /// Tween still running.
    Running,
    /// Tween reached its end on this advance. Reported exactly once.
    Completed,
}

/// A property that is either at rest or following a [`Tween`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated {
    value: f32,
    tween: Option<Tween>,
}

impl Animated {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self { value, tween: None }
    }

    /// Current value, as of the last [`advance`](Self::advance).
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Jumps to `value`, dropping any running tween.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.tween = None;
    }

    /// Starts a tween from the current value.
    pub fn animate_to(&mut self, target: f32, now: Instant, duration: Duration, easing: Easing) {
        self.animate_from_to(self.value, target, now, duration, easing);
    }

    /// Starts a tween from an explicit origin, snapping to it immediately.
    pub fn animate_from_to(
        &mut self,
        from: f32,
        target: f32,
        now: Instant,
        duration: Duration,
        easing: Easing,
    ) {
        self.value = from;
        self.tween = Some(Tween::new(from, target, now, duration, easing));
    }

    /// Freezes the value where the running tween currently is.
    pub fn stop(&mut self, now: Instant) {
        if let Some(tween) = self.tween.take() {
            self.value = tween.value_at(now);
        }
    }

    /// Moves the value along its tween.
    pub fn advance(&mut self, now: Instant) -> Progress {
        let Some(tween) = self.tween else {
            return Progress::Idle;
        };
        if tween.is_finished(now) {
            self.value = tween.to;
            self.tween = None;
            Progress::Completed
        } else {
            self.value = tween.value_at(now);
            Progress::Running
        }
    }
}

impl Default for Animated {
    fn default() -> Self {
        Self::new(0.0)
    }
}
