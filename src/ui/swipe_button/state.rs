// SPDX-License-Identifier: MPL-2.0
//! Swipe control state machine.
//!
//! [`SwipeControl`] owns the gesture session, every animated property and the
//! visual state. It never reads the system clock: each operation that starts
//! or advances an animation takes the current [`Instant`], and the host calls
//! [`SwipeControl::tick`] while [`SwipeControl::needs_ticks`] is true.
//!
//! | State | Left by |
//! |---|---|
//! | `Idle` | first layout (entry hint), pointer down, programmatic confirm |
//! | `EntryAnimating` | both sweep phases finishing, pointer down |
//! | `Tracking` | pointer up |
//! | `SnappingBack` | snap-back finishing, pointer down |
//! | `MorphedWaiting` | host reporting a result |
//! | `ShowingResult` | reset delay elapsing (only when a reset was requested) |
//! | `MorphingBack` | reverse morph finishing |

use super::animation::{Animated, Easing, Progress};
use super::appearance::Appearance;
use super::gesture::{GestureSession, SwipeOutcome, TrackGeometry};
use crate::config::{
    CONTROL_EVENT_CAPACITY, DEFAULT_HINT_WIDTH, DISABLED_OPACITY, ENTRY_SWEEP_DURATION_MS, FADE_DURATION_MS,
    HINT_BACK_DURATION_MS, HINT_INIT_DURATION_MS, MORPHED_CORNER_RADIUS, MORPH_DURATION_MS,
    SPINNER_SPEED_RAD_PER_SEC,
};
use crate::diagnostics::{CircularBuffer, DiagnosticsHandle, UserAction};
use crate::domain::swipe::{ResetDelay, ResetPolicy, SwipeDistanceRatio};
use crate::ui::design_tokens::palette;
use iced::{Color, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// What the control currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    Idle,
    EntryAnimating,
    Tracking,
    SnappingBack,
    MorphedWaiting,
    ShowingResult,
    MorphingBack,
}

impl VisualState {
    /// States in which pointer input is accepted (when enabled).
    #[must_use]
    pub fn accepts_pointer(self) -> bool {
        matches!(
            self,
            VisualState::Idle
                | VisualState::EntryAnimating
                | VisualState::Tracking
                | VisualState::SnappingBack
        )
    }

    /// States in which the control has the morphed (square) shape or is
    /// heading there or back.
    #[must_use]
    pub fn is_morphed(self) -> bool {
        matches!(
            self,
            VisualState::MorphedWaiting | VisualState::ShowingResult | VisualState::MorphingBack
        )
    }
}

/// Which glyph the result shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Success,
    Failure,
}

/// Notices the host can drain after each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// A pointer was released on the control, whatever the outcome.
    Clicked,
    /// A swipe was confirmed, by gesture or programmatically.
    SwipeConfirmed,
    StateChanged { from: VisualState, to: VisualState },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryPhase {
    /// Hint sweeps from rest across the full width.
    Sweep,
    /// Hint slides back in from beyond the left edge.
    SlideIn,
}

/// Every animated property of the control.
#[derive(Debug, Clone, Copy)]
struct Presentation {
    hint_offset: Animated,
    /// Cosmetic translation on top of `hint_offset`, used by the entry hint.
    hint_translation: Animated,
    hint_alpha: Animated,
    text_alpha: Animated,
    spinner_alpha: Animated,
    glyph_alpha: Animated,
    box_width: Animated,
    box_height: Animated,
    corner_radius: Animated,
}

impl Presentation {
    fn new(corner_radius: f32) -> Self {
        Self {
            hint_offset: Animated::new(0.0),
            hint_translation: Animated::new(0.0),
            hint_alpha: Animated::new(1.0),
            text_alpha: Animated::new(1.0),
            spinner_alpha: Animated::new(0.0),
            glyph_alpha: Animated::new(0.0),
            box_width: Animated::new(0.0),
            box_height: Animated::new(0.0),
            corner_radius: Animated::new(corner_radius),
        }
    }

    fn tracks_mut(&mut self) -> [&mut Animated; 9] {
        [
            &mut self.hint_offset,
            &mut self.hint_translation,
            &mut self.hint_alpha,
            &mut self.text_alpha,
            &mut self.spinner_alpha,
            &mut self.glyph_alpha,
            &mut self.box_width,
            &mut self.box_height,
            &mut self.corner_radius,
        ]
    }

    fn is_animating(&self) -> bool {
        [
            self.hint_offset,
            self.hint_translation,
            self.hint_alpha,
            self.text_alpha,
            self.spinner_alpha,
            self.glyph_alpha,
            self.box_width,
            self.box_height,
            self.corner_radius,
        ]
        .iter()
        .any(Animated::is_animating)
    }
}

/// Snapshot of everything needed to draw the control.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState<'a> {
    pub text: &'a str,
    pub text_color: Color,
    pub text_size: f32,
    pub text_alpha: f32,
    /// Background fill, already swapped to the disabled tone when disabled.
    pub background: Color,
    /// Opacity applied on top of every colour.
    pub opacity: f32,
    pub arrow_color: Color,
    pub box_size: Size,
    pub corner_radius: f32,
    /// Left edge of the hint, relative to the control's left edge.
    pub hint_x: f32,
    pub hint_width: f32,
    pub hint_alpha: f32,
    pub spinner_alpha: f32,
    pub spinner_angle: f32,
    pub glyph: Option<(ResultKind, f32)>,
}

/// The swipe-to-confirm control.
pub struct SwipeControl {
    appearance: Appearance,
    ratio: SwipeDistanceRatio,
    reset_delay: ResetDelay,
    hint_width: f32,
    enabled: bool,
    state: VisualState,
    entry_phase: Option<EntryPhase>,
    /// Entry hint waits for the first layout pass.
    entry_pending: bool,
    size: Option<Size>,
    session: Option<GestureSession>,
    presentation: Presentation,
    result: Option<ResultKind>,
    reset_at: Option<Instant>,
    spinner_angle: f32,
    last_tick: Option<Instant>,
    on_swipe_confirm: Option<Box<dyn FnMut()>>,
    events: CircularBuffer<ControlEvent>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl fmt::Debug for SwipeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeControl")
            .field("state", &self.state)
            .field("enabled", &self.enabled)
            .field("ratio", &self.ratio)
            .field("size", &self.size)
            .field("has_callback", &self.on_swipe_confirm.is_some())
            .finish()
    }
}

impl Default for SwipeControl {
    fn default() -> Self {
        Self::new(Appearance::default())
    }
}

impl SwipeControl {
    #[must_use]
    pub fn new(appearance: Appearance) -> Self {
        let presentation = Presentation::new(appearance.corner_radius);
        Self {
            appearance,
            ratio: SwipeDistanceRatio::default(),
            reset_delay: ResetDelay::default(),
            hint_width: DEFAULT_HINT_WIDTH,
            enabled: true,
            state: VisualState::Idle,
            entry_phase: None,
            entry_pending: true,
            size: None,
            session: None,
            presentation,
            result: None,
            reset_at: None,
            spinner_angle: 0.0,
            last_tick: None,
            on_swipe_confirm: None,
            events: CircularBuffer::with_raw_capacity(CONTROL_EVENT_CAPACITY),
            diagnostics: None,
        }
    }

    #[must_use]
    pub fn with_ratio(mut self, ratio: impl Into<SwipeDistanceRatio>) -> Self {
        self.ratio = ratio.into();
        self
    }

    #[must_use]
    pub fn with_hint_width(mut self, hint_width: f32) -> Self {
        if hint_width.is_finite() && hint_width > 0.0 {
            self.hint_width = hint_width;
        }
        self
    }

    #[must_use]
    pub fn with_reset_delay(mut self, delay: ResetDelay) -> Self {
        self.reset_delay = delay;
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.appearance.text = text.into();
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.appearance.text_color = color;
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.appearance.background_color = color;
    }

    /// Sets the rest-shape corner radius; ignored for negative or non-finite values.
    pub fn set_corner_radius(&mut self, radius: f32) {
        if !radius.is_finite() || radius < 0.0 {
            return;
        }
        self.appearance.corner_radius = radius;
        if !self.state.is_morphed() {
            self.presentation.corner_radius.set(radius);
        }
    }

    pub fn set_text_size(&mut self, size: f32) {
        if size.is_finite() && size > 0.0 {
            self.appearance.text_size = size;
        }
    }

    /// Include alpha in the colour for a translucent hint.
    pub fn set_arrow_color(&mut self, color: Color) {
        self.appearance.arrow_color = color;
    }

    /// Sets the confirm threshold; values outside `[0, 1]` are clamped.
    pub fn set_swipe_distance_ratio(&mut self, ratio: f32) {
        self.ratio = SwipeDistanceRatio::new(ratio);
    }

    #[must_use]
    pub fn swipe_distance_ratio(&self) -> f32 {
        self.ratio.value()
    }

    #[must_use]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Registers the confirm notification, replacing any previous one.
    pub fn on_swipe_confirm(&mut self, callback: impl FnMut() + 'static) {
        self.on_swipe_confirm = Some(Box::new(callback));
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> VisualState {
        self.state
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether pointer input is currently handled.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.enabled && self.size.is_some() && self.state.accepts_pointer()
    }

    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    #[must_use]
    pub fn hint_offset(&self) -> f32 {
        self.presentation.hint_offset.value()
    }

    #[must_use]
    pub fn hint_width(&self) -> f32 {
        self.hint_width
    }

    #[must_use]
    pub fn result(&self) -> Option<ResultKind> {
        self.result
    }

    /// Side of the square the control morphs into.
    #[must_use]
    pub fn waiting_side(&self) -> Option<f32> {
        self.size.map(|size| size.width.min(size.height))
    }

    /// Whether the host should keep calling [`tick`](Self::tick).
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.presentation.is_animating()
            || self.reset_at.is_some()
            || self.presentation.spinner_alpha.value() > 0.0
    }

    /// Takes the notices accumulated since the last call.
    ///
    /// Only the most recent notices are retained when the host never drains.
    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        self.events.drain()
    }

    #[must_use]
    pub fn render_state(&self) -> RenderState<'_> {
        let p = &self.presentation;
        let (background, opacity) = if self.enabled {
            (self.appearance.background_color, 1.0)
        } else {
            (palette::DISABLED_GREY, DISABLED_OPACITY)
        };

        RenderState {
            text: &self.appearance.text,
            text_color: self.appearance.text_color,
            text_size: self.appearance.text_size,
            text_alpha: p.text_alpha.value(),
            background,
            opacity,
            arrow_color: self.appearance.arrow_color,
            box_size: Size::new(p.box_width.value(), p.box_height.value()),
            corner_radius: p.corner_radius.value(),
            hint_x: p.hint_offset.value() + p.hint_translation.value(),
            hint_width: self.hint_width,
            hint_alpha: p.hint_alpha.value(),
            spinner_alpha: p.spinner_alpha.value(),
            spinner_angle: self.spinner_angle,
            glyph: self.result.map(|kind| (kind, p.glyph_alpha.value())),
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Records the control's size. The first call starts the entry hint.
    pub fn layout(&mut self, size: Size, now: Instant) {
        if self.size == Some(size) {
            return;
        }
        self.size = Some(size);

        let p = &mut self.presentation;
        if self.state.is_morphed() && self.state != VisualState::MorphingBack {
            let side = size.width.min(size.height);
            p.box_width.set(side);
            p.box_height.set(side);
        } else {
            p.box_width.set(size.width);
            p.box_height.set(size.height);
            if self.state == VisualState::MorphingBack {
                p.corner_radius.set(self.appearance.corner_radius);
            }
        }

        let max_offset = (size.width - self.hint_width).max(0.0);
        if p.hint_offset.value() > max_offset {
            p.hint_offset.set(max_offset);
        }

        if self.entry_pending {
            self.entry_pending = false;
            self.play_entry_hint(now);
        }
    }

    // =========================================================================
    // Pointer Input
    // =========================================================================

    /// Starts a gesture. Returns whether the control took the pointer.
    pub fn pointer_down(&mut self, x: f32, now: Instant) -> bool {
        if !self.is_interactive() || self.state == VisualState::Tracking {
            return false;
        }
        let Some(size) = self.size else {
            return false;
        };

        // A new gesture starts from wherever the hint is right now
        self.entry_phase = None;
        self.presentation.hint_translation.set(0.0);
        self.presentation.hint_offset.stop(now);

        let geometry = TrackGeometry {
            control_width: size.width,
            hint_width: self.hint_width,
        };
        self.session = Some(GestureSession::begin(
            self.presentation.hint_offset.value(),
            geometry,
        ));
        self.log_action(UserAction::PointerDown { x });
        self.transition(VisualState::Tracking);
        true
    }

    /// Follows the pointer. Returns whether the hint moved.
    pub fn pointer_moved(&mut self, x: f32) -> bool {
        if !self.enabled || self.state != VisualState::Tracking {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.track(x) {
            self.presentation.hint_offset.set(session.offset());
            true
        } else {
            false
        }
    }

    /// Ends the gesture and acts on its outcome.
    ///
    /// Returns `None` when no gesture was in progress.
    pub fn pointer_up(&mut self, now: Instant) -> Option<SwipeOutcome> {
        if self.state != VisualState::Tracking {
            return None;
        }
        let session = self.session.take()?;
        let outcome = session.release(self.ratio);

        self.log_action(UserAction::PointerReleased {
            offset: session.offset(),
            outcome,
        });

        match outcome {
            SwipeOutcome::Confirmed => self.confirm(now),
            SwipeOutcome::ReturnToRest => {
                self.transition(VisualState::Idle);
                self.play_entry_hint(now);
            }
            SwipeOutcome::SnapBack => {
                self.presentation.hint_offset.animate_to(
                    0.0,
                    now,
                    Duration::from_millis(HINT_BACK_DURATION_MS),
                    Easing::EaseInOut,
                );
                self.transition(VisualState::SnappingBack);
            }
        }

        self.events.push(ControlEvent::Clicked);
        Some(outcome)
    }

    // =========================================================================
    // Host Operations
    // =========================================================================

    /// Confirms without a gesture, exactly as a completed drag would.
    ///
    /// Ignored (returns `false`) once the control has already morphed.
    pub fn perform_swipe(&mut self, now: Instant) -> bool {
        if self.state.is_morphed() {
            self.log_warning("programmatic confirm ignored: swipe already confirmed");
            return false;
        }
        self.session = None;
        self.log_action(UserAction::ProgrammaticConfirm);
        self.confirm(now);
        true
    }

    /// Shows the outcome of the host's operation.
    ///
    /// `reset` defaults to `!success`: failures morph back after the reset
    /// delay, successes stay on screen. Only valid while waiting.
    pub fn show_result(&mut self, success: bool, reset: Option<bool>, now: Instant) -> bool {
        if self.state != VisualState::MorphedWaiting {
            self.log_warning(format!(
                "result ignored in state {:?}: no confirmed swipe is waiting",
                self.state
            ));
            return false;
        }

        let policy = ResetPolicy::resolve(success, reset);
        self.log_action(UserAction::ResultReported {
            success,
            reset: policy.should_reset(),
        });

        let fade = Duration::from_millis(FADE_DURATION_MS);
        let p = &mut self.presentation;
        p.spinner_alpha.animate_to(0.0, now, fade, Easing::Linear);
        p.glyph_alpha.animate_from_to(0.0, 1.0, now, fade, Easing::Linear);

        self.result = Some(if success {
            ResultKind::Success
        } else {
            ResultKind::Failure
        });
        self.reset_at = policy
            .should_reset()
            .then(|| now + self.reset_delay.as_duration());
        self.transition(VisualState::ShowingResult);
        true
    }

    /// Enables or disables the control.
    ///
    /// Disabling drops an in-progress drag (the hint returns to rest) and
    /// keeps the entry hint from starting again until re-enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.log_action(UserAction::SetEnabled { enabled });

        if !enabled && self.state == VisualState::Tracking {
            self.session = None;
            self.presentation.hint_offset.set(0.0);
            self.transition(VisualState::Idle);
        }
    }

    /// Plays the entry hint: a sweep across the width, then a slide back in
    /// from the left edge. Returns `false` when disabled, not laid out yet or
    /// not idle.
    pub fn play_entry_hint(&mut self, now: Instant) -> bool {
        if !self.enabled || self.state != VisualState::Idle {
            return false;
        }
        let Some(size) = self.size else {
            return false;
        };

        self.presentation.hint_translation.animate_from_to(
            0.0,
            size.width,
            now,
            Duration::from_millis(ENTRY_SWEEP_DURATION_MS),
            Easing::EaseInOut,
        );
        self.entry_phase = Some(EntryPhase::Sweep);
        self.transition(VisualState::EntryAnimating);
        true
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Advances every animation to `now` and chains the transitions that
    /// depend on them.
    pub fn tick(&mut self, now: Instant) {
        let translation = self.presentation.hint_translation.advance(now);
        let offset = self.presentation.hint_offset.advance(now);
        for track in self.presentation.tracks_mut().into_iter().skip(2) {
            track.advance(now);
        }

        if let Some(last) = self.last_tick {
            if self.presentation.spinner_alpha.value() > 0.0 {
                let dt = now.saturating_duration_since(last).as_secs_f32();
                self.spinner_angle =
                    (self.spinner_angle + dt * SPINNER_SPEED_RAD_PER_SEC) % std::f32::consts::TAU;
            }
        }
        self.last_tick = Some(now);

        match self.state {
            VisualState::EntryAnimating if translation == Progress::Completed => {
                match self.entry_phase {
                    Some(EntryPhase::Sweep) => {
                        self.presentation.hint_translation.animate_from_to(
                            -self.hint_width,
                            0.0,
                            now,
                            Duration::from_millis(HINT_INIT_DURATION_MS),
                            Easing::EaseInOut,
                        );
                        self.entry_phase = Some(EntryPhase::SlideIn);
                    }
                    Some(EntryPhase::SlideIn) | None => {
                        self.entry_phase = None;
                        self.transition(VisualState::Idle);
                    }
                }
            }
            VisualState::SnappingBack if offset == Progress::Completed => {
                self.transition(VisualState::Idle);
            }
            VisualState::ShowingResult => {
                if self.reset_at.is_some_and(|at| now >= at) {
                    self.begin_morph_back(now);
                }
            }
            VisualState::MorphingBack if !self.presentation.is_animating() => {
                self.result = None;
                self.transition(VisualState::Idle);
            }
            _ => {}
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn confirm(&mut self, now: Instant) {
        if let Some(callback) = self.on_swipe_confirm.as_mut() {
            callback();
        }
        self.events.push(ControlEvent::SwipeConfirmed);

        self.entry_phase = None;
        let fade = Duration::from_millis(FADE_DURATION_MS);
        let morph = Duration::from_millis(MORPH_DURATION_MS);
        let side = self.waiting_side();

        let p = &mut self.presentation;
        p.hint_translation.set(0.0);
        p.hint_offset.stop(now);
        p.hint_alpha.animate_to(0.0, now, fade, Easing::Linear);
        p.text_alpha.animate_to(0.0, now, fade, Easing::Linear);
        p.spinner_alpha.animate_from_to(0.0, 1.0, now, fade, Easing::Linear);
        if let Some(side) = side {
            p.box_width.animate_to(side, now, morph, Easing::EaseInOut);
            p.box_height.animate_to(side, now, morph, Easing::EaseInOut);
        }
        p.corner_radius
            .animate_to(MORPHED_CORNER_RADIUS, now, morph, Easing::EaseInOut);

        self.spinner_angle = 0.0;
        self.transition(VisualState::MorphedWaiting);
    }

    fn begin_morph_back(&mut self, now: Instant) {
        self.reset_at = None;
        let fade = Duration::from_millis(FADE_DURATION_MS);
        let morph = Duration::from_millis(MORPH_DURATION_MS);
        let size = self.size;
        let rest_radius = self.appearance.corner_radius;

        let p = &mut self.presentation;
        p.glyph_alpha.animate_to(0.0, now, fade, Easing::Linear);
        if let Some(size) = size {
            p.box_width.animate_to(size.width, now, morph, Easing::EaseInOut);
            p.box_height
                .animate_to(size.height, now, morph, Easing::EaseInOut);
        }
        p.corner_radius
            .animate_to(rest_radius, now, morph, Easing::EaseInOut);
        p.hint_offset.set(0.0);
        p.hint_alpha.animate_to(1.0, now, fade, Easing::Linear);
        p.text_alpha.animate_to(1.0, now, fade, Easing::Linear);

        self.transition(VisualState::MorphingBack);
    }

    fn transition(&mut self, to: VisualState) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        self.events.push(ControlEvent::StateChanged { from, to });
        if let Some(handle) = &self.diagnostics {
            handle.log_transition(from, to);
        }
    }

    fn log_action(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }

    fn log_warning(&self, message: impl Into<String>) {
        if let Some(handle) = &self.diagnostics {
            handle.log_warning(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq, PX_EPSILON};
    use std::cell::Cell;
    use std::rc::Rc;

    const WIDTH: f32 = 300.0;
    const HEIGHT: f32 = 56.0;
    const HINT: f32 = 40.0;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// Laid-out control whose entry hint has already finished.
    fn settled(ratio: f32) -> (SwipeControl, Instant) {
        let t0 = Instant::now();
        let mut control = SwipeControl::default()
            .with_ratio(ratio)
            .with_hint_width(HINT);
        control.layout(Size::new(WIDTH, HEIGHT), t0);
        control.tick(t0 + ms(1000));
        control.tick(t0 + ms(1300));
        assert_eq!(control.state(), VisualState::Idle);
        (control, t0 + ms(1300))
    }

    fn drag_to(control: &mut SwipeControl, offset: f32, now: Instant) {
        assert!(control.pointer_down(HINT / 2.0, now));
        control.pointer_moved(HINT / 2.0 + 5.0);
        control.pointer_moved(offset + HINT / 2.0);
    }

    fn count_confirms(events: &[ControlEvent]) -> usize {
        events
            .iter()
            .filter(|e| **e == ControlEvent::SwipeConfirmed)
            .count()
    }

    fn count_entries_into(events: &[ControlEvent], state: VisualState) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, ControlEvent::StateChanged { to, .. } if *to == state))
            .count()
    }

    #[test]
    fn entry_hint_starts_after_first_layout() {
        let t0 = Instant::now();
        let mut control = SwipeControl::default();
        assert_eq!(control.state(), VisualState::Idle);
        assert!(!control.needs_ticks());

        control.layout(Size::new(WIDTH, HEIGHT), t0);
        assert_eq!(control.state(), VisualState::EntryAnimating);
        assert!(control.needs_ticks());
    }

    #[test]
    fn entry_hint_runs_both_phases_then_idles() {
        let t0 = Instant::now();
        let mut control = SwipeControl::default().with_hint_width(HINT);
        control.layout(Size::new(WIDTH, HEIGHT), t0);

        control.tick(t0 + ms(500));
        assert_abs_diff_eq!(control.render_state().hint_x, WIDTH / 2.0, epsilon = 0.01);

        control.tick(t0 + ms(1000));
        assert_eq!(control.state(), VisualState::EntryAnimating);
        assert_abs_diff_eq!(control.render_state().hint_x, -HINT, epsilon = PX_EPSILON);

        control.tick(t0 + ms(1300));
        assert_eq!(control.state(), VisualState::Idle);
        assert_abs_diff_eq!(control.render_state().hint_x, 0.0, epsilon = PX_EPSILON);
        assert!(!control.needs_ticks());
    }

    #[test]
    fn layout_with_same_size_does_not_replay_entry() {
        let (mut control, now) = settled(0.85);
        control.layout(Size::new(WIDTH, HEIGHT), now);
        assert_eq!(control.state(), VisualState::Idle);
    }

    #[test]
    fn pointer_ignored_before_layout() {
        let mut control = SwipeControl::default();
        assert!(!control.pointer_down(10.0, Instant::now()));
        assert_eq!(control.state(), VisualState::Idle);
    }

    #[test]
    fn tap_replays_entry_hint() {
        let (mut control, now) = settled(0.85);
        control.drain_events();

        assert!(control.pointer_down(10.0, now));
        let outcome = control.pointer_up(now + ms(50));

        assert_eq!(outcome, Some(SwipeOutcome::ReturnToRest));
        assert_eq!(control.state(), VisualState::EntryAnimating);
        let events = control.drain_events();
        assert_eq!(count_confirms(&events), 0);
        assert_eq!(count_entries_into(&events, VisualState::SnappingBack), 0);
        assert!(events.contains(&ControlEvent::Clicked));
    }

    #[test]
    fn short_drag_snaps_back() {
        let (mut control, now) = settled(0.85);
        control.drain_events();
        drag_to(&mut control, 100.0, now);
        assert_abs_diff_eq!(control.hint_offset(), 100.0);

        assert_eq!(control.pointer_up(now), Some(SwipeOutcome::SnapBack));
        assert_eq!(control.state(), VisualState::SnappingBack);
        let events = control.drain_events();
        assert!(events.contains(&ControlEvent::Clicked));
        assert_eq!(count_confirms(&events), 0);

        control.tick(now + ms(150));
        assert_abs_diff_eq!(control.hint_offset(), 50.0, epsilon = 0.01);

        control.tick(now + ms(300));
        assert_eq!(control.state(), VisualState::Idle);
        assert_abs_diff_eq!(control.hint_offset(), 0.0);
    }

    #[test]
    fn pointer_down_during_snap_back_freezes_hint() {
        let (mut control, now) = settled(0.85);
        drag_to(&mut control, 100.0, now);
        control.pointer_up(now);
        control.tick(now + ms(150));

        assert!(control.pointer_down(60.0, now + ms(150)));
        assert_eq!(control.state(), VisualState::Tracking);
        assert_abs_diff_eq!(control.hint_offset(), 50.0, epsilon = 0.01);
        assert!(!control.needs_ticks());
    }

    #[test]
    fn threshold_is_strict() {
        // 300 * 0.5 = 150 = 110 + 40
        let (mut control, now) = settled(0.5);
        drag_to(&mut control, 110.0, now);
        assert_eq!(control.pointer_up(now), Some(SwipeOutcome::SnapBack));

        let (mut control, now) = settled(0.5);
        drag_to(&mut control, 111.0, now);
        assert_eq!(control.pointer_up(now), Some(SwipeOutcome::Confirmed));
    }

    #[test]
    fn confirm_fires_callback_once_and_morphs_once() {
        let (mut control, now) = settled(0.85);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        control.on_swipe_confirm(move || counter.set(counter.get() + 1));
        control.drain_events();

        drag_to(&mut control, 250.0, now);
        control.pointer_up(now);

        assert_eq!(calls.get(), 1);
        assert_eq!(control.state(), VisualState::MorphedWaiting);
        assert!(!control.is_interactive());

        // Further input and confirms are ignored while waiting
        assert!(!control.pointer_down(200.0, now));
        assert!(!control.perform_swipe(now));
        assert_eq!(calls.get(), 1);

        let events = control.drain_events();
        assert_eq!(count_confirms(&events), 1);
        assert_eq!(count_entries_into(&events, VisualState::MorphedWaiting), 1);
        assert_eq!(control.result(), None);

        let confirm_at = events
            .iter()
            .position(|e| *e == ControlEvent::SwipeConfirmed)
            .expect("confirm notice");
        let click_at = events
            .iter()
            .position(|e| *e == ControlEvent::Clicked)
            .expect("click notice");
        assert!(confirm_at < click_at);
    }

    #[test]
    fn undrained_notices_stay_bounded() {
        let (mut control, now) = settled(0.85);
        for i in 0..200 {
            let at = now + ms(i * 10);
            control.pointer_down(10.0, at);
            control.pointer_up(at);
        }

        let events = control.drain_events();
        assert_eq!(events.len(), CONTROL_EVENT_CAPACITY);
        assert!(events.contains(&ControlEvent::Clicked));
        assert!(control.drain_events().is_empty());
    }

    #[test]
    fn callback_runs_before_waiting_state() {
        let (mut control, now) = settled(0.85);
        control.drain_events();
        control.on_swipe_confirm(|| {});
        assert!(control.perform_swipe(now));

        let events = control.drain_events();
        let confirm_at = events
            .iter()
            .position(|e| *e == ControlEvent::SwipeConfirmed)
            .expect("confirm notice");
        let waiting_at = events
            .iter()
            .position(|e| {
                matches!(e, ControlEvent::StateChanged { to: VisualState::MorphedWaiting, .. })
            })
            .expect("waiting transition");
        assert!(confirm_at < waiting_at);
    }

    #[test]
    fn missing_callback_is_tolerated() {
        let (mut control, now) = settled(0.85);
        assert!(control.perform_swipe(now));
        assert_eq!(control.state(), VisualState::MorphedWaiting);
    }

    #[test]
    fn morph_reaches_square_with_pill_radius() {
        let (mut control, now) = settled(0.85);
        control.perform_swipe(now);
        control.tick(now + ms(250));
        let halfway = control.render_state();
        assert!(halfway.box_size.width < WIDTH && halfway.box_size.width > HEIGHT);

        control.tick(now + ms(500));
        let render = control.render_state();
        assert_abs_diff_eq!(render.box_size.width, HEIGHT);
        assert_abs_diff_eq!(render.box_size.height, HEIGHT);
        assert_relative_eq!(render.corner_radius, MORPHED_CORNER_RADIUS);
        assert_abs_diff_eq!(render.hint_alpha, 0.0);
        assert_abs_diff_eq!(render.text_alpha, 0.0);
        assert_abs_diff_eq!(render.spinner_alpha, 1.0);
        // Spinner keeps the tick loop alive
        assert!(control.needs_ticks());
    }

    #[test]
    fn spinner_rotates_while_waiting() {
        let (mut control, now) = settled(0.85);
        control.perform_swipe(now);
        control.tick(now + ms(400));
        let before = control.render_state().spinner_angle;
        control.tick(now + ms(500));
        assert!(control.render_state().spinner_angle > before);
    }

    #[test]
    fn success_result_stays_by_default() {
        let (mut control, now) = settled(0.85);
        control.perform_swipe(now);
        control.tick(now + ms(500));

        assert!(control.show_result(true, None, now + ms(600)));
        assert_eq!(control.state(), VisualState::ShowingResult);
        assert_eq!(control.result(), Some(ResultKind::Success));

        control.tick(now + ms(5000));
        assert_eq!(control.state(), VisualState::ShowingResult);
        assert!(!control.needs_ticks());
    }

    #[test]
    fn failure_result_resets_after_delay() {
        let (mut control, now) = settled(0.85);
        control.perform_swipe(now);
        control.tick(now + ms(500));
        let shown_at = now + ms(600);

        assert!(control.show_result(false, None, shown_at));
        assert_eq!(control.result(), Some(ResultKind::Failure));

        control.tick(shown_at + ms(1199));
        assert_eq!(control.state(), VisualState::ShowingResult);

        control.tick(shown_at + ms(1200));
        assert_eq!(control.state(), VisualState::MorphingBack);
        assert!(!control.is_interactive());

        control.tick(shown_at + ms(1200 + MORPH_DURATION_MS));
        assert_eq!(control.state(), VisualState::Idle);
        assert!(control.is_interactive());
        assert_eq!(control.result(), None);

        let render = control.render_state();
        assert_abs_diff_eq!(render.box_size.width, WIDTH);
        assert_abs_diff_eq!(render.box_size.height, HEIGHT);
        assert_abs_diff_eq!(render.hint_x, 0.0);
        assert_abs_diff_eq!(render.hint_alpha, 1.0);
        assert_abs_diff_eq!(render.text_alpha, 1.0);
    }

    #[test]
    fn explicit_reset_flag_overrides_default() {
        let (mut control, now) = settled(0.85);
        control.perform_swipe(now);
        assert!(control.show_result(true, Some(true), now));
        control.tick(now + ms(1200));
        assert_eq!(control.state(), VisualState::MorphingBack);

        let (mut control, now) = settled(0.85);
        control.perform_swipe(now);
        assert!(control.show_result(false, Some(false), now));
        control.tick(now + ms(5000));
        assert_eq!(control.state(), VisualState::ShowingResult);
    }

    #[test]
    fn result_ignored_unless_waiting() {
        let (mut control, now) = settled(0.85);
        assert!(!control.show_result(true, None, now));
        assert_eq!(control.state(), VisualState::Idle);

        control.perform_swipe(now);
        assert!(control.show_result(true, None, now));
        assert!(!control.show_result(false, None, now));
        assert_eq!(control.result(), Some(ResultKind::Success));
    }

    #[test]
    fn disabled_control_ignores_pointer_and_uses_disabled_look() {
        let (mut control, now) = settled(0.85);
        control.set_enabled(false);

        assert!(!control.pointer_down(20.0, now));
        let render = control.render_state();
        assert_eq!(render.background, palette::DISABLED_GREY);
        assert_abs_diff_eq!(render.opacity, DISABLED_OPACITY);

        control.set_enabled(true);
        let render = control.render_state();
        assert_eq!(render.background, control.appearance().background_color);
        assert_abs_diff_eq!(render.opacity, 1.0);
    }

    #[test]
    fn disabling_during_entry_hint_blocks_retrigger() {
        let t0 = Instant::now();
        let mut control = SwipeControl::default().with_hint_width(HINT);
        control.layout(Size::new(WIDTH, HEIGHT), t0);
        assert_eq!(control.state(), VisualState::EntryAnimating);

        control.set_enabled(false);
        control.tick(t0 + ms(1000));
        control.tick(t0 + ms(1300));
        assert_eq!(control.state(), VisualState::Idle);

        assert!(!control.play_entry_hint(t0 + ms(1400)));
        assert!(!control.pointer_down(20.0, t0 + ms(1400)));
        assert_eq!(control.state(), VisualState::Idle);

        control.set_enabled(true);
        assert!(control.play_entry_hint(t0 + ms(1500)));
    }

    #[test]
    fn disabled_before_layout_skips_entry_hint() {
        let mut control = SwipeControl::default();
        control.set_enabled(false);
        control.layout(Size::new(WIDTH, HEIGHT), Instant::now());
        assert_eq!(control.state(), VisualState::Idle);
    }

    #[test]
    fn disabling_mid_drag_returns_hint_to_rest() {
        let (mut control, now) = settled(0.85);
        drag_to(&mut control, 120.0, now);
        control.set_enabled(false);

        assert_eq!(control.state(), VisualState::Idle);
        assert_abs_diff_eq!(control.hint_offset(), 0.0);
        assert_eq!(control.pointer_up(now), None);
    }

    #[test]
    fn ratio_setter_clamps() {
        let mut control = SwipeControl::default();
        control.set_swipe_distance_ratio(1.5);
        assert_eq!(control.swipe_distance_ratio(), 1.0);
        control.set_swipe_distance_ratio(-0.3);
        assert_eq!(control.swipe_distance_ratio(), 0.0);
        control.set_swipe_distance_ratio(0.5);
        assert_eq!(control.swipe_distance_ratio(), 0.5);
    }

    #[test]
    fn configuration_setters_update_render_state() {
        let mut control = SwipeControl::default();
        control.set_text("Pay");
        control.set_text_color(palette::BLACK);
        control.set_arrow_color(palette::ERROR_500);
        control.set_text_size(18.0);
        control.set_text_size(-1.0);
        control.set_corner_radius(8.0);

        let render = control.render_state();
        assert_eq!(render.text, "Pay");
        assert_eq!(render.text_color, palette::BLACK);
        assert_eq!(render.arrow_color, palette::ERROR_500);
        assert_abs_diff_eq!(render.text_size, 18.0);
        assert_abs_diff_eq!(render.corner_radius, 8.0);
    }

    #[test]
    fn diagnostics_record_transitions_and_warnings() {
        let mut collector = DiagnosticsCollector::default();
        let (mut control, now) = settled(0.85);
        control.set_diagnostics(collector.handle().scoped("test"));

        control.perform_swipe(now);
        control.perform_swipe(now);
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert!(kinds.contains(&DiagnosticEventKind::UserAction {
            action: UserAction::ProgrammaticConfirm
        }));
        assert!(kinds.contains(&DiagnosticEventKind::StateTransition {
            from: VisualState::Idle,
            to: VisualState::MorphedWaiting,
        }));
        assert!(kinds
            .iter()
            .any(|k| matches!(k, DiagnosticEventKind::Warning { .. })));
    }

    #[test]
    fn resize_while_waiting_keeps_square() {
        let (mut control, now) = settled(0.85);
        control.perform_swipe(now);
        control.tick(now + ms(500));

        control.layout(Size::new(400.0, 80.0), now + ms(600));
        let render = control.render_state();
        assert_abs_diff_eq!(render.box_size.width, 80.0);
        assert_abs_diff_eq!(render.box_size.height, 80.0);
    }
}
