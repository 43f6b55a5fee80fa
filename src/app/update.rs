// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the demo application.

use super::message::DemoSlot;
use super::{paths, Message};
use crate::diagnostics::DiagnosticsCollector;
use crate::ui::swipe_button::{self, Event as SwipeEvent, SwipeButton};
use iced::Task;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// File name of the exported diagnostics report.
pub const DIAGNOSTICS_FILE: &str = "diagnostics.json";

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub succeeding: &'a mut SwipeButton,
    pub failing: &'a mut SwipeButton,
    pub status: &'a mut String,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub simulated_work: Duration,
}

impl UpdateContext<'_> {
    fn button(&mut self, slot: DemoSlot) -> &mut SwipeButton {
        match slot {
            DemoSlot::Succeeding => &mut *self.succeeding,
            DemoSlot::Failing => &mut *self.failing,
        }
    }
}

/// Forwards a message to one control and reacts to what it reports.
pub fn handle_swipe_message(
    ctx: &mut UpdateContext<'_>,
    slot: DemoSlot,
    message: swipe_button::Message,
    now: Instant,
) -> Task<Message> {
    let event = ctx.button(slot).update(message, now);
    handle_swipe_event(ctx, slot, event)
}

/// Advances every control to `now`.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let tasks: Vec<Task<Message>> = DemoSlot::ALL
        .into_iter()
        .map(|slot| handle_swipe_message(ctx, slot, swipe_button::Message::Tick(now), now))
        .collect();
    Task::batch(tasks)
}

pub fn handle_swipe_event(
    ctx: &mut UpdateContext<'_>,
    slot: DemoSlot,
    event: SwipeEvent,
) -> Task<Message> {
    match event {
        SwipeEvent::None => Task::none(),
        SwipeEvent::Clicked => {
            *ctx.status = format!("{}: released before the threshold", slot.label());
            Task::none()
        }
        SwipeEvent::SwipeConfirmed => {
            *ctx.status = format!("{}: confirmed, working...", slot.label());
            Task::perform(simulate_work(ctx.simulated_work), move |()| {
                Message::WorkFinished(slot)
            })
        }
        SwipeEvent::Reset => {
            *ctx.status = format!("{}: ready again", slot.label());
            Task::none()
        }
    }
}

pub fn handle_toggle_enabled(ctx: &mut UpdateContext<'_>, enabled: bool) {
    ctx.succeeding.control_mut().set_enabled(enabled);
    *ctx.status = if enabled {
        "succeeding: enabled".to_string()
    } else {
        "succeeding: disabled".to_string()
    };
}

pub fn handle_programmatic_confirm(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if !ctx.succeeding.control_mut().perform_swipe(now) {
        *ctx.status = "succeeding: already confirmed".to_string();
        return Task::none();
    }
    let event = ctx.succeeding.take_event();
    handle_swipe_event(ctx, DemoSlot::Succeeding, event)
}

/// Reports the simulated operation's outcome to the control that started it.
///
/// The succeeding control keeps its check mark; the failing one resets.
pub fn handle_work_finished(ctx: &mut UpdateContext<'_>, slot: DemoSlot, now: Instant) {
    let success = slot.succeeds();
    let shown = ctx
        .button(slot)
        .control_mut()
        .show_result(success, Some(!success), now);

    *ctx.status = match (shown, success) {
        (false, _) => format!("{}: result arrived too late", slot.label()),
        (true, true) => format!("{}: succeeded", slot.label()),
        (true, false) => format!("{}: failed, resetting", slot.label()),
    };
}

/// Writes the diagnostics report next to the settings file.
pub fn handle_export_diagnostics(ctx: &mut UpdateContext<'_>) {
    let Some(path) = diagnostics_path() else {
        *ctx.status = "diagnostics: no config directory available".to_string();
        return;
    };

    match ctx.diagnostics.export_to_file(&path) {
        Ok(written) => {
            *ctx.status = format!("diagnostics: written to {}", written.display());
        }
        Err(err) => {
            eprintln!("Failed to export diagnostics: {err}");
            *ctx.status = format!("diagnostics: {err}");
        }
    }
}

fn diagnostics_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|dir| dir.join(DIAGNOSTICS_FILE))
}

async fn simulate_work(duration: Duration) {
    tokio::time::sleep(duration).await;
}
