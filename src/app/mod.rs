// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting two swipe controls.
//!
//! The `App` struct owns the controls, the diagnostics collector and the
//! settings loaded at startup, and translates control events into simulated
//! host work.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{DemoSlot, Flags, Message};
pub use update::DIAGNOSTICS_FILE;

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::ui::design_tokens::palette;
use crate::ui::swipe_button::{SwipeButton, SwipeControl};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Confirm threshold of the succeeding control unless overridden.
pub const DEMO_SUCCEEDING_RATIO: f32 = 0.5;

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 520.0;

/// Root application state.
pub struct App {
    succeeding: SwipeButton,
    failing: SwipeButton,
    enabled: bool,
    theme_mode: ThemeMode,
    simulated_work: Duration,
    diagnostics: DiagnosticsCollector,
    /// Confirmations seen by the succeeding control's callback.
    confirm_count: Rc<Cell<u32>>,
    status: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("succeeding", &self.succeeding.control().state())
            .field("failing", &self.failing.control().state())
            .field("enabled", &self.enabled)
            .field("status", &self.status)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);

        let (config, warning) = config::load();
        let mut app = Self::from_config(&config, flags.ratio);
        if let Some(warning) = warning {
            eprintln!("{warning}");
            app.status = warning;
        }

        (app, Task::none())
    }

    /// Builds the application from already-loaded settings.
    ///
    /// `ratio` overrides the succeeding control's threshold.
    #[must_use]
    pub fn from_config(config: &Config, ratio: Option<f32>) -> Self {
        let diagnostics = DiagnosticsCollector::default();
        let confirm_count = Rc::new(Cell::new(0));

        let mut succeeding = build_control(config, DemoSlot::Succeeding, &diagnostics);
        succeeding.set_swipe_distance_ratio(ratio.unwrap_or(DEMO_SUCCEEDING_RATIO));
        let counter = Rc::clone(&confirm_count);
        succeeding.on_swipe_confirm(move || counter.set(counter.get() + 1));

        let mut failing = build_control(config, DemoSlot::Failing, &diagnostics);
        failing.set_text("Swipe to fail");
        failing.set_background_color(palette::ERROR_500);

        Self {
            succeeding: SwipeButton::new(succeeding),
            failing: SwipeButton::new(failing),
            enabled: true,
            theme_mode: config.general.theme_mode,
            simulated_work: config.demo.simulated_work(),
            diagnostics,
            confirm_count,
            status: "Swipe a control to start".to_string(),
        }
    }

    #[must_use]
    pub fn button(&self, slot: DemoSlot) -> &SwipeButton {
        match slot {
            DemoSlot::Succeeding => &self.succeeding,
            DemoSlot::Failing => &self.failing,
        }
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn confirm_count(&self) -> u32 {
        self.confirm_count.get()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    fn title(&self) -> String {
        "Iced Swipe".to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.succeeding.needs_ticks() || self.failing.needs_ticks(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now())
    }

    /// Applies `message` as if it arrived at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            succeeding: &mut self.succeeding,
            failing: &mut self.failing,
            status: &mut self.status,
            diagnostics: &mut self.diagnostics,
            simulated_work: self.simulated_work,
        };

        let task = match message {
            Message::Swipe { slot, message } => {
                update::handle_swipe_message(&mut ctx, slot, message, now)
            }
            Message::Tick(frame_time) => update::handle_tick(&mut ctx, frame_time),
            Message::ToggleEnabled(enabled) => {
                self.enabled = enabled;
                update::handle_toggle_enabled(&mut ctx, enabled);
                Task::none()
            }
            Message::ConfirmProgrammatically => update::handle_programmatic_confirm(&mut ctx, now),
            Message::WorkFinished(slot) => {
                update::handle_work_finished(&mut ctx, slot, now);
                Task::none()
            }
            Message::ExportDiagnostics => {
                update::handle_export_diagnostics(&mut ctx);
                Task::none()
            }
        };

        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            succeeding: &self.succeeding,
            failing: &self.failing,
            enabled: self.enabled,
            status: &self.status,
            colors: self.theme_mode.colors(),
        })
    }
}

fn build_control(
    config: &Config,
    slot: DemoSlot,
    diagnostics: &DiagnosticsCollector,
) -> SwipeControl {
    let mut control = SwipeControl::new(config.appearance.to_appearance())
        .with_ratio(config.swipe.ratio())
        .with_hint_width(config.swipe.hint_width())
        .with_reset_delay(config.swipe.reset_delay());
    control.set_diagnostics(diagnostics.handle().scoped(slot.label()));
    control
}
