// SPDX-License-Identifier: MPL-2.0
//! Iced component wrapping a [`SwipeControl`].
//!
//! Follows the "state down, messages up" pattern: the parent forwards
//! [`Message`]s, and [`SwipeButton::update`] reports what the parent should
//! react to as an [`Event`].

use super::canvas::{CanvasMessage, PointerEvent, SwipeCanvas};
use super::state::{ControlEvent, SwipeControl, VisualState};
use crate::ui::design_tokens::sizing;
use iced::widget::Canvas;
use iced::{Element, Length};
use std::time::Instant;

/// Messages handled by a swipe button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Canvas(CanvasMessage),
    Tick(Instant),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Released without confirming.
    Clicked,
    /// Swipe confirmed; the host should start its operation.
    SwipeConfirmed,
    /// Control returned to rest after a reset.
    Reset,
}

/// A swipe control plus the size it is drawn at.
#[derive(Debug)]
pub struct SwipeButton {
    control: SwipeControl,
    width: Length,
    height: Length,
}

impl SwipeButton {
    #[must_use]
    pub fn new(control: SwipeControl) -> Self {
        Self {
            control,
            width: Length::Fixed(sizing::SWIPE_BUTTON_WIDTH),
            height: Length::Fixed(sizing::SWIPE_BUTTON_HEIGHT),
        }
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    #[must_use]
    pub fn control(&self) -> &SwipeControl {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut SwipeControl {
        &mut self.control
    }

    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.control.needs_ticks()
    }

    /// Applies a message at time `now` and summarises what happened.
    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Canvas(CanvasMessage::Resized(size)) => self.control.layout(size, now),
            Message::Canvas(CanvasMessage::Pointer(pointer)) => match pointer {
                PointerEvent::Pressed { x } => {
                    self.control.pointer_down(x, now);
                }
                PointerEvent::Moved { x } => {
                    self.control.pointer_moved(x);
                }
                PointerEvent::Released => {
                    self.control.pointer_up(now);
                }
            },
            Message::Tick(now) => self.control.tick(now),
        }
        self.take_event()
    }

    /// Drains the control's notices into the most significant [`Event`].
    pub fn take_event(&mut self) -> Event {
        summarize(&self.control.drain_events())
    }

    pub fn view(&self) -> Element<'_, Message> {
        let canvas: Element<'_, CanvasMessage> = Canvas::new(SwipeCanvas::new(&self.control))
            .width(self.width)
            .height(self.height)
            .into();
        canvas.map(Message::Canvas)
    }
}

fn summarize(events: &[ControlEvent]) -> Event {
    if events.contains(&ControlEvent::SwipeConfirmed) {
        Event::SwipeConfirmed
    } else if events.contains(&ControlEvent::Clicked) {
        Event::Clicked
    } else if events.iter().any(|event| {
        matches!(
            event,
            ControlEvent::StateChanged {
                from: VisualState::MorphingBack,
                to: VisualState::Idle
            }
        )
    }) {
        Event::Reset
    } else {
        Event::None
    }
}
