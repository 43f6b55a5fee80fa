// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing a [`SwipeControl`] and turning mouse and touch
//! input into [`PointerEvent`]s.

use super::state::{RenderState, ResultKind, SwipeControl};
use crate::ui::design_tokens::sizing;
use crate::ui::widgets::spinner::Spinner;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::widget::Action;
use iced::{alignment, mouse, touch, Color, Point, Rectangle, Renderer, Size, Theme};

/// Pointer input in control-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed { x: f32 },
    Moved { x: f32 },
    Released,
}

/// Messages published by the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasMessage {
    Pointer(PointerEvent),
    /// Canvas bounds differ from the size the control was laid out with.
    Resized(Size),
}

/// The pointer currently driving a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePointer {
    #[default]
    None,
    Mouse,
    Finger(touch::Finger),
}

/// Borrowing canvas program for one frame of a [`SwipeControl`].
pub struct SwipeCanvas<'a> {
    control: &'a SwipeControl,
}

impl<'a> SwipeCanvas<'a> {
    #[must_use]
    pub fn new(control: &'a SwipeControl) -> Self {
        Self { control }
    }
}

impl canvas::Program<CanvasMessage> for SwipeCanvas<'_> {
    type State = ActivePointer;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<CanvasMessage>> {
        // Sizes are reported from non-input events only so no press is dropped
        let is_input = matches!(event, iced::Event::Mouse(_) | iced::Event::Touch(_));
        if !is_input && self.control.size() != Some(bounds.size()) {
            return Some(Action::publish(CanvasMessage::Resized(bounds.size())));
        }

        let pointer = match (event, *state) {
            (
                iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
                ActivePointer::None,
            ) => {
                let position = cursor.position_in(bounds)?;
                if !self.control.is_interactive() {
                    return None;
                }
                *state = ActivePointer::Mouse;
                PointerEvent::Pressed { x: position.x }
            }
            (iced::Event::Mouse(mouse::Event::CursorMoved { position }), ActivePointer::Mouse) => {
                PointerEvent::Moved {
                    x: position.x - bounds.x,
                }
            }
            (
                iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
                ActivePointer::Mouse,
            ) => {
                *state = ActivePointer::None;
                PointerEvent::Released
            }
            (
                iced::Event::Touch(touch::Event::FingerPressed { id, position }),
                ActivePointer::None,
            ) => {
                if !bounds.contains(*position) || !self.control.is_interactive() {
                    return None;
                }
                *state = ActivePointer::Finger(*id);
                PointerEvent::Pressed {
                    x: position.x - bounds.x,
                }
            }
            (
                iced::Event::Touch(touch::Event::FingerMoved { id, position }),
                ActivePointer::Finger(active),
            ) if *id == active => PointerEvent::Moved {
                x: position.x - bounds.x,
            },
            (
                iced::Event::Touch(
                    touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
                ),
                ActivePointer::Finger(active),
            ) if *id == active => {
                *state = ActivePointer::None;
                PointerEvent::Released
            }
            _ => return None,
        };

        Some(Action::publish(CanvasMessage::Pointer(pointer)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let render = self.control.render_state();
        draw_control(&mut frame, &render);
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if *state == ActivePointer::Mouse {
            mouse::Interaction::Grabbing
        } else if self.control.is_interactive() && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

fn draw_control(frame: &mut Frame, render: &RenderState<'_>) {
    let bounds = frame.size();
    let box_size = render.box_size;
    let top_left = Point::new(
        (bounds.width - box_size.width) / 2.0,
        (bounds.height - box_size.height) / 2.0,
    );
    let radius = render
        .corner_radius
        .min(box_size.width.min(box_size.height) / 2.0)
        .max(0.0);

    let background = Path::rounded_rectangle(top_left, box_size, radius.into());
    frame.fill(&background, with_alpha(render.background, render.opacity));

    if render.text_alpha > 0.0 {
        frame.fill_text(Text {
            content: render.text.to_string(),
            position: Point::new(bounds.width / 2.0, bounds.height / 2.0),
            color: with_alpha(render.text_color, render.text_alpha * render.opacity),
            size: render.text_size.into(),
            align_x: alignment::Horizontal::Center.into(),
            align_y: alignment::Vertical::Center,
            ..Text::default()
        });
    }

    if render.hint_alpha > 0.0 {
        draw_chevrons(frame, render);
    }

    let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
    let indicator_radius =
        (box_size.width.min(box_size.height) / 2.0 - sizing::INDICATOR_INSET).max(0.0);

    if render.spinner_alpha > 0.0 {
        Spinner::new(
            center,
            indicator_radius,
            render.spinner_angle,
            with_alpha(render.text_color, render.spinner_alpha * render.opacity),
        )
        .draw(frame);
    }

    if let Some((kind, alpha)) = render.glyph {
        if alpha > 0.0 {
            draw_glyph(
                frame,
                center,
                indicator_radius,
                kind,
                with_alpha(render.text_color, alpha * render.opacity),
            );
        }
    }
}

/// Two right-pointing chevrons centred in the hint area.
fn draw_chevrons(frame: &mut Frame, render: &RenderState<'_>) {
    let height = frame.height();
    let color = with_alpha(render.arrow_color, render.hint_alpha * render.opacity);
    let arm = (render.hint_width / 6.0).min(height / 4.0);
    let mid_y = height / 2.0;
    let center_x = render.hint_x + render.hint_width / 2.0;

    for tip_x in [center_x, center_x + arm] {
        let chevron = Path::new(|builder| {
            builder.move_to(Point::new(tip_x - arm, mid_y - arm));
            builder.line_to(Point::new(tip_x, mid_y));
            builder.line_to(Point::new(tip_x - arm, mid_y + arm));
        });
        frame.stroke(
            &chevron,
            Stroke::default()
                .with_width(sizing::HINT_STROKE)
                .with_color(color)
                .with_line_cap(canvas::LineCap::Round)
                .with_line_join(canvas::LineJoin::Round),
        );
    }
}

fn draw_glyph(frame: &mut Frame, center: Point, radius: f32, kind: ResultKind, color: Color) {
    let r = radius * 0.7;
    let glyph = match kind {
        ResultKind::Success => Path::new(|builder| {
            builder.move_to(Point::new(center.x - r, center.y));
            builder.line_to(Point::new(center.x - r * 0.3, center.y + r * 0.7));
            builder.line_to(Point::new(center.x + r, center.y - r * 0.6));
        }),
        ResultKind::Failure => Path::new(|builder| {
            builder.move_to(Point::new(center.x - r, center.y - r));
            builder.line_to(Point::new(center.x + r, center.y + r));
            builder.move_to(Point::new(center.x + r, center.y - r));
            builder.line_to(Point::new(center.x - r, center.y + r));
        }),
    };

    frame.stroke(
        &glyph,
        Stroke::default()
            .with_width(sizing::GLYPH_STROKE)
            .with_color(color)
            .with_line_cap(canvas::LineCap::Round),
    );
}
