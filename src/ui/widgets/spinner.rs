// SPDX-License-Identifier: MPL-2.0
//! Rotating arc spinner, drawn into an existing canvas frame.

use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Point};
use std::f32::consts::PI;

/// Line segments used to approximate the half-circle arc.
const ARC_SEGMENTS: u16 = 30;

/// A half-circle arc rotating over a faint full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spinner {
    pub center: Point,
    pub radius: f32,
    /// Rotation angle in radians
    pub rotation: f32,
    pub color: Color,
}

impl Spinner {
    #[must_use]
    pub fn new(center: Point, radius: f32, rotation: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            rotation,
            color,
        }
    }

    /// Start and end angles of the visible arc, measured from the top.
    #[must_use]
    pub fn arc_angles(&self) -> (f32, f32) {
        let start = self.rotation - PI / 2.0;
        (start, start + PI)
    }

    pub fn draw(&self, frame: &mut Frame) {
        if self.radius <= 0.0 || self.color.a <= 0.0 {
            return;
        }

        let track = Path::circle(self.center, self.radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(sizing::SPINNER_STROKE)
                .with_color(Color {
                    a: self.color.a * opacity::SPINNER_TRACK,
                    ..self.color
                }),
        );

        let (start_angle, end_angle) = self.arc_angles();
        let point_at = |angle: f32| {
            Point::new(
                self.center.x + self.radius * angle.cos(),
                self.center.y + self.radius * angle.sin(),
            )
        };

        let mut arc_path = canvas::path::Builder::new();
        arc_path.move_to(point_at(start_angle));
        for i in 1..=ARC_SEGMENTS {
            let t = f32::from(i) / f32::from(ARC_SEGMENTS);
            arc_path.line_to(point_at(start_angle + (end_angle - start_angle) * t));
        }

        frame.stroke(
            &arc_path.build(),
            Stroke::default()
                .with_width(sizing::SPINNER_STROKE)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn arc_starts_at_top_without_rotation() {
        let spinner = Spinner::new(Point::ORIGIN, 10.0, 0.0, Color::WHITE);
        let (start, end) = spinner.arc_angles();
        assert_abs_diff_eq!(start, -PI / 2.0);
        assert_abs_diff_eq!(end - start, PI);
    }

    #[test]
    fn rotation_shifts_arc() {
        let spinner = Spinner::new(Point::ORIGIN, 10.0, PI, Color::WHITE);
        let (start, _) = spinner.arc_angles();
        assert_abs_diff_eq!(start, PI / 2.0);
    }
}
