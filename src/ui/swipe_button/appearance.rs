// SPDX-License-Identifier: MPL-2.0
//! Configurable look of a swipe control.

use crate::config::{
    DEFAULT_ARROW_COLOR, DEFAULT_BACKGROUND_COLOR, DEFAULT_BUTTON_TEXT, DEFAULT_CORNER_RADIUS,
    DEFAULT_TEXT_COLOR, DEFAULT_TEXT_SIZE,
};
use crate::ui::design_tokens::palette;
use iced::Color;

/// Visual attributes the host can configure.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub text: String,
    pub text_color: Color,
    pub background_color: Color,
    /// Chevron tint; the alpha channel is honoured.
    pub arrow_color: Color,
    /// Corner radius of the rest shape.
    pub corner_radius: f32,
    pub text_size: f32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            text: DEFAULT_BUTTON_TEXT.to_string(),
            text_color: DEFAULT_TEXT_COLOR.parse::<Color>().ok().unwrap_or(palette::WHITE),
            background_color: DEFAULT_BACKGROUND_COLOR.parse::<Color>().ok()
                .unwrap_or(palette::PRIMARY_500),
            arrow_color: DEFAULT_ARROW_COLOR.parse::<Color>().ok().unwrap_or(palette::WHITE),
            corner_radius: DEFAULT_CORNER_RADIUS,
            text_size: DEFAULT_TEXT_SIZE,
        }
    }
}

impl Appearance {
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}
