// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::message::DemoSlot;
use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::swipe_button::SwipeButton;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, toggler, Column, Container, Row};
use iced::{alignment::Horizontal, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub succeeding: &'a SwipeButton,
    pub failing: &'a SwipeButton,
    pub enabled: bool,
    pub status: &'a str,
    pub colors: ColorScheme,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = text("Swipe to confirm")
        .size(typography::TITLE_MD)
        .color(ctx.colors.text_primary);

    let controls = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(labelled(
            "Succeeds and keeps the check mark",
            ctx.succeeding,
            DemoSlot::Succeeding,
            &ctx.colors,
        ))
        .push(labelled(
            "Fails and resets",
            ctx.failing,
            DemoSlot::Failing,
            &ctx.colors,
        ));

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            toggler(ctx.enabled)
                .label("Enabled")
                .on_toggle(Message::ToggleEnabled),
        )
        .push(button(text("Confirm").size(typography::BODY)).on_press(Message::ConfirmProgrammatically))
        .push(
            button(text("Export diagnostics").size(typography::BODY))
                .on_press(Message::ExportDiagnostics),
        );

    let status = text(ctx.status)
        .size(typography::CAPTION)
        .color(ctx.colors.text_secondary);

    let content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(controls)
        .push(actions)
        .push(status);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn labelled<'a>(
    caption: &'a str,
    swipe: &'a SwipeButton,
    slot: DemoSlot,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            text(caption)
                .size(typography::BODY)
                .color(colors.text_secondary),
        )
        .push(
            swipe
                .view()
                .map(move |message| Message::Swipe { slot, message }),
        )
        .into()
}
