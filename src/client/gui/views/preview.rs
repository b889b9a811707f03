use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::app_state::StudioState;
use crate::client::models::messages::Message;

const HEADER_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const BODY_BG: Color = Color::from_rgb(0.96, 0.96, 0.98);
const BODY_TEXT: Color = Color::from_rgb(0.12, 0.12, 0.16);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

fn header_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(HEADER_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 8.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn body_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BODY_BG)),
        text_color: Some(BODY_TEXT),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 8.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

/// Preview pane: document source in-pane, with fullscreen and external
/// browser presentation controls in the caption row.
pub fn view(state: &StudioState) -> Element<Message> {
    let has_preview = !state.preview_doc.is_empty();

    let fullscreen_button = {
        let button = Button::new(
            Text::new(if state.fullscreen {
                "Exit Full Screen"
            } else {
                "Full Screen"
            })
            .size(13),
        )
        .style(iced::theme::Button::Secondary)
        .padding([6, 10]);
        if has_preview {
            button.on_press(Message::ToggleFullscreen)
        } else {
            button
        }
    };

    let browser_button = {
        let button = Button::new(Text::new("Open in Browser").size(13))
            .style(iced::theme::Button::Secondary)
            .padding([6, 10]);
        if has_preview {
            button.on_press(Message::OpenInBrowser)
        } else {
            button
        }
    };

    let header = Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new("Preview").size(14).style(TEXT_PRIMARY))
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(fullscreen_button)
            .push(browser_button)
            .push(Text::new("index.html").size(13).style(TEXT_SECONDARY)),
    )
    .padding([10, 12])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(header_appearance)));

    let body: Element<Message> = if has_preview {
        Container::new(
            Scrollable::new(
                Text::new(&state.preview_doc)
                    .font(Font::MONOSPACE)
                    .size(12)
                    .style(BODY_TEXT),
            )
            .width(Length::Fill)
            .height(Length::Fill),
        )
        .padding(12)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(body_appearance)))
        .into()
    } else {
        Container::new(
            Text::new("Preview will appear here after generation.")
                .size(14)
                .style(TEXT_SECONDARY),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    };

    Column::new()
        .spacing(12)
        .padding(12)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(body)
        .into()
}
