use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::gui::views::preview;
use crate::client::models::app_state::{InputMode, StudioState};
use crate::client::models::messages::Message;

// Consistent color palette with the preview pane
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for card bodies
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26); // Input background
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const ERROR_COLOR: Color = Color::from_rgb(1.0, 0.3, 0.3);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

// Custom container styles
fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn mode_tab<'a>(label: &'a str, active: bool, on_press: Message) -> Button<'a, Message> {
    let text = if active {
        Text::new(label)
            .font(BOLD_FONT)
            .size(16)
            .horizontal_alignment(iced::alignment::Horizontal::Center)
            .style(TEXT_PRIMARY)
    } else {
        Text::new(label)
            .size(16)
            .horizontal_alignment(iced::alignment::Horizontal::Center)
            .style(TEXT_SECONDARY)
    };
    let button = Button::new(Container::new(text).width(Length::Fill).center_x())
        .style(if active {
            iced::theme::Button::Primary
        } else {
            iced::theme::Button::Secondary
        })
        .width(Length::Fill)
        .padding([12, 16]);
    if active {
        button
    } else {
        button.on_press(on_press)
    }
}

pub fn view(state: &StudioState) -> Element<Message> {
    let generate_enabled = state.can_generate();

    // Top logger bar
    let logger_bar = if !state.logger.is_empty() {
        Container::new(logger_view(&state.logger))
            .width(Length::Fill)
            .padding([8, 12, 0, 12])
    } else {
        Container::new(Space::new(Length::Fill, Length::Fixed(0.0))).width(Length::Fill)
    };

    let title = Text::new("Minisite")
        .size(36)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY);
    let subtitle = Text::new("Generate a full static site from a prompt or a reference URL.")
        .size(15)
        .style(TEXT_SECONDARY);

    let tabs = Row::new()
        .spacing(2)
        .push(mode_tab(
            "From Prompt",
            state.mode == InputMode::Prompt,
            Message::ModeSelected(InputMode::Prompt),
        ))
        .push(mode_tab(
            "From URL",
            state.mode == InputMode::Url,
            Message::ModeSelected(InputMode::Url),
        ));

    let input_field: Element<Message> = match state.mode {
        InputMode::Prompt => Container::new(
            TextInput::new(
                "Describe the site you want (e.g., A sleek landing page for a fitness app)",
                &state.prompt_input,
            )
            .on_input(Message::PromptChanged)
            .on_submit(if generate_enabled {
                Message::Generate
            } else {
                Message::None
            })
            .width(Length::Fill)
            .padding(12)
            .size(14),
        )
        .style(iced::theme::Container::Custom(Box::new(input_appearance)))
        .into(),
        InputMode::Url => Container::new(
            TextInput::new("https://example.com", &state.url_input)
                .on_input(Message::UrlChanged)
                .on_submit(if generate_enabled {
                    Message::Generate
                } else {
                    Message::None
                })
                .width(Length::Fill)
                .padding(12)
                .size(14),
        )
        .style(iced::theme::Container::Custom(Box::new(input_appearance)))
        .into(),
    };

    // The trigger is disabled while loading or while the active input is
    // below its minimum length; short input never produces an error message.
    let generate_button = if generate_enabled {
        Button::new(
            Container::new(
                Text::new("Generate")
                    .font(BOLD_FONT)
                    .size(16)
                    .style(TEXT_PRIMARY),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::Generate)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(14)
    } else {
        Button::new(
            Container::new(
                Text::new(if state.loading {
                    "Generating..."
                } else {
                    "Generate"
                })
                .size(16)
                .style(TEXT_SECONDARY),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(14)
    };

    // Download button and ZIP-pending notice are mutually exclusive
    let download_row: Element<Message> = match &state.result {
        Some(result) if result.has_archive() => Button::new(
            Text::new("Download ZIP").size(14).style(TEXT_PRIMARY),
        )
        .on_press(Message::DownloadZip)
        .style(iced::theme::Button::Secondary)
        .padding([10, 16])
        .into(),
        Some(_) => Text::new("ZIP will be available once dependency install completes.")
            .size(13)
            .style(TEXT_SECONDARY)
            .into(),
        None => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    };

    let error_line: Element<Message> = if let Some(error) = &state.error {
        Text::new(error).size(14).style(ERROR_COLOR).into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    let form_card = Container::new(
        Column::new()
            .spacing(16)
            .padding(24)
            .push(tabs)
            .push(input_field)
            .push(
                Row::new()
                    .spacing(12)
                    .align_items(Alignment::Center)
                    .push(generate_button),
            )
            .push(download_row)
            .push(error_line),
    )
    .width(Length::FillPortion(1))
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let preview_card = Container::new(preview::view(state))
        .width(Length::FillPortion(1))
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(16)
        .padding(24)
        .push(logger_bar)
        .push(Column::new().spacing(6).push(title).push(subtitle))
        .push(
            Row::new()
                .spacing(20)
                .width(Length::Fill)
                .height(Length::Fill)
                .push(form_card)
                .push(preview_card),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
