use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const CARD_RADIUS: f32 = 16.0;
const CARD_BORDER_WIDTH: f32 = 1.0;
const CARD_HEADER_SPACING: f32 = 4.0;
const SUBTITLE_SCALE: f32 = 0.72;

/// Surface a card is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CardTone {
    /// Light dashboard surface.
    Surface,
    /// Dark POS stage surface.
    Stage,
}

/// Props for rendering a bordered card.
pub(crate) struct CardProps<'a, Message> {
    pub(crate) content: Element<'a, Message, Theme, iced::Renderer>,
    pub(crate) tone: CardTone,
    pub(crate) padding: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render content inside a rounded, bordered card.
pub(crate) fn view<'a, Message: 'a>(
    props: CardProps<'a, Message>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let (background, border, foreground) = tone_colors(props.tone, &palette);

    container(props.content)
        .width(Length::Fill)
        .padding(props.padding)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            border: iced::Border {
                width: CARD_BORDER_WIDTH,
                color: border,
                radius: iced::border::Radius::from(CARD_RADIUS),
            },
            ..Default::default()
        })
        .into()
}

/// Props for rendering a card title block.
pub(crate) struct CardHeaderProps<'a, Message> {
    pub(crate) title: &'a str,
    pub(crate) subtitle: Option<&'a str>,
    pub(crate) trailing: Option<Element<'a, Message, Theme, iced::Renderer>>,
    pub(crate) title_size: f32,
    pub(crate) title_font: iced::Font,
    pub(crate) muted: iced::Color,
}

/// Render a title with an optional subtitle and trailing element.
pub(crate) fn header<'a, Message: 'a>(
    props: CardHeaderProps<'a, Message>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let mut titles = column![
        text(props.title)
            .size(props.title_size)
            .font(props.title_font)
    ]
    .spacing(CARD_HEADER_SPACING);
    if let Some(subtitle) = props.subtitle {
        titles = titles.push(
            text(subtitle)
                .size(props.title_size * SUBTITLE_SCALE)
                .color(props.muted),
        );
    }

    let mut header = row![titles, Space::new().width(Length::Fill)]
        .align_y(alignment::Vertical::Top)
        .width(Length::Fill);
    if let Some(trailing) = props.trailing {
        header = header.push(trailing);
    }

    header.into()
}

fn tone_colors(
    tone: CardTone,
    palette: &IcedColorPalette,
) -> (iced::Color, iced::Color, iced::Color) {
    match tone {
        CardTone::Surface => {
            (palette.surface, palette.border, palette.foreground)
        },
        CardTone::Stage => (
            palette.stage_surface,
            palette.stage_surface,
            palette.stage_foreground,
        ),
    }
}
