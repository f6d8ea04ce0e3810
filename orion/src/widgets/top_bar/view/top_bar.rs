use iced::widget::{Space, button, container, row, text, text_input};
use iced::{Element, Length, alignment};

use super::super::event::{TopBarEvent, TopBarIntent};
use super::super::model::{SEARCH_PLACEHOLDER, TopBarViewModel};
use crate::components::primitive::icon::{self, IconProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::theme::{ThemeProps, with_alpha};

pub(crate) const TOP_BAR_HEIGHT: f32 = 76.0;
const TOP_BAR_PADDING: [f32; 2] = [16.0, 32.0];
const TOP_BAR_SPACING: f32 = 16.0;
const SEARCH_MAX_WIDTH: f32 = 520.0;
const SEARCH_HEIGHT: f32 = 44.0;
const SEARCH_ICON_SIZE: f32 = 20.0;
const SEARCH_RADIUS: f32 = 14.0;
const SEARCH_ICON_ALPHA: f32 = 0.65;
const LAUNCH_BUTTON_PADDING: [f32; 2] = [10.0, 20.0];
const LAUNCH_BUTTON_RADIUS: f32 = 999.0;
const AVATAR_SIZE: f32 = 42.0;

/// Props for rendering the top bar.
pub(crate) struct TopBarProps<'a> {
    pub(crate) vm: TopBarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the search field, POS launcher and user avatar.
pub(crate) fn view<'a>(props: TopBarProps<'a>) -> Element<'a, TopBarEvent> {
    let palette = *props.theme.theme.iced_palette();

    let search_icon = icon::view(IconProps {
        icon: icons::SEARCH,
        size: SEARCH_ICON_SIZE,
        color: with_alpha(palette.muted, SEARCH_ICON_ALPHA),
    });
    let search_input = text_input(SEARCH_PLACEHOLDER, props.vm.search_query)
        .on_input(|value| {
            TopBarEvent::Intent(TopBarIntent::SearchChanged(value))
        })
        .size(props.fonts.ui.size)
        .padding(0.0)
        .style(move |theme, status| {
            let base = text_input::default(theme, status);
            text_input::Style {
                background: iced::Color::TRANSPARENT.into(),
                border: iced::Border::default(),
                placeholder: palette.muted,
                value: palette.foreground,
                ..base
            }
        });

    let search = container(
        row![search_icon, search_input]
            .spacing(10.0)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .max_width(SEARCH_MAX_WIDTH)
    .height(Length::Fixed(SEARCH_HEIGHT))
    .padding([0.0, 16.0])
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(palette.background.into()),
        border: iced::Border {
            width: 1.0,
            color: palette.border,
            radius: iced::border::Radius::from(SEARCH_RADIUS),
        },
        ..Default::default()
    });

    let launch = button(
        text("Launch POS")
            .size(props.fonts.ui.size)
            .font(props.fonts.heading),
    )
    .on_press(TopBarEvent::Intent(TopBarIntent::LaunchPos))
    .padding(LAUNCH_BUTTON_PADDING)
    .style(move |_, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                palette.accent
            },
            _ => palette.primary,
        };

        button::Style {
            background: Some(background.into()),
            text_color: iced::Color::WHITE,
            border: iced::Border {
                radius: iced::border::Radius::from(LAUNCH_BUTTON_RADIUS),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let avatar = container(
        text(props.vm.avatar_initials)
            .size(props.fonts.ui.size)
            .font(props.fonts.heading),
    )
    .width(Length::Fixed(AVATAR_SIZE))
    .height(Length::Fixed(AVATAR_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(palette.primary_soft.into()),
        text_color: Some(palette.primary),
        border: iced::Border {
            radius: iced::border::Radius::from(AVATAR_SIZE / 2.0),
            ..Default::default()
        },
        ..Default::default()
    });

    let content = row![
        search,
        Space::new().width(Length::Fill),
        row![launch, avatar]
            .spacing(TOP_BAR_SPACING)
            .align_y(alignment::Vertical::Center)
    ]
    .spacing(TOP_BAR_SPACING)
    .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .padding(TOP_BAR_PADDING)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            text_color: Some(palette.foreground),
            border: iced::Border {
                width: 1.0,
                color: palette.border,
                radius: iced::border::Radius::from(0.0),
            },
            ..Default::default()
        })
        .into()
}
