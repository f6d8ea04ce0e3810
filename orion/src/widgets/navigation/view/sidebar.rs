use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length, alignment};
use orion_core::{NavigationItem, Section};

use super::super::event::{NavigationEvent, NavigationIntent};
use super::super::model::NavigationViewModel;
use crate::components::primitive::icon::{self, IconProps};
use crate::components::primitive::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::components::primitive::status_pill::{self, StatusPillProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, with_alpha};

const SIDEBAR_PADDING: f32 = 20.0;
const SIDEBAR_SECTION_SPACING: f32 = 28.0;
const HEADER_HEIGHT: f32 = 44.0;
const TOGGLE_BUTTON_SIZE: f32 = 36.0;
const TOGGLE_ICON_SIZE: f32 = 22.0;
const LOGO_SIZE: f32 = 26.0;
const BRAND_SPACING: f32 = 10.0;
const NAV_SPACING: f32 = 6.0;
const NAV_ITEM_HEIGHT: f32 = 44.0;
const NAV_ITEM_RADIUS: f32 = 12.0;
const NAV_ITEM_PADDING: [f32; 2] = [0.0, 14.0];
const NAV_ITEM_SPACING: f32 = 12.0;
const NAV_ICON_SIZE: f32 = 20.0;
const NAV_HOVER_ALPHA: f32 = 0.06;

/// Props for rendering the navigation sidebar.
pub(crate) struct SidebarProps<'a> {
    pub(crate) vm: NavigationViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the collapsible navigation sidebar.
pub(crate) fn view<'a>(props: SidebarProps<'a>) -> Element<'a, NavigationEvent> {
    let palette = *props.theme.theme.iced_palette();
    let collapsed = props.vm.sidebar_collapsed;

    let toggle_icon = if collapsed {
        icons::MENU_UNFOLD
    } else {
        icons::MENU_FOLD
    };
    let toggle = icon_button::view(IconButtonProps {
        icon: toggle_icon,
        theme: props.theme,
        size: TOGGLE_BUTTON_SIZE,
        icon_size: TOGGLE_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(|_| NavigationEvent::Intent(NavigationIntent::ToggleSidebar));

    let header: Element<'a, NavigationEvent> = if collapsed {
        container(toggle)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    } else {
        row![
            brand(&palette, props.fonts),
            Space::new().width(Length::Fill),
            toggle
        ]
        .align_y(alignment::Vertical::Center)
        .into()
    };

    let mut nav = column![].spacing(NAV_SPACING);
    if !collapsed {
        nav = nav.push(
            text("Navigation")
                .size(props.fonts.scaled(0.8))
                .color(palette.muted),
        );
    }
    for item in props.vm.items {
        nav = nav.push(nav_item(
            item,
            props.vm.is_active(item.section),
            collapsed,
            &palette,
            props.fonts,
        ));
    }

    let content = column![
        container(header)
            .height(Length::Fixed(HEADER_HEIGHT))
            .align_y(alignment::Vertical::Center),
        nav
    ]
    .spacing(SIDEBAR_SECTION_SPACING);

    container(content)
        .width(Length::Fixed(props.vm.sidebar_width()))
        .height(Length::Fill)
        .padding(SIDEBAR_PADDING)
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

fn brand<'a>(
    palette: &IcedColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, NavigationEvent> {
    let logo = icon::view(IconProps {
        icon: icons::LOGO,
        size: LOGO_SIZE,
        color: palette.primary,
    });

    let name = text("OrionOS")
        .size(fonts.scaled(1.25))
        .font(fonts.heading)
        .wrapping(text::Wrapping::None);
    let badge = status_pill::view(StatusPillProps {
        label: "ERP + POS",
        color: palette.primary,
        size: fonts.scaled(0.7),
    });

    row![logo, column![name, badge].spacing(4.0)]
        .spacing(BRAND_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn nav_item<'a>(
    item: &'static NavigationItem,
    active: bool,
    collapsed: bool,
    palette: &IcedColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, NavigationEvent> {
    let (foreground, background) = item_colors(active, palette);
    let hover = with_alpha(palette.primary, NAV_HOVER_ALPHA);

    let mut content = row![icon::view(IconProps {
        icon: section_icon(item.section),
        size: NAV_ICON_SIZE,
        color: foreground,
    })]
    .spacing(NAV_ITEM_SPACING)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center);

    if !collapsed {
        content = content.push(
            text(item.label)
                .size(fonts.ui.size)
                .wrapping(text::Wrapping::None),
        );
        content = content.push(Space::new().width(Length::Fill));
        if let Some(badge) = item.badge {
            content = content.push(status_pill::view(StatusPillProps {
                label: badge,
                color: palette.success,
                size: fonts.scaled(0.7),
            }));
        }
    }

    let content = container(content).width(Length::Fill).align_x(if collapsed {
        alignment::Horizontal::Center
    } else {
        alignment::Horizontal::Left
    });

    button(content)
        .on_press(NavigationEvent::Intent(NavigationIntent::SelectSection(
            item.section,
        )))
        .width(Length::Fill)
        .height(Length::Fixed(NAV_ITEM_HEIGHT))
        .padding(NAV_ITEM_PADDING)
        .style(move |_, status| {
            let background = match (background, status) {
                (Some(color), _) => Some(color.into()),
                (None, button::Status::Hovered | button::Status::Pressed) => {
                    Some(hover.into())
                },
                (None, _) => None,
            };

            button::Style {
                background,
                text_color: foreground,
                border: iced::Border {
                    radius: iced::border::Radius::from(NAV_ITEM_RADIUS),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

/// Foreground and optional background of a navigation entry.
fn item_colors(
    active: bool,
    palette: &IcedColorPalette,
) -> (iced::Color, Option<iced::Color>) {
    if active {
        (palette.primary, Some(palette.primary_soft))
    } else {
        (palette.muted, None)
    }
}

fn section_icon(section: Section) -> &'static [u8] {
    match section {
        Section::Overview => icons::NAV_OVERVIEW,
        Section::Pos => icons::NAV_POS,
        Section::Supply => icons::NAV_SUPPLY,
        Section::Teams => icons::NAV_TEAMS,
        Section::Analytics => icons::NAV_ANALYTICS,
        Section::Schedule => icons::NAV_SCHEDULE,
        Section::Admin => icons::NAV_ADMIN,
    }
}
