use iced::widget::{Space, column, container, float, row, scrollable, text};
use iced::{Element, Length, alignment};

use super::super::event::{PosEvent, PosIntent};
use super::super::model::PosViewModel;
use super::{cart, catalog};
use crate::components::primitive::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::components::primitive::status_pill::{self, StatusPillProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::theme::{ThemeProps, with_alpha};

const OVERLAY_PADDING: f32 = 32.0;
const SHELL_SPACING: f32 = 28.0;
const SIDE_PANEL_WIDTH: f32 = 300.0;
const SIDE_PANEL_PADDING: f32 = 24.0;
const SIDE_PANEL_RADIUS: f32 = 24.0;
const LANE_PADDING: f32 = 18.0;
const LANE_RADIUS: f32 = 18.0;
const LANE_BACKGROUND_ALPHA: f32 = 0.45;
const LANE_BORDER_ALPHA: f32 = 0.08;
const MAIN_SPACING: f32 = 24.0;
const CLOSE_BUTTON_SIZE: f32 = 40.0;
const CLOSE_ICON_SIZE: f32 = 22.0;
const STAGE_ENTER_SCALE: f32 = 1.04;

/// Props for rendering the POS overlay.
pub(crate) struct PosOverlayProps<'a> {
    pub(crate) vm: PosViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the full-window POS stage.
pub(crate) fn view<'a>(props: PosOverlayProps<'a>) -> Element<'a, PosEvent> {
    let palette = *props.theme.theme.iced_palette();

    let main = column![
        header(&props),
        catalog::view(props.vm.products, props.theme, props.fonts),
        cart::view(&props.vm, props.theme, props.fonts)
    ]
    .spacing(MAIN_SPACING)
    .width(Length::Fill);

    let shell = row![
        side_panel(&props),
        scrollable(main).width(Length::Fill).height(Length::Fill)
    ]
    .spacing(SHELL_SPACING)
    .height(Length::Fill);

    let progress = props.vm.stage_progress.clamp(0.0, 1.0);
    let backdrop = with_alpha(palette.stage_background, progress);

    container(float(shell).scale(stage_scale(progress)))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(OVERLAY_PADDING)
        .style(move |_| container::Style {
            background: Some(backdrop.into()),
            text_color: Some(palette.stage_foreground),
            ..Default::default()
        })
        .into()
}

/// Stage zoom for a transition progress: slightly enlarged while entering,
/// exactly `1.0` once settled.
fn stage_scale(progress: f32) -> f32 {
    1.0 + (STAGE_ENTER_SCALE - 1.0) * (1.0 - progress)
}

fn header<'a>(props: &PosOverlayProps<'a>) -> Element<'a, PosEvent> {
    let palette = props.theme.theme.iced_palette();
    let fonts = props.fonts;

    let titles = column![
        text("Integrated POS Stage")
            .size(fonts.scaled(1.7))
            .font(fonts.heading),
        text(
            "Unified checkout flows with loyalty, financing, and omnichannel inventory."
        )
        .size(fonts.scaled(0.9))
        .color(with_alpha(palette.stage_foreground, 0.7))
    ]
    .spacing(6.0);

    let live = status_pill::view(StatusPillProps {
        label: "Live Sync",
        color: palette.success,
        size: fonts.scaled(0.8),
    });

    let close = icon_button::view(IconButtonProps {
        icon: icons::CLOSE,
        theme: props.theme,
        size: CLOSE_BUTTON_SIZE,
        icon_size: CLOSE_ICON_SIZE,
        variant: IconButtonVariant::Stage,
    })
    .map(|_| PosEvent::Intent(PosIntent::Close));

    row![titles, Space::new().width(Length::Fill), live, close]
        .spacing(16.0)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn side_panel<'a>(props: &PosOverlayProps<'a>) -> Element<'a, PosEvent> {
    let palette = *props.theme.theme.iced_palette();
    let fonts = props.fonts;
    let lane_background =
        with_alpha(palette.stage_background, LANE_BACKGROUND_ALPHA);
    let lane_border = with_alpha(iced::Color::WHITE, LANE_BORDER_ALPHA);

    let lanes = column(props.vm.lanes.iter().map(|lane| {
        container(
            column![
                text(lane.label)
                    .size(fonts.scaled(0.85))
                    .color(palette.stage_muted),
                text(lane.value)
                    .size(fonts.scaled(1.1))
                    .font(fonts.heading)
            ]
            .spacing(6.0),
        )
        .width(Length::Fill)
        .padding(LANE_PADDING)
        .style(move |_| container::Style {
            background: Some(lane_background.into()),
            border: iced::Border {
                width: 1.0,
                color: lane_border,
                radius: iced::border::Radius::from(LANE_RADIUS),
            },
            ..Default::default()
        })
        .into()
    }))
    .spacing(16.0);

    let intro = column![
        text("POS Matrix").size(fonts.scaled(1.4)).font(fonts.heading),
        text(
            "Smart lanes synchronized with ERP, loyalty, and real-time inventory insights."
        )
        .size(fonts.scaled(0.9))
        .color(with_alpha(palette.stage_foreground, 0.8))
    ]
    .spacing(8.0);

    container(column![intro, lanes].spacing(28.0))
        .width(Length::Fixed(SIDE_PANEL_WIDTH))
        .height(Length::Fill)
        .padding(SIDE_PANEL_PADDING)
        .style(move |_| container::Style {
            background: Some(palette.stage_surface.into()),
            border: iced::Border {
                radius: iced::border::Radius::from(SIDE_PANEL_RADIUS),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
