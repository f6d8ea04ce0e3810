use iced::widget::{column, container, row, text};
use iced::{Element, Length, alignment};
use orion_core::dashboard::Kpi;

use super::DashboardProps;
use crate::components::primitive::card::{
    self, CardHeaderProps, CardProps, CardTone,
};
use crate::components::primitive::icon::{self, IconProps};
use crate::components::primitive::progress_bar::{self, ProgressBarProps};
use crate::shared::ui::icons;
use crate::shared::ui::theme::IcedColorPalette;
use crate::widgets::dashboard::model::trend_style;

const HERO_PADDING: f32 = 28.0;
const HERO_SPACING: f32 = 24.0;
const KPI_PADDING: f32 = 20.0;
const KPI_SPACING: f32 = 16.0;
const KPI_VALUE_SCALE: f32 = 2.0;
const TREND_ICON_SIZE: f32 = 18.0;
const CHIP_ICON_SIZE: f32 = 18.0;
const CHIP_PADDING: [f32; 2] = [8.0, 14.0];
const CHIP_RADIUS: f32 = 999.0;

/// Render the command center card with the KPI grid.
pub(super) fn view<'a, Message: 'a>(
    props: DashboardProps<'a>,
) -> Element<'a, Message> {
    let palette = *props.theme.theme.iced_palette();
    let fonts = props.fonts;

    let header = card::header(CardHeaderProps {
        title: "Enterprise Command Center",
        subtitle: Some(
            "Unified oversight for finance, operations, inventory, and empowered POS.",
        ),
        trailing: Some(insights_chip(&palette, fonts.scaled(0.85))),
        title_size: fonts.scaled(1.6),
        title_font: fonts.heading,
        muted: palette.muted,
    });

    let kpis = row(props.vm.kpis.iter().map(|kpi| kpi_card(kpi, props)))
        .spacing(KPI_SPACING)
        .width(Length::Fill);

    card::view(CardProps {
        content: column![header, kpis].spacing(HERO_SPACING).into(),
        tone: CardTone::Surface,
        padding: HERO_PADDING,
        theme: props.theme,
    })
}

fn insights_chip<'a, Message: 'a>(
    palette: &IcedColorPalette,
    size: f32,
) -> Element<'a, Message> {
    let foreground = palette.primary;
    let background = palette.primary_soft;

    container(
        row![
            icon::view(IconProps {
                icon: icons::SPARKLE,
                size: CHIP_ICON_SIZE,
                color: foreground,
            }),
            text("Gemini Insights Active").size(size)
        ]
        .spacing(8.0)
        .align_y(alignment::Vertical::Center),
    )
    .padding(CHIP_PADDING)
    .style(move |_| container::Style {
        background: Some(background.into()),
        text_color: Some(foreground),
        border: iced::Border {
            radius: iced::border::Radius::from(CHIP_RADIUS),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

fn kpi_card<'a, Message: 'a>(
    kpi: &'static Kpi,
    props: DashboardProps<'a>,
) -> Element<'a, Message> {
    let palette = *props.theme.theme.iced_palette();
    let fonts = props.fonts;
    let (trend_icon, trend_color) = trend_style(kpi.trend_direction, &palette);

    let trend = row![
        icon::view(IconProps {
            icon: trend_icon,
            size: TREND_ICON_SIZE,
            color: trend_color,
        }),
        text(kpi.trend)
            .size(fonts.scaled(0.85))
            .color(trend_color)
    ]
    .spacing(2.0)
    .align_y(alignment::Vertical::Center);

    let header = card::header(CardHeaderProps {
        title: kpi.title,
        subtitle: Some(kpi.subtitle),
        trailing: Some(trend.into()),
        title_size: fonts.scaled(1.0),
        title_font: fonts.heading,
        muted: palette.muted,
    });

    let value = text(kpi.value)
        .size(fonts.scaled(KPI_VALUE_SCALE))
        .font(fonts.heading);

    let progress = progress_bar::view(ProgressBarProps {
        percent: kpi.progress,
        fill: palette.primary,
        track: palette.primary_soft,
    });

    container(card::view(CardProps {
        content: column![header, value, progress].spacing(14.0).into(),
        tone: CardTone::Surface,
        padding: KPI_PADDING,
        theme: props.theme,
    }))
    .width(Length::FillPortion(1))
    .into()
}
