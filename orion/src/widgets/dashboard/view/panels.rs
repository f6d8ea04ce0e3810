use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length, alignment};
use orion_core::dashboard::{
    PulseMetric, TeamMember, TimelineEvent, WorkflowSignal, initials,
};

use super::DashboardProps;
use crate::components::primitive::card::{
    self, CardHeaderProps, CardProps, CardTone,
};
use crate::components::primitive::icon::{self, IconProps};
use crate::components::primitive::status_pill::{self, StatusPillProps};
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, with_alpha};
use crate::widgets::dashboard::model::urgency_color;

const PANEL_PADDING: f32 = 24.0;
const PANEL_SPACING: f32 = 20.0;
const PULSE_VALUE_SCALE: f32 = 1.6;
const TIMELINE_DOT_SIZE: f32 = 12.0;
const TIMELINE_BAR_WIDTH: f32 = 2.0;
const TIMELINE_BAR_HEIGHT: f32 = 48.0;
const SIGNAL_PADDING: [f32; 2] = [14.0, 18.0];
const SIGNAL_RADIUS: f32 = 16.0;
const SIGNAL_BACKGROUND_ALPHA: f32 = 0.08;
const SIGNAL_BORDER_ALPHA: f32 = 0.12;
const TEAM_COLUMNS: usize = 2;
const TEAM_CARD_PADDING: f32 = 14.0;
const TEAM_CARD_RADIUS: f32 = 16.0;
const TEAM_AVATAR_SIZE: f32 = 40.0;

fn panel<'a, Message: 'a>(
    props: DashboardProps<'a>,
    title: &'static str,
    subtitle: &'static str,
    trailing: Option<Element<'a, Message>>,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let header = card::header(CardHeaderProps {
        title,
        subtitle: Some(subtitle),
        trailing,
        title_size: props.fonts.scaled(1.3),
        title_font: props.fonts.heading,
        muted: palette.muted,
    });

    card::view(CardProps {
        content: column![header, body].spacing(PANEL_SPACING).into(),
        tone: CardTone::Surface,
        padding: PANEL_PADDING,
        theme: props.theme,
    })
}

/// Operational pulse card with the telemetry metrics.
pub(super) fn pulse<'a, Message: 'a>(
    props: DashboardProps<'a>,
) -> Element<'a, Message> {
    let palette = *props.theme.theme.iced_palette();

    let badge = container(
        row![
            icon::view(IconProps {
                icon: icons::FLASH,
                size: 16.0,
                color: palette.success,
            }),
            status_pill::view(StatusPillProps {
                label: "Hyper-sync",
                color: palette.success,
                size: props.fonts.scaled(0.8),
            })
        ]
        .spacing(6.0)
        .align_y(alignment::Vertical::Center),
    );

    let metrics = row(props
        .vm
        .pulse_metrics
        .iter()
        .map(|metric| pulse_metric(metric, props, &palette)))
    .spacing(16.0)
    .width(Length::Fill);

    panel(
        props,
        "Operational Pulse",
        "Real-time telemetry across regions",
        Some(badge.into()),
        metrics.into(),
    )
}

fn pulse_metric<'a, Message: 'a>(
    metric: &'static PulseMetric,
    props: DashboardProps<'a>,
    palette: &IcedColorPalette,
) -> Element<'a, Message> {
    column![
        text(metric.label)
            .size(props.fonts.scaled(0.9))
            .color(palette.muted),
        text(metric.value)
            .size(props.fonts.scaled(PULSE_VALUE_SCALE))
            .font(props.fonts.heading),
        text(metric.delta)
            .size(props.fonts.scaled(0.85))
            .color(palette.muted)
    ]
    .spacing(10.0)
    .width(Length::FillPortion(1))
    .into()
}

/// Intelligence timeline card.
pub(super) fn timeline<'a, Message: 'a>(
    props: DashboardProps<'a>,
) -> Element<'a, Message> {
    let palette = *props.theme.theme.iced_palette();

    let events = column(
        props
            .vm
            .timeline
            .iter()
            .map(|event| timeline_item(event, props, &palette)),
    )
    .spacing(18.0);

    panel(
        props,
        "Intelligence Timeline",
        "Curated actions from AI copilots",
        None,
        events.into(),
    )
}

fn timeline_item<'a, Message: 'a>(
    event: &'static TimelineEvent,
    props: DashboardProps<'a>,
    palette: &IcedColorPalette,
) -> Element<'a, Message> {
    let dot_color = palette.primary;
    let bar_color = with_alpha(palette.primary, 0.2);

    let marker = column![
        container(Space::new())
            .width(Length::Fixed(TIMELINE_DOT_SIZE))
            .height(Length::Fixed(TIMELINE_DOT_SIZE))
            .style(move |_| container::Style {
                background: Some(dot_color.into()),
                border: iced::Border {
                    radius: iced::border::Radius::from(TIMELINE_DOT_SIZE),
                    ..Default::default()
                },
                ..Default::default()
            }),
        container(Space::new())
            .width(Length::Fixed(TIMELINE_BAR_WIDTH))
            .height(Length::Fixed(TIMELINE_BAR_HEIGHT))
            .style(move |_| container::Style {
                background: Some(bar_color.into()),
                ..Default::default()
            })
    ]
    .spacing(4.0)
    .align_x(alignment::Horizontal::Center);

    let body = column![
        text(event.title)
            .size(props.fonts.ui.size)
            .font(props.fonts.heading),
        text(event.meta)
            .size(props.fonts.scaled(0.8))
            .color(palette.primary),
        text(event.detail)
            .size(props.fonts.scaled(0.9))
            .color(palette.muted)
    ]
    .spacing(4.0)
    .width(Length::Fill);

    row![marker, body].spacing(14.0).into()
}

/// Workflow signals card.
pub(super) fn signals<'a, Message: 'a>(
    props: DashboardProps<'a>,
) -> Element<'a, Message> {
    let palette = *props.theme.theme.iced_palette();

    let rows = column(
        props
            .vm
            .signals
            .iter()
            .map(|signal| signal_row(signal, props, &palette)),
    )
    .spacing(18.0);

    panel(
        props,
        "Workflow Signals",
        "Prioritized by Gemini and Grok",
        None,
        rows.into(),
    )
}

fn signal_row<'a, Message: 'a>(
    signal: &'static WorkflowSignal,
    props: DashboardProps<'a>,
    palette: &IcedColorPalette,
) -> Element<'a, Message> {
    let background = with_alpha(palette.primary, SIGNAL_BACKGROUND_ALPHA);
    let border = with_alpha(palette.primary, SIGNAL_BORDER_ALPHA);

    container(
        row![
            icon::view(IconProps {
                icon: icons::CHECK,
                size: 18.0,
                color: palette.primary,
            }),
            text(signal.label)
                .size(props.fonts.ui.size)
                .font(props.fonts.heading)
                .width(Length::Fill),
            text(signal.state)
                .size(props.fonts.scaled(0.75))
                .color(urgency_color(signal.urgency, palette))
        ]
        .spacing(12.0)
        .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding(SIGNAL_PADDING)
    .style(move |_| container::Style {
        background: Some(background.into()),
        border: iced::Border {
            width: 1.0,
            color: border,
            radius: iced::border::Radius::from(SIGNAL_RADIUS),
        },
        ..Default::default()
    })
    .into()
}

/// Leadership pods card with the team roster.
pub(super) fn leadership<'a, Message: 'a>(
    props: DashboardProps<'a>,
) -> Element<'a, Message> {
    let palette = *props.theme.theme.iced_palette();

    let grid = column(props.vm.team.chunks(TEAM_COLUMNS).map(|members| {
        row(members
            .iter()
            .map(|member| team_card(member, props, &palette)))
        .spacing(12.0)
        .width(Length::Fill)
        .into()
    }))
    .spacing(12.0);

    panel(
        props,
        "Leadership Pods",
        "Adaptive teams with live status",
        None,
        grid.into(),
    )
}

fn team_card<'a, Message: 'a>(
    member: &'static TeamMember,
    props: DashboardProps<'a>,
    palette: &IcedColorPalette,
) -> Element<'a, Message> {
    let avatar_background = palette.primary_soft;
    let avatar_foreground = palette.primary;
    let card_background = palette.background;

    let avatar = container(
        text(initials(member.name))
            .size(props.fonts.scaled(0.9))
            .font(props.fonts.heading),
    )
    .width(Length::Fixed(TEAM_AVATAR_SIZE))
    .height(Length::Fixed(TEAM_AVATAR_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(avatar_background.into()),
        text_color: Some(avatar_foreground),
        border: iced::Border {
            radius: iced::border::Radius::from(TEAM_AVATAR_SIZE / 2.0),
            ..Default::default()
        },
        ..Default::default()
    });

    let details = column![
        text(member.name)
            .size(props.fonts.ui.size)
            .font(props.fonts.heading),
        text(member.role)
            .size(props.fonts.scaled(0.85))
            .color(palette.muted),
        text(member.status)
            .size(props.fonts.scaled(0.8))
            .color(palette.primary)
    ]
    .spacing(6.0);

    container(row![avatar, details].spacing(12.0))
        .width(Length::FillPortion(1))
        .padding(TEAM_CARD_PADDING)
        .style(move |_| container::Style {
            background: Some(card_background.into()),
            border: iced::Border {
                radius: iced::border::Radius::from(TEAM_CARD_RADIUS),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
