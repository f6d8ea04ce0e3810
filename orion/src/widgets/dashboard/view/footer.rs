use iced::widget::{column, container, row, text};
use iced::{Element, Length};
use orion_core::dashboard::FooterStat;

use super::DashboardProps;
use crate::components::primitive::card::{self, CardProps, CardTone};

const FOOTER_SPACING: f32 = 24.0;
const FOOTER_CARD_PADDING: f32 = 22.0;
const FOOTER_VALUE_SCALE: f32 = 1.8;

/// Render the footer row of summary stats.
pub(super) fn view<'a, Message: 'a>(
    props: DashboardProps<'a>,
) -> Element<'a, Message> {
    row(props
        .vm
        .footer_stats
        .iter()
        .map(|stat| footer_card(stat, props)))
    .spacing(FOOTER_SPACING)
    .width(Length::Fill)
    .into()
}

fn footer_card<'a, Message: 'a>(
    stat: &'static FooterStat,
    props: DashboardProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();

    container(card::view(CardProps {
        content: column![
            text(stat.label)
                .size(props.fonts.scaled(0.85))
                .color(palette.muted),
            text(stat.value)
                .size(props.fonts.scaled(FOOTER_VALUE_SCALE))
                .font(props.fonts.heading),
            text(stat.detail)
                .size(props.fonts.scaled(0.9))
                .color(palette.muted)
        ]
        .spacing(8.0)
        .into(),
        tone: CardTone::Surface,
        padding: FOOTER_CARD_PADDING,
        theme: props.theme,
    }))
    .width(Length::FillPortion(1))
    .into()
}
