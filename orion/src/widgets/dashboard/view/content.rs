use iced::widget::{column, row};
use iced::{Element, Length};

use super::{DashboardProps, footer, hero, panels};

const CONTENT_PADDING: f32 = 32.0;
const SECTION_SPACING: f32 = 24.0;
// 12-column grid split 8 / 4.
const PRIMARY_COLUMN_PORTION: u16 = 8;
const SECONDARY_COLUMN_PORTION: u16 = 4;

/// Render the full dashboard body: hero, panel grid and footer stats.
pub(crate) fn view<'a, Message: 'a>(
    props: DashboardProps<'a>,
) -> Element<'a, Message> {
    let primary = column![panels::pulse(props), panels::timeline(props)]
        .spacing(SECTION_SPACING)
        .width(Length::FillPortion(PRIMARY_COLUMN_PORTION));
    let secondary =
        column![panels::signals(props), panels::leadership(props)]
            .spacing(SECTION_SPACING)
            .width(Length::FillPortion(SECONDARY_COLUMN_PORTION));

    column![
        hero::view(props),
        row![primary, secondary].spacing(SECTION_SPACING),
        footer::view(props)
    ]
    .spacing(SECTION_SPACING)
    .padding(CONTENT_PADDING)
    .width(Length::Fill)
    .into()
}
