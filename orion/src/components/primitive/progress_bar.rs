use iced::widget::{Space, container, row};
use iced::{Element, Length, Theme};

const TRACK_HEIGHT: f32 = 6.0;
const TRACK_RADIUS: f32 = 3.0;

/// Props for rendering a horizontal progress bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProgressBarProps {
    /// Fill percentage, clamped to 0..=100.
    pub(crate) percent: u8,
    pub(crate) fill: iced::Color,
    pub(crate) track: iced::Color,
}

/// Render a rounded track with a filled portion.
pub(crate) fn view<'a, Message: 'a>(
    props: ProgressBarProps,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let (filled, remaining) = portions(props.percent);
    let fill = props.fill;
    let track = props.track;

    let mut bar = row![].width(Length::Fill).height(TRACK_HEIGHT);
    if filled > 0 {
        bar = bar.push(
            container(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(move |_| container::Style {
                    background: Some(fill.into()),
                    border: iced::Border {
                        radius: iced::border::Radius::from(TRACK_RADIUS),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        );
    }
    if remaining > 0 {
        bar = bar.push(
            Space::new()
                .width(Length::FillPortion(remaining))
                .height(Length::Fill),
        );
    }

    container(bar)
        .width(Length::Fill)
        .height(TRACK_HEIGHT)
        .style(move |_| container::Style {
            background: Some(track.into()),
            border: iced::Border {
                radius: iced::border::Radius::from(TRACK_RADIUS),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Split a percentage into filled and remaining layout portions.
fn portions(percent: u8) -> (u16, u16) {
    let filled = u16::from(percent.min(100));
    (filled, 100 - filled)
}
