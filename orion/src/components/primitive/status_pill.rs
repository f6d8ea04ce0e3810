use iced::widget::{container, text};
use iced::{Element, Theme};

use crate::shared::ui::theme::with_alpha;

const PILL_RADIUS: f32 = 999.0;
const PILL_BACKGROUND_ALPHA: f32 = 0.14;
const PILL_PADDING: [f32; 2] = [3.0, 10.0];

/// Props for rendering a small rounded status label.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusPillProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) color: iced::Color,
    pub(crate) size: f32,
}

/// Render a pill-shaped label tinted with `color`.
pub(crate) fn view<'a, Message: 'a>(
    props: StatusPillProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let color = props.color;

    container(text(props.label).size(props.size))
        .padding(PILL_PADDING)
        .style(move |_| container::Style {
            background: Some(with_alpha(color, PILL_BACKGROUND_ALPHA).into()),
            text_color: Some(color),
            border: iced::Border {
                radius: iced::border::Radius::from(PILL_RADIUS),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
