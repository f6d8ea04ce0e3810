use iced::widget::svg;
use iced::{Element, Length, Theme};

/// Props for rendering a tinted SVG icon.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconProps {
    pub(crate) icon: &'static [u8],
    pub(crate) size: f32,
    pub(crate) color: iced::Color,
}

/// Render an embedded SVG icon tinted with a single color.
pub(crate) fn view<'a, Message: 'a>(
    props: IconProps,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let color = props.color;
    svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, _| svg::Style { color: Some(color) })
        .into()
}
