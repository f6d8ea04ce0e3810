use iced::widget::{button, container, svg};
use iced::{Element, Length, alignment};

use crate::shared::ui::theme::{ThemeProps, with_alpha};

const ICON_BUTTON_PADDING: f32 = 0.0;
const ICON_BUTTON_RADIUS: f32 = 10.0;
const HOVER_BACKGROUND_ALPHA: f32 = 0.12;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconButtonVariant {
    /// Muted icon on the light dashboard.
    Standard,
    /// Light icon on the dark POS stage.
    Stage,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

/// Render a square icon-only button.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let (base_color, hover_color) = resolve_variant_colors(
        props.variant,
        palette.muted,
        palette.stage_muted,
        palette.primary,
        palette.stage_foreground,
    );

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => Some(
                    with_alpha(hover_color, HOVER_BACKGROUND_ALPHA).into(),
                ),
                _ => None,
            };

            button::Style {
                background,
                border: iced::Border {
                    radius: iced::border::Radius::from(ICON_BUTTON_RADIUS),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    muted: iced::Color,
    stage_muted: iced::Color,
    accent: iced::Color,
    stage_foreground: iced::Color,
) -> (iced::Color, iced::Color) {
    match variant {
        IconButtonVariant::Standard => (muted, accent),
        IconButtonVariant::Stage => (stage_muted, stage_foreground),
    }
}

#[cfg(test)]
mod tests {
    use super::{IconButtonVariant, resolve_variant_colors};

    #[test]
    fn given_standard_variant_when_resolving_then_hover_uses_accent() {
        let muted = iced::Color::from_rgb(0.1, 0.2, 0.3);
        let stage_muted = iced::Color::from_rgb(0.2, 0.3, 0.4);
        let accent = iced::Color::from_rgb(0.4, 0.5, 0.6);
        let stage_foreground = iced::Color::from_rgb(0.9, 0.9, 0.9);

        let (base, hover) = resolve_variant_colors(
            IconButtonVariant::Standard,
            muted,
            stage_muted,
            accent,
            stage_foreground,
        );

        assert_eq!(base, muted);
        assert_eq!(hover, accent);
    }

    #[test]
    fn given_stage_variant_when_resolving_then_stage_colors_are_used() {
        let muted = iced::Color::from_rgb(0.1, 0.2, 0.3);
        let stage_muted = iced::Color::from_rgb(0.2, 0.3, 0.4);
        let accent = iced::Color::from_rgb(0.4, 0.5, 0.6);
        let stage_foreground = iced::Color::from_rgb(0.9, 0.9, 0.9);

        let (base, hover) = resolve_variant_colors(
            IconButtonVariant::Stage,
            muted,
            stage_muted,
            accent,
            stage_foreground,
        );

        assert_eq!(base, stage_muted);
        assert_eq!(hover, stage_foreground);
    }
}
