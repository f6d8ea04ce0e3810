use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::{PosEvent, PosIntent};
use super::super::model::{CartRowText, PosViewModel, summary_rows};
use crate::components::primitive::card::{self, CardProps, CardTone};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, with_alpha};

const CART_PADDING: f32 = 24.0;
const CART_SPACING: f32 = 16.0;
const QUANTITY_BADGE_SIZE: f32 = 42.0;
const QUANTITY_BADGE_RADIUS: f32 = 14.0;
const QUANTITY_BADGE_ALPHA: f32 = 0.28;
const DIVIDER_ALPHA: f32 = 0.18;
const CHECKOUT_PADDING: [f32; 2] = [16.0, 20.0];
const CHECKOUT_RADIUS: f32 = 18.0;

/// Render the cart overview with its summary and checkout button.
pub(super) fn view<'a>(
    vm: &PosViewModel<'a>,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, PosEvent> {
    let palette = *theme.theme.iced_palette();
    let secondary = with_alpha(palette.stage_foreground, 0.72);

    let header = row![
        text("Cart Overview")
            .size(fonts.scaled(1.1))
            .font(fonts.heading),
        Space::new().width(Length::Fill),
        text(vm.session_label)
            .size(fonts.scaled(0.85))
            .color(secondary)
    ]
    .align_y(alignment::Vertical::Center);

    let lines = column(
        vm.cart
            .iter()
            .map(|line| cart_row(CartRowText::from(line), &palette, fonts)),
    )
    .spacing(14.0);

    let totals = column(summary_rows(vm.summary).into_iter().map(
        |(label, amount)| {
            let is_total = label == "Total";
            let size = if is_total {
                fonts.scaled(1.1)
            } else {
                fonts.ui.size
            };
            let color = if is_total {
                palette.stage_foreground
            } else {
                secondary
            };
            let font = if is_total {
                fonts.heading
            } else {
                fonts.ui.font_type
            };

            row![
                text(label).size(size).font(font).color(color),
                Space::new().width(Length::Fill),
                text(amount).size(size).font(font).color(color)
            ]
            .into()
        },
    ))
    .spacing(10.0);

    let checkout_background = palette.accent;
    let checkout_hover = palette.primary;
    let checkout = button(
        container(
            text("Complete Transaction")
                .size(fonts.ui.size)
                .font(fonts.heading),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center),
    )
    .on_press(PosEvent::Intent(PosIntent::CompleteTransaction))
    .width(Length::Fill)
    .padding(CHECKOUT_PADDING)
    .style(move |_, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                checkout_hover
            },
            _ => checkout_background,
        };

        button::Style {
            background: Some(background.into()),
            text_color: iced::Color::WHITE,
            border: iced::Border {
                radius: iced::border::Radius::from(CHECKOUT_RADIUS),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    card::view(CardProps {
        content: column![header, lines, totals, checkout]
            .spacing(CART_SPACING)
            .into(),
        tone: CardTone::Stage,
        padding: CART_PADDING,
        theme,
    })
}

fn cart_row<'a>(
    row_text: CartRowText,
    palette: &IcedColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, PosEvent> {
    let badge_background = with_alpha(palette.primary, QUANTITY_BADGE_ALPHA);
    let divider = with_alpha(palette.stage_muted, DIVIDER_ALPHA);

    let quantity = container(
        text(row_text.quantity)
            .size(fonts.ui.size)
            .font(fonts.heading),
    )
    .width(Length::Fixed(QUANTITY_BADGE_SIZE))
    .height(Length::Fixed(QUANTITY_BADGE_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(badge_background.into()),
        border: iced::Border {
            radius: iced::border::Radius::from(QUANTITY_BADGE_RADIUS),
            ..Default::default()
        },
        ..Default::default()
    });

    let details = column![
        text(row_text.name).size(fonts.ui.size).font(fonts.heading),
        text("Smart discount auto-applied")
            .size(fonts.scaled(0.8))
            .color(palette.stage_muted)
    ]
    .spacing(4.0)
    .width(Length::Fill);

    let line = row![
        quantity,
        details,
        text(row_text.line_total)
            .size(fonts.ui.size)
            .font(fonts.heading)
    ]
    .spacing(16.0)
    .align_y(alignment::Vertical::Center);

    column![
        line,
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(1.0))
            .style(move |_| container::Style {
                background: Some(divider.into()),
                ..Default::default()
            })
    ]
    .spacing(12.0)
    .into()
}
