use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};
use orion_core::catalog::Product;
use orion_core::money::format_price;

use super::super::event::{PosEvent, PosIntent};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, with_alpha};

const CATALOG_COLUMNS: usize = 3;
const CATALOG_SPACING: f32 = 16.0;
const PRODUCT_CARD_HEIGHT: f32 = 150.0;
const PRODUCT_CARD_PADDING: f32 = 18.0;
const PRODUCT_CARD_RADIUS: f32 = 20.0;
const PRODUCT_HOVER_ALPHA: f32 = 0.28;

/// Render the product grid.
pub(super) fn view<'a>(
    products: &'static [Product],
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, PosEvent> {
    let palette = *theme.theme.iced_palette();

    column(products.chunks(CATALOG_COLUMNS).map(|chunk| {
        row(chunk
            .iter()
            .map(|product| product_card(product, &palette, fonts)))
        .spacing(CATALOG_SPACING)
        .width(Length::Fill)
        .into()
    }))
    .spacing(CATALOG_SPACING)
    .into()
}

fn product_card<'a>(
    product: &'static Product,
    palette: &IcedColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, PosEvent> {
    let background = palette.stage_surface;
    let hover = with_alpha(palette.primary, PRODUCT_HOVER_ALPHA);
    let foreground = palette.stage_foreground;

    let content = column![
        text(product.category)
            .size(fonts.scaled(0.8))
            .color(with_alpha(palette.stage_foreground, 0.7)),
        text(product.name).size(fonts.scaled(1.2)).font(fonts.heading),
        text(product.sku)
            .size(fonts.scaled(0.9))
            .color(palette.stage_muted),
        container(
            text(format_price(product.price))
                .size(fonts.scaled(1.1))
                .font(fonts.heading)
        )
        .height(Length::Fill)
        .align_y(iced::alignment::Vertical::Bottom)
    ]
    .spacing(6.0);

    button(content)
        .on_press(PosEvent::Intent(PosIntent::ProductPressed {
            sku: product.sku,
        }))
        .width(Length::FillPortion(1))
        .height(Length::Fixed(PRODUCT_CARD_HEIGHT))
        .padding(PRODUCT_CARD_PADDING)
        .style(move |_, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => hover,
                _ => background,
            };

            button::Style {
                background: Some(background.into()),
                text_color: foreground,
                border: iced::Border {
                    radius: iced::border::Radius::from(PRODUCT_CARD_RADIUS),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
