use orion_core::catalog::{PosLane, Product};
use orion_core::money::{format_amount, format_price};
use orion_core::{CartLine, CartSummary};

/// View model for the POS overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PosViewModel<'a> {
    pub(crate) products: &'static [Product],
    pub(crate) lanes: &'static [PosLane],
    pub(crate) session_label: &'static str,
    pub(crate) cart: &'a [CartLine],
    pub(crate) summary: CartSummary,
    /// Stage opacity, `0.0` hidden to `1.0` fully shown.
    pub(crate) stage_progress: f32,
    pub(crate) stage_animating: bool,
}

/// Display strings for one cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CartRowText {
    pub(crate) quantity: String,
    pub(crate) name: String,
    pub(crate) line_total: String,
}

impl From<&CartLine> for CartRowText {
    fn from(line: &CartLine) -> Self {
        Self {
            quantity: format!("{}×", line.quantity()),
            name: line.name().to_string(),
            line_total: format_price(line.line_total()),
        }
    }
}

/// Labelled subtotal, tax and total amounts.
pub(crate) fn summary_rows(summary: CartSummary) -> [(&'static str, String); 3] {
    [
        ("Subtotal", format_amount(summary.subtotal)),
        ("Tax", format_amount(summary.tax)),
        ("Total", format_amount(summary.total)),
    ]
}

#[cfg(test)]
mod tests {
    use orion_core::summarize;

    use super::*;

    #[test]
    fn given_cart_line_when_formatted_then_quantity_and_total_are_shown() {
        let line = CartLine::new("Aurora Headphones", 2, 249.0)
            .expect("valid cart line");

        let row = CartRowText::from(&line);

        assert_eq!(row.quantity, "2×");
        assert_eq!(row.name, "Aurora Headphones");
        assert_eq!(row.line_total, "$498");
    }

    #[test]
    fn given_demo_cart_summary_when_formatted_then_amounts_have_two_decimals()
    {
        let cart = orion_core::catalog::open_cart().expect("valid open cart");
        let rows = summary_rows(summarize(&cart));

        assert_eq!(rows[0], ("Subtotal", String::from("$2126.00")));
        assert_eq!(rows[1], ("Tax", String::from("$175.40")));
        assert_eq!(rows[2], ("Total", String::from("$2301.39")));
    }

    #[test]
    fn given_2125_subtotal_when_formatted_then_tax_rounds_down_to_cents() {
        let rows = summary_rows(CartSummary::from_subtotal(2125.0));

        assert_eq!(rows[0], ("Subtotal", String::from("$2125.00")));
        assert_eq!(rows[1], ("Tax", String::from("$175.31")));
        assert_eq!(rows[2], ("Total", String::from("$2300.31")));
    }

    #[test]
    fn given_empty_summary_when_formatted_then_all_amounts_are_zero() {
        let rows = summary_rows(CartSummary::default());

        for (_, amount) in rows {
            assert_eq!(amount, "$0.00");
        }
    }
}
