/// Format an amount as dollars with exactly two decimals, e.g. `$2125.00`.
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Format a price, dropping the decimals for whole amounts, e.g. `$249`.
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("${amount:.0}")
    } else {
        format_amount(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_summary_amounts_when_formatted_then_two_decimals_without_grouping()
    {
        assert_eq!(format_amount(2125.0), "$2125.00");
        assert_eq!(format_amount(175.3125), "$175.31");
        assert_eq!(format_amount(2300.3125), "$2300.31");
        assert_eq!(format_amount(0.0), "$0.00");
    }

    #[test]
    fn given_whole_price_when_formatted_then_decimals_are_dropped() {
        assert_eq!(format_price(249.0), "$249");
        assert_eq!(format_price(1299.0), "$1299");
    }

    #[test]
    fn given_fractional_price_when_formatted_then_two_decimals_are_kept() {
        assert_eq!(format_price(19.5), "$19.50");
    }
}
