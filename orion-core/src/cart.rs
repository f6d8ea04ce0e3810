use crate::errors::CartError;

/// Flat sales tax applied to every cart.
pub const SALES_TAX_RATE: f64 = 0.0825;

/// A single line of the POS cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    name: String,
    quantity: u32,
    unit_price: f64,
}

impl CartLine {
    /// Build a validated cart line.
    ///
    /// Quantity must be at least 1 and the unit price finite and non-negative.
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Result<Self, CartError> {
        let name = name.into();
        if quantity == 0 {
            return Err(CartError::ZeroQuantity { name });
        }
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(CartError::InvalidUnitPrice { name, unit_price });
        }

        Ok(Self {
            name,
            quantity,
            unit_price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Quantity times unit price.
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Subtotal, tax and total of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartSummary {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl CartSummary {
    /// Derive tax and total from a subtotal.
    pub fn from_subtotal(subtotal: f64) -> Self {
        let tax = subtotal * SALES_TAX_RATE;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// Summarize `lines` into subtotal, tax and total.
pub fn summarize(lines: &[CartLine]) -> CartSummary {
    let subtotal: f64 = lines.iter().map(CartLine::line_total).sum();
    CartSummary::from_subtotal(subtotal)
}
