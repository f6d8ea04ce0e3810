use thiserror::Error;

/// Errors emitted while building cart lines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    /// A line was created with a quantity of zero.
    #[error("cart line '{name}' must have a quantity of at least 1")]
    ZeroQuantity { name: String },
    /// A line was created with a negative, NaN or infinite unit price.
    #[error("cart line '{name}' has invalid unit price {unit_price}")]
    InvalidUnitPrice { name: String, unit_price: f64 },
}

/// A section identifier that does not name any navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section identifier '{0}'")]
pub struct UnknownSection(pub String);
