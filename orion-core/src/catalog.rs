//! Static POS data: product catalog, checkout lanes and the open cart.

use crate::cart::CartLine;
use crate::errors::CartError;

/// A product card in the POS catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub sku: &'static str,
    pub price: f64,
    pub category: &'static str,
}

/// A checkout lane summary on the POS side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosLane {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PRODUCTS: [Product; 6] = [
    Product {
        name: "Aurora Headphones",
        sku: "AUR-512",
        price: 249.0,
        category: "Audio",
    },
    Product {
        name: "Nimbus VR Pack",
        sku: "NMB-904",
        price: 699.0,
        category: "Immersive",
    },
    Product {
        name: "Helio Watch 4",
        sku: "HEL-410",
        price: 329.0,
        category: "Wearables",
    },
    Product {
        name: "Prism Tablet",
        sku: "PRS-642",
        price: 489.0,
        category: "Productivity",
    },
    Product {
        name: "Vanta Studio Mic",
        sku: "VNT-220",
        price: 189.0,
        category: "Audio",
    },
    Product {
        name: "Flux Drone",
        sku: "FLX-740",
        price: 1299.0,
        category: "Autonomy",
    },
];

pub const POS_LANES: [PosLane; 3] = [
    PosLane {
        label: "Quick serve",
        value: "4 terminals",
    },
    PosLane {
        label: "Line busting",
        value: "Gemini assist",
    },
    PosLane {
        label: "Returns intelligence",
        value: "AI risk review",
    },
];

/// Session label shown above the cart.
pub const CART_SESSION_LABEL: &str = "Session 1048 • Gemini assisted";

const OPEN_CART: [(&str, u32, f64); 3] = [
    ("Aurora Headphones", 2, 249.0),
    ("Helio Watch 4", 1, 329.0),
    ("Flux Drone", 1, 1299.0),
];

/// Build the cart that is open on the POS stage.
pub fn open_cart() -> Result<Vec<CartLine>, CartError> {
    OPEN_CART
        .iter()
        .map(|&(name, quantity, unit_price)| {
            CartLine::new(name, quantity, unit_price)
        })
        .collect()
}

/// Find a catalog product by SKU.
pub fn product_by_sku(sku: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.sku == sku)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::summarize;

    #[test]
    fn given_open_cart_when_built_then_every_line_is_valid() {
        let cart = open_cart().expect("open cart should be valid");
        assert_eq!(cart.len(), 3);
        assert_eq!(cart[0].name(), "Aurora Headphones");
        assert_eq!(cart[0].quantity(), 2);
    }

    #[test]
    fn given_open_cart_when_summarized_then_subtotal_is_2126() {
        let cart = open_cart().expect("open cart should be valid");
        let summary = summarize(&cart);
        assert!((summary.subtotal - 2126.0).abs() < 1e-9);
        assert!((summary.total - 2301.395).abs() < 1e-9);
    }

    #[test]
    fn given_open_cart_when_compared_with_catalog_then_prices_match() {
        let cart = open_cart().expect("open cart should be valid");
        for line in &cart {
            let product = PRODUCTS
                .iter()
                .find(|product| product.name == line.name())
                .expect("cart line should reference a catalog product");
            assert_eq!(product.price, line.unit_price());
        }
    }

    #[test]
    fn given_known_and_unknown_sku_when_looked_up_then_only_known_resolves() {
        assert_eq!(
            product_by_sku("FLX-740").map(|product| product.name),
            Some("Flux Drone")
        );
        assert!(product_by_sku("NOPE-000").is_none());
    }
}
