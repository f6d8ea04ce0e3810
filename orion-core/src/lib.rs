//! Domain model behind the Orion ERP dashboard.
//!
//! Everything here is GUI-free: navigation sections, the view state and its
//! transitions, cart lines with the summary calculator, currency formatting
//! and the static demonstration data rendered by the desktop app.

pub mod catalog;
pub mod cart;
pub mod dashboard;
mod errors;
pub mod money;
pub mod navigation;
pub mod view_state;

pub use cart::{CartLine, CartSummary, SALES_TAX_RATE, summarize};
pub use errors::{CartError, UnknownSection};
pub use navigation::{NAVIGATION_ITEMS, NavigationItem, Section};
pub use view_state::{ViewAction, ViewState, reduce};
