mod cart;
mod catalog;
pub(crate) mod overlay;
