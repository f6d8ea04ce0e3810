pub(crate) mod navigation;
pub(crate) mod pos;
pub(crate) mod top_bar;
