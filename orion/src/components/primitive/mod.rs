pub(crate) mod card;
pub(crate) mod icon;
pub(crate) mod icon_button;
pub(crate) mod progress_bar;
pub(crate) mod status_pill;
