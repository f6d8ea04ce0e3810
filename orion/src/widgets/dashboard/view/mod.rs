pub(crate) mod content;
mod footer;
mod hero;
mod panels;

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

use super::model::DashboardViewModel;

/// Props shared by every dashboard section view.
#[derive(Clone, Copy)]
pub(crate) struct DashboardProps<'a> {
    pub(crate) vm: DashboardViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}
