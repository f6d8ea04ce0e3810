pub(crate) mod model;
pub(crate) mod view;

use self::model::DashboardViewModel;

/// Read-only dashboard rendering the static enterprise data.
pub(crate) struct DashboardWidget;

impl DashboardWidget {
    /// Produce the dashboard view model for rendering.
    pub(crate) fn vm() -> DashboardViewModel {
        DashboardViewModel::default()
    }
}
