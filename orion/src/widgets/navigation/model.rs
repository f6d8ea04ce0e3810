use orion_core::{NavigationItem, Section};

pub(crate) const SIDEBAR_EXPANDED_WIDTH: f32 = 260.0;
pub(crate) const SIDEBAR_COLLAPSED_WIDTH: f32 = 84.0;

/// View model for the navigation widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavigationViewModel {
    pub(crate) sidebar_collapsed: bool,
    pub(crate) active_section: Section,
    pub(crate) pos_overlay_visible: bool,
    pub(crate) items: &'static [NavigationItem],
}

impl NavigationViewModel {
    pub(crate) fn sidebar_width(&self) -> f32 {
        if self.sidebar_collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_EXPANDED_WIDTH
        }
    }

    pub(crate) fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }
}
