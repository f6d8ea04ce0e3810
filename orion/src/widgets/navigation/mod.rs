pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;
use orion_core::NAVIGATION_ITEMS;

pub(crate) use self::event::{
    NavigationEffect, NavigationEvent, NavigationIntent,
};
use self::model::NavigationViewModel;
use self::state::NavigationState;

/// Navigation widget owning the sidebar, active section and overlay flag.
pub(crate) struct NavigationWidget {
    state: NavigationState,
}

impl NavigationWidget {
    /// Create the navigation widget with the default view state.
    pub(crate) fn new() -> Self {
        Self {
            state: NavigationState::default(),
        }
    }

    /// Reduce a navigation intent into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        intent: NavigationIntent,
    ) -> Task<NavigationEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Produce the navigation view model for rendering.
    pub(crate) fn vm(&self) -> NavigationViewModel {
        let view = self.state.view();
        NavigationViewModel {
            sidebar_collapsed: view.sidebar_collapsed(),
            active_section: view.active_section(),
            pos_overlay_visible: view.pos_overlay_visible(),
            items: &NAVIGATION_ITEMS,
        }
    }
}
