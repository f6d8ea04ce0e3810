pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{TopBarEffect, TopBarEvent, TopBarIntent};
use self::model::{CURRENT_USER, TopBarViewModel};
use self::state::TopBarState;

/// Top bar widget with the search field and the POS launcher.
pub(crate) struct TopBarWidget {
    state: TopBarState,
}

impl TopBarWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: TopBarState::default(),
        }
    }

    /// Reduce a top bar intent into state updates and effects.
    pub(crate) fn reduce(&mut self, intent: TopBarIntent) -> Task<TopBarEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Produce the top bar view model for rendering.
    pub(crate) fn vm(&self) -> TopBarViewModel<'_> {
        TopBarViewModel {
            search_query: self.state.search_query(),
            avatar_initials: orion_core::dashboard::initials(CURRENT_USER),
        }
    }
}
