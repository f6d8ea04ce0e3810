use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{NavigationEffect, NavigationEvent};
use crate::widgets::pos::{PosEvent, PosIntent};

/// Route a navigation event through the widget reducer and map effects.
pub(crate) fn route(app: &mut App, event: NavigationEvent) -> Task<AppEvent> {
    match event {
        NavigationEvent::Intent(intent) => app
            .widgets
            .navigation
            .reduce(intent)
            .map(AppEvent::Navigation),
        NavigationEvent::Effect(effect) => Task::done(map_effect(effect)),
    }
}

/// Translate an overlay visibility change into the POS stage transition.
fn map_effect(effect: NavigationEffect) -> AppEvent {
    let intent = match effect {
        NavigationEffect::PosOverlayOpened { active_section } => {
            log::info!(
                "POS overlay opened (active section: {active_section})"
            );
            PosIntent::StageShown
        },
        NavigationEffect::PosOverlayClosed { active_section } => {
            log::info!(
                "POS overlay closed (active section: {active_section})"
            );
            PosIntent::StageHidden
        },
    };

    AppEvent::Pos(PosEvent::Intent(intent))
}
