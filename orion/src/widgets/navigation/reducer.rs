use iced::Task;
use orion_core::ViewState;

use super::event::{NavigationEffect, NavigationEvent, NavigationIntent};
use super::state::NavigationState;

/// Reduce a navigation intent into a view state transition and effects.
pub(crate) fn reduce(
    state: &mut NavigationState,
    intent: NavigationIntent,
) -> Task<NavigationEvent> {
    let previous = state.apply(intent.into());
    let current = state.view();
    log::debug!("navigation {intent:?}: {previous:?} -> {current:?}");

    match overlay_effect(previous, current) {
        Some(effect) => Task::done(NavigationEvent::Effect(effect)),
        None => Task::none(),
    }
}

/// Effect describing a change of POS overlay visibility, if any.
fn overlay_effect(
    previous: ViewState,
    current: ViewState,
) -> Option<NavigationEffect> {
    let active_section = current.active_section();
    match (previous.pos_overlay_visible(), current.pos_overlay_visible()) {
        (false, true) => {
            Some(NavigationEffect::PosOverlayOpened { active_section })
        },
        (true, false) => {
            Some(NavigationEffect::PosOverlayClosed { active_section })
        },
        _ => None,
    }
}
