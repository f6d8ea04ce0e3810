use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};
use crate::widgets::top_bar::{TopBarEffect, TopBarEvent};

/// Route a top bar event through the widget reducer and map effects.
pub(crate) fn route(app: &mut App, event: TopBarEvent) -> Task<AppEvent> {
    match event {
        TopBarEvent::Intent(intent) => {
            app.widgets.top_bar.reduce(intent).map(AppEvent::TopBar)
        },
        TopBarEvent::Effect(effect) => Task::done(map_effect(effect)),
    }
}

/// Translate a top bar effect into the app event it triggers.
fn map_effect(effect: TopBarEffect) -> AppEvent {
    match effect {
        TopBarEffect::LaunchPosRequested => AppEvent::Navigation(
            NavigationEvent::Intent(NavigationIntent::OpenPosOverlay),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsData;
    use crate::widgets::top_bar::TopBarIntent;

    #[test]
    fn given_launch_pos_effect_when_mapped_then_navigation_opens_overlay() {
        let event = map_effect(TopBarEffect::LaunchPosRequested);

        assert!(matches!(
            event,
            AppEvent::Navigation(NavigationEvent::Intent(
                NavigationIntent::OpenPosOverlay
            ))
        ));
    }

    #[test]
    fn given_launch_pos_effect_when_dispatched_then_section_is_kept() {
        let mut app = App::with_settings(&SettingsData::default());

        let _ = app.update(map_effect(TopBarEffect::LaunchPosRequested));

        let vm = app.widgets.navigation.vm();
        assert!(vm.pos_overlay_visible);
        assert_eq!(vm.active_section, orion_core::Section::Overview);
    }

    #[test]
    fn given_search_intent_when_routed_then_overlay_stays_hidden() {
        let mut app = App::with_settings(&SettingsData::default());

        let _ = route(
            &mut app,
            TopBarEvent::Intent(TopBarIntent::SearchChanged(String::from(
                "pos",
            ))),
        );

        assert!(!app.widgets.navigation.vm().pos_overlay_visible);
        assert_eq!(app.widgets.top_bar.vm().search_query, "pos");
    }
}
