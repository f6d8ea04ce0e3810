use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};
use crate::widgets::pos::{PosEffect, PosEvent};

/// Route a POS event through the widget reducer and map effects.
pub(crate) fn route(app: &mut App, event: PosEvent) -> Task<AppEvent> {
    match event {
        PosEvent::Intent(intent) => {
            app.widgets.pos.reduce(intent).map(AppEvent::Pos)
        },
        PosEvent::Effect(effect) => Task::done(map_effect(effect)),
    }
}

/// Translate a POS effect into the app event it triggers.
fn map_effect(effect: PosEffect) -> AppEvent {
    match effect {
        PosEffect::CloseRequested => AppEvent::Navigation(
            NavigationEvent::Intent(NavigationIntent::ClosePosOverlay),
        ),
    }
}

#[cfg(test)]
mod tests {
    use orion_core::Section;

    use super::*;
    use crate::settings::SettingsData;

    #[test]
    fn given_close_effect_when_mapped_then_navigation_closes_overlay() {
        let event = map_effect(PosEffect::CloseRequested);

        assert!(matches!(
            event,
            AppEvent::Navigation(NavigationEvent::Intent(
                NavigationIntent::ClosePosOverlay
            ))
        ));
    }

    #[test]
    fn given_overlay_opened_from_pos_when_closed_then_section_stays_pos() {
        let mut app = App::with_settings(&SettingsData::default());
        let _ = app.update(AppEvent::Navigation(NavigationEvent::Intent(
            NavigationIntent::SelectSection(Section::Pos),
        )));

        let _ = app.update(map_effect(PosEffect::CloseRequested));

        let vm = app.widgets.navigation.vm();
        assert!(!vm.pos_overlay_visible);
        assert_eq!(vm.active_section, Section::Pos);
    }
}
