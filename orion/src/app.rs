#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Subscription, Task, Theme};

use crate::settings::{self, SettingsData};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::widgets::Widgets;
use crate::widgets::navigation::NavigationEvent;
use crate::widgets::pos::PosEvent;
use crate::widgets::top_bar::TopBarEvent;

pub(crate) const WINDOW_TITLE: &str = "Orion ERP Suite";
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1440.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 1024.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 700.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Navigation widget
    Navigation(NavigationEvent),
    // Top bar widget
    TopBar(TopBarEvent),
    // POS widget
    Pos(PosEvent),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = settings::load_initial_settings();
        (Self::with_settings(&settings), Task::none())
    }

    /// Build the application from already loaded settings.
    pub(crate) fn with_settings(settings: &SettingsData) -> Self {
        Self {
            theme_manager: ThemeManager::new(
                settings.theme_preset(),
                settings.accent(),
            ),
            fonts: FontsConfig::with_size(settings.font_size()),
            widgets: Widgets::new(),
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from(WINDOW_TITLE)
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use orion_core::Section;

    use super::*;
    use crate::widgets::navigation::NavigationIntent;
    use crate::widgets::pos::PosIntent;

    fn navigation(intent: NavigationIntent) -> AppEvent {
        AppEvent::Navigation(NavigationEvent::Intent(intent))
    }

    #[test]
    fn given_default_settings_when_app_built_then_dashboard_is_shown() {
        let app = App::with_settings(&SettingsData::default());
        let vm = app.widgets.navigation.vm();

        assert_eq!(app.title(), "Orion ERP Suite");
        assert_eq!(vm.active_section, Section::Overview);
        assert!(!vm.sidebar_collapsed);
        assert!(!vm.pos_overlay_visible);
        assert_eq!(app.fonts.ui.size, 14.0);
    }

    #[test]
    fn given_non_pos_section_when_selected_then_overlay_visibility_is_kept() {
        let mut app = App::with_settings(&SettingsData::default());
        let _ = app.update(navigation(NavigationIntent::OpenPosOverlay));

        let _ = app.update(navigation(NavigationIntent::SelectSection(
            Section::Teams,
        )));

        let vm = app.widgets.navigation.vm();
        assert_eq!(vm.active_section, Section::Teams);
        assert!(vm.pos_overlay_visible);
    }

    #[test]
    fn given_closed_overlay_when_reopened_then_it_is_visible() {
        let mut app = App::with_settings(&SettingsData::default());
        let _ = app.update(navigation(NavigationIntent::SelectSection(
            Section::Admin,
        )));

        let _ = app.update(navigation(NavigationIntent::ClosePosOverlay));
        let _ = app.update(navigation(NavigationIntent::OpenPosOverlay));

        assert!(app.widgets.navigation.vm().pos_overlay_visible);
    }

    #[test]
    fn given_pos_intents_when_dispatched_then_view_state_is_untouched() {
        let mut app = App::with_settings(&SettingsData::default());
        let before = app.widgets.navigation.vm();

        let _ = app.update(AppEvent::Pos(PosEvent::Intent(
            PosIntent::ProductPressed { sku: "AUR-512" },
        )));
        let _ = app.update(AppEvent::Pos(PosEvent::Intent(
            PosIntent::CompleteTransaction,
        )));

        let after = app.widgets.navigation.vm();
        assert_eq!(after.active_section, before.active_section);
        assert_eq!(after.pos_overlay_visible, before.pos_overlay_visible);
        assert_eq!(app.widgets.pos.vm().cart.len(), 3);
    }

    #[test]
    fn given_idle_stage_when_app_built_then_no_frame_ticks_are_needed() {
        let app = App::with_settings(&SettingsData::default());

        assert!(!app.widgets.pos.is_stage_animating());
        assert!(!app.widgets.pos.vm().stage_animating);
    }
}
