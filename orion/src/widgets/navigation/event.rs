use orion_core::{Section, ViewAction};

/// Intent events handled by navigation widget views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationIntent {
    ToggleSidebar,
    SelectSection(Section),
    OpenPosOverlay,
    ClosePosOverlay,
}

impl From<NavigationIntent> for ViewAction {
    fn from(intent: NavigationIntent) -> Self {
        match intent {
            NavigationIntent::ToggleSidebar => ViewAction::ToggleSidebar,
            NavigationIntent::SelectSection(section) => {
                ViewAction::SelectSection(section)
            },
            NavigationIntent::OpenPosOverlay => ViewAction::OpenPosOverlay,
            NavigationIntent::ClosePosOverlay => ViewAction::ClosePosOverlay,
        }
    }
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationEffect {
    /// The POS overlay became visible.
    PosOverlayOpened { active_section: Section },
    /// The POS overlay was hidden.
    PosOverlayClosed { active_section: Section },
}

/// Navigation event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    /// Intent event reduced by the navigation widget.
    Intent(NavigationIntent),
    /// External effect orchestrated by app-level routing.
    Effect(NavigationEffect),
}
