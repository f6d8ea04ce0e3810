use crate::navigation::Section;

/// Local view state of the dashboard shell.
///
/// Transitions consume the current value and return the next one, so the
/// owner keeps a single `ViewState` and replaces it after every interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    sidebar_collapsed: bool,
    active_section: Section,
    pos_overlay_visible: bool,
}

/// Interactions that change the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    ToggleSidebar,
    SelectSection(Section),
    OpenPosOverlay,
    ClosePosOverlay,
}

impl ViewState {
    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn pos_overlay_visible(&self) -> bool {
        self.pos_overlay_visible
    }

    /// Flip the sidebar between collapsed and expanded.
    #[must_use]
    pub fn toggle_sidebar(self) -> Self {
        Self {
            sidebar_collapsed: !self.sidebar_collapsed,
            ..self
        }
    }

    /// Make `section` the active one.
    ///
    /// Selecting [`Section::Pos`] also opens the POS overlay. No other section
    /// touches overlay visibility.
    #[must_use]
    pub fn select_section(self, section: Section) -> Self {
        Self {
            active_section: section,
            pos_overlay_visible: self.pos_overlay_visible
                || section.opens_pos_overlay(),
            ..self
        }
    }

    #[must_use]
    pub fn open_pos_overlay(self) -> Self {
        Self {
            pos_overlay_visible: true,
            ..self
        }
    }

    /// Hide the POS overlay. The active section is kept as is.
    #[must_use]
    pub fn close_pos_overlay(self) -> Self {
        Self {
            pos_overlay_visible: false,
            ..self
        }
    }

    /// Apply a single action.
    #[must_use]
    pub fn apply(self, action: ViewAction) -> Self {
        match action {
            ViewAction::ToggleSidebar => self.toggle_sidebar(),
            ViewAction::SelectSection(section) => self.select_section(section),
            ViewAction::OpenPosOverlay => self.open_pos_overlay(),
            ViewAction::ClosePosOverlay => self.close_pos_overlay(),
        }
    }
}

/// Reduce `action` over `state`.
#[must_use]
pub fn reduce(state: ViewState, action: ViewAction) -> ViewState {
    state.apply(action)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn given_fresh_state_when_created_then_defaults_match_startup_layout() {
        let state = ViewState::default();
        assert!(!state.sidebar_collapsed());
        assert_eq!(state.active_section(), Section::Overview);
        assert!(!state.pos_overlay_visible());
    }

    #[test]
    fn given_toggle_twice_when_reduced_then_sidebar_returns_to_original() {
        let state = ViewState::default();
        let once = reduce(state, ViewAction::ToggleSidebar);
        assert!(once.sidebar_collapsed());

        let twice = reduce(once, ViewAction::ToggleSidebar);
        assert_eq!(twice, state);
    }

    #[test]
    fn given_pos_section_when_selected_then_overlay_opens_as_well() {
        let state =
            reduce(ViewState::default(), ViewAction::SelectSection(Section::Pos));

        assert_eq!(state.active_section(), Section::Pos);
        assert!(state.pos_overlay_visible());
    }

    #[test]
    fn given_non_pos_section_when_selected_then_overlay_visibility_is_unchanged()
     {
        let hidden = ViewState::default();
        let visible = ViewState::default().open_pos_overlay();

        for section in Section::ALL.into_iter().filter(|s| *s != Section::Pos) {
            let next = reduce(hidden, ViewAction::SelectSection(section));
            assert_eq!(next.active_section(), section);
            assert!(!next.pos_overlay_visible());

            let next = reduce(visible, ViewAction::SelectSection(section));
            assert_eq!(next.active_section(), section);
            assert!(next.pos_overlay_visible());
        }
    }

    #[test]
    fn given_open_overlay_when_closed_then_active_section_is_kept() {
        let state = ViewState::default()
            .select_section(Section::Pos)
            .close_pos_overlay();

        assert_eq!(state.active_section(), Section::Pos);
        assert!(!state.pos_overlay_visible());
    }

    #[test]
    fn given_close_then_open_when_reduced_then_overlay_is_visible() {
        for section in Section::ALL {
            let state = ViewState::default().select_section(section);
            let state = reduce(state, ViewAction::ClosePosOverlay);
            let state = reduce(state, ViewAction::OpenPosOverlay);
            assert!(state.pos_overlay_visible());
            assert_eq!(state.active_section(), section);
        }
    }

    #[test]
    fn given_sidebar_toggle_when_reduced_then_other_fields_are_untouched() {
        let state = ViewState::default().select_section(Section::Teams);
        let next = state.toggle_sidebar();
        assert_eq!(next.active_section(), Section::Teams);
        assert_eq!(next.pos_overlay_visible(), state.pos_overlay_visible());
    }

    fn section_strategy() -> impl Strategy<Value = Section> {
        (0..Section::ALL.len()).prop_map(|index| Section::ALL[index])
    }

    fn action_strategy() -> impl Strategy<Value = ViewAction> {
        prop_oneof![
            Just(ViewAction::ToggleSidebar),
            Just(ViewAction::OpenPosOverlay),
            Just(ViewAction::ClosePosOverlay),
            section_strategy().prop_map(ViewAction::SelectSection),
        ]
    }

    proptest! {
        /// Toggling the sidebar twice is an involution from any reachable state.
        #[test]
        fn prop_toggle_sidebar_is_involution(
            actions in prop::collection::vec(action_strategy(), 0..32)
        ) {
            let state = actions.into_iter().fold(ViewState::default(), reduce);
            prop_assert_eq!(state.toggle_sidebar().toggle_sidebar(), state);
        }

        /// The active section always tracks the most recent selection.
        #[test]
        fn prop_active_section_follows_last_selection(
            actions in prop::collection::vec(action_strategy(), 0..32)
        ) {
            let expected = actions
                .iter()
                .rev()
                .find_map(|action| match action {
                    ViewAction::SelectSection(section) => Some(*section),
                    _ => None,
                })
                .unwrap_or_default();
            let state = actions.into_iter().fold(ViewState::default(), reduce);
            prop_assert_eq!(state.active_section(), expected);
        }
    }
}
