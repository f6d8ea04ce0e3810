use iced::Task;

use super::event::{TopBarEffect, TopBarEvent, TopBarIntent};
use super::state::TopBarState;

/// Reduce a top bar intent into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut TopBarState,
    intent: TopBarIntent,
) -> Task<TopBarEvent> {
    match intent {
        TopBarIntent::SearchChanged(query) => {
            log::debug!("search query changed ({} chars)", query.len());
            state.set_search_query(query);
            Task::none()
        },
        TopBarIntent::LaunchPos => {
            Task::done(TopBarEvent::Effect(TopBarEffect::LaunchPosRequested))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_search_input_when_reduced_then_query_is_stored_verbatim() {
        let mut state = TopBarState::default();

        let _ = reduce(
            &mut state,
            TopBarIntent::SearchChanged(String::from("inventory  ")),
        );

        assert_eq!(state.search_query(), "inventory  ");
    }

    #[test]
    fn given_launch_pos_when_reduced_then_search_query_is_untouched() {
        let mut state = TopBarState::default();
        state.set_search_query(String::from("teams"));

        let _ = reduce(&mut state, TopBarIntent::LaunchPos);

        assert_eq!(state.search_query(), "teams");
    }
}
