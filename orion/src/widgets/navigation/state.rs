use orion_core::{ViewAction, ViewState};

/// Navigation state: the single view state value of the shell.
#[derive(Debug, Default)]
pub(crate) struct NavigationState {
    view: ViewState,
}

impl NavigationState {
    pub(crate) fn view(&self) -> ViewState {
        self.view
    }

    /// Replace the view state with the result of `action`, returning the
    /// previous value.
    pub(crate) fn apply(&mut self, action: ViewAction) -> ViewState {
        let previous = self.view;
        self.view = orion_core::reduce(previous, action);
        previous
    }
}
