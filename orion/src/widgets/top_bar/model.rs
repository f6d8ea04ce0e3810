/// Signed-in operator shown in the top bar avatar.
pub(crate) const CURRENT_USER: &str = "Priya Shah";

pub(crate) const SEARCH_PLACEHOLDER: &str =
    "Search intelligence, teams, or workflows";

/// View model for the top bar widget.
#[derive(Debug, Clone)]
pub(crate) struct TopBarViewModel<'a> {
    pub(crate) search_query: &'a str,
    pub(crate) avatar_initials: String,
}
