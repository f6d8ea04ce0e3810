/// Top bar state. The search query is kept for display only.
#[derive(Debug, Default)]
pub(crate) struct TopBarState {
    search_query: String,
}

impl TopBarState {
    pub(crate) fn search_query(&self) -> &str {
        &self.search_query
    }

    pub(crate) fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }
}
