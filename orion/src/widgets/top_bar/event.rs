/// Intent events handled by top bar views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TopBarIntent {
    SearchChanged(String),
    LaunchPos,
}

/// Effect events produced by the top bar reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TopBarEffect {
    LaunchPosRequested,
}

/// Top bar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum TopBarEvent {
    /// Intent event reduced by the top bar widget.
    Intent(TopBarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(TopBarEffect),
}
