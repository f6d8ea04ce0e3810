use iced::time::Instant;

/// Intent events handled by POS overlay views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PosIntent {
    /// A catalog card was pressed. The cart is not modified.
    ProductPressed { sku: &'static str },
    /// The checkout button was pressed. Transactions are not processed.
    CompleteTransaction,
    Close,
    /// The overlay was opened; the stage fades in.
    StageShown,
    /// The overlay was closed; the stage fades out.
    StageHidden,
    /// Redraw tick while the stage transition runs.
    Frame(Instant),
}

/// Effect events produced by the POS reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PosEffect {
    CloseRequested,
}

/// POS event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum PosEvent {
    /// Intent event reduced by the POS widget.
    Intent(PosIntent),
    /// External effect orchestrated by app-level routing.
    Effect(PosEffect),
}
