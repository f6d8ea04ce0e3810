use iced::{Subscription, window};

use super::{App, AppEvent};
use crate::widgets::pos::{PosEvent, PosIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    // Frame ticks only while the POS stage is entering or leaving.
    if !app.widgets.pos.is_stage_animating() {
        return Subscription::none();
    }

    window::frames()
        .map(|at| AppEvent::Pos(PosEvent::Intent(PosIntent::Frame(at))))
}
