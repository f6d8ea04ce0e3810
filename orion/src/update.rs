use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Navigation(event) => routers::navigation::route(app, event),
        AppEvent::TopBar(event) => routers::top_bar::route(app, event),
        AppEvent::Pos(event) => routers::pos::route(app, event),
    }
}
