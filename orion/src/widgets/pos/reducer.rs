use iced::Task;
use iced::time::Instant;
use orion_core::catalog::product_by_sku;

use super::event::{PosEffect, PosEvent, PosIntent};
use super::state::PosState;

/// Reduce a POS intent. The cart is read-only, so only `Close` produces an
/// effect; the stage intents drive the enter/exit transition.
pub(crate) fn reduce(
    state: &mut PosState,
    intent: PosIntent,
) -> Task<PosEvent> {
    match intent {
        PosIntent::ProductPressed { sku } => {
            match product_by_sku(sku) {
                Some(product) => log::debug!(
                    "product {} ({sku}) pressed, cart has {} lines",
                    product.name,
                    state.cart().len()
                ),
                None => log::warn!("pressed unknown product sku {sku}"),
            }
            Task::none()
        },
        PosIntent::CompleteTransaction => {
            log::debug!(
                "complete transaction pressed, total {:.2}",
                state.summary().total
            );
            Task::none()
        },
        PosIntent::Close => {
            Task::done(PosEvent::Effect(PosEffect::CloseRequested))
        },
        PosIntent::StageShown => {
            log::debug!("POS stage entering");
            state.show_stage(Instant::now());
            Task::none()
        },
        PosIntent::StageHidden => {
            log::debug!("POS stage leaving");
            state.hide_stage(Instant::now());
            Task::none()
        },
        PosIntent::Frame(at) => {
            state.advance(at);
            Task::none()
        },
    }
}
