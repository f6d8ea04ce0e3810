pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;
use orion_core::catalog::{CART_SESSION_LABEL, POS_LANES, PRODUCTS};

pub(crate) use self::event::{PosEffect, PosEvent, PosIntent};
use self::model::PosViewModel;
use self::state::PosState;

/// POS stage widget: catalog, checkout lanes and the open cart.
pub(crate) struct PosWidget {
    state: PosState,
}

impl PosWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: PosState::new(),
        }
    }

    /// Reduce a POS intent into effects.
    pub(crate) fn reduce(&mut self, intent: PosIntent) -> Task<PosEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Whether the stage enter/exit transition needs redraw ticks.
    pub(crate) fn is_stage_animating(&self) -> bool {
        self.state.is_stage_animating()
    }

    /// Produce the POS view model for rendering.
    pub(crate) fn vm(&self) -> PosViewModel<'_> {
        PosViewModel {
            products: &PRODUCTS,
            lanes: &POS_LANES,
            session_label: CART_SESSION_LABEL,
            cart: self.state.cart(),
            summary: self.state.summary(),
            stage_progress: self.state.stage_progress(),
            stage_animating: self.state.is_stage_animating(),
        }
    }
}
