use iced::Animation;
use iced::time::{Duration, Instant};
use orion_core::catalog::open_cart;
use orion_core::{CartLine, CartSummary, summarize};

pub(crate) const STAGE_TRANSITION: Duration = Duration::from_millis(220);

/// POS stage state: the open cart, its summary computed once, and the
/// enter/exit transition of the stage.
#[derive(Debug)]
pub(crate) struct PosState {
    cart: Vec<CartLine>,
    summary: CartSummary,
    stage: Animation<bool>,
    now: Instant,
}

impl PosState {
    /// Build the state from the open demonstration cart.
    pub(crate) fn new() -> Self {
        let cart = match open_cart() {
            Ok(cart) => cart,
            Err(err) => {
                log::error!("open cart rejected: {err}");
                Vec::new()
            },
        };

        Self::with_cart(cart)
    }

    pub(crate) fn with_cart(cart: Vec<CartLine>) -> Self {
        let summary = summarize(&cart);
        Self {
            cart,
            summary,
            stage: Animation::new(false).duration(STAGE_TRANSITION),
            now: Instant::now(),
        }
    }

    pub(crate) fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    pub(crate) fn summary(&self) -> CartSummary {
        self.summary
    }

    pub(crate) fn show_stage(&mut self, at: Instant) {
        self.stage.go_mut(true, at);
        self.now = at;
    }

    pub(crate) fn hide_stage(&mut self, at: Instant) {
        self.stage.go_mut(false, at);
        self.now = at;
    }

    pub(crate) fn advance(&mut self, at: Instant) {
        self.now = at;
    }

    /// Stage opacity in `0.0..=1.0` at the last observed frame.
    pub(crate) fn stage_progress(&self) -> f32 {
        self.stage.interpolate(0.0, 1.0, self.now)
    }

    pub(crate) fn is_stage_animating(&self) -> bool {
        self.stage.is_animating(self.now)
    }
}
