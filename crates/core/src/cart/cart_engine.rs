use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use super::cart_model::{clamp_quantity, grand_total, CartLine, CartRecalculation, QuantityInput};
use super::cart_traits::CartStateTrait;
use crate::view::{ViewRenderer, ViewUpdate};

/// Recomputes line totals and the cart grand total after every quantity
/// mutation and pushes them to the renderer.
///
/// Totals are derived on each pass from the injected cart state; nothing is
/// cached here. Malformed input never fails: it clamps to the quantity floor.
pub struct CartRecalculationEngine {
    state: Arc<dyn CartStateTrait>,
    renderer: Arc<dyn ViewRenderer>,
}

impl CartRecalculationEngine {
    pub fn new(state: Arc<dyn CartStateTrait>, renderer: Arc<dyn ViewRenderer>) -> Self {
        Self { state, renderer }
    }

    /// Sets the quantity of `line_id` from raw input and recalculates.
    ///
    /// Returns `None` (and renders nothing) when the line does not exist.
    pub fn on_quantity_change(
        &self,
        line_id: &str,
        raw: impl Into<QuantityInput>,
    ) -> Option<CartRecalculation> {
        let quantity = raw.into().resolve();
        let updated = self.state.set_quantity(line_id, quantity);
        self.recalculate(line_id, updated)
    }

    /// Adds `delta` to the current quantity of `line_id` (stepper buttons),
    /// clamps, and recalculates. The read and the write are one state update.
    pub fn on_quantity_step(&self, line_id: &str, delta: i64) -> Option<CartRecalculation> {
        let updated = self.state.update_quantity(line_id, &|current| {
            clamp_quantity(i64::from(current).saturating_add(delta))
        });
        self.recalculate(line_id, updated)
    }

    /// Renders every line total and the grand total, e.g. on first display.
    pub fn recalculate_all(&self) -> Decimal {
        let lines = self.state.lines();
        let total = grand_total(&lines);
        let mut updates: Vec<ViewUpdate> = lines
            .iter()
            .map(|line| ViewUpdate::line_total(line.line_id.clone(), line.line_total()))
            .collect();
        updates.push(ViewUpdate::grand_total(total));
        self.renderer.render_batch(updates);
        total
    }

    /// Current grand total without rendering anything.
    pub fn grand_total(&self) -> Decimal {
        grand_total(&self.state.lines())
    }

    fn recalculate(&self, line_id: &str, updated: Option<CartLine>) -> Option<CartRecalculation> {
        let Some(line) = updated else {
            debug!("Quantity change on unknown cart line '{}'", line_id);
            return None;
        };

        let line_total = line.line_total();
        self.renderer
            .render(ViewUpdate::line_total(line.line_id.clone(), line_total));

        let grand_total = self.grand_total();
        self.renderer.render(ViewUpdate::grand_total(grand_total));

        debug!(
            "Cart line '{}' now {} x {} = {}, cart total {}",
            line.line_id, line.quantity, line.unit_price, line_total, grand_total
        );

        Some(CartRecalculation {
            line,
            line_total,
            grand_total,
        })
    }
}
