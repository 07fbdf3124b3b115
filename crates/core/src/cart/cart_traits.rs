use async_trait::async_trait;

use crate::cart::cart_model::CartLine;
use crate::errors::Result;

/// Trait for the page-resident cart state (`line_id → {unit_price, quantity}`).
///
/// The engine never caches lines; every recalculation reads through this
/// trait, so the state is the only source of truth.
pub trait CartStateTrait: Send + Sync {
    fn get_line(&self, line_id: &str) -> Option<CartLine>;
    /// All current lines, in display order.
    fn lines(&self) -> Vec<CartLine>;
    /// Replaces the line's quantity with `update(current)` in one atomic step
    /// and returns the updated line, or `None` when no such line exists.
    fn update_quantity(&self, line_id: &str, update: &dyn Fn(u32) -> u32) -> Option<CartLine>;

    /// Stores `quantity` for the line and returns the updated line, or `None`
    /// when no such line exists.
    fn set_quantity(&self, line_id: &str, quantity: u32) -> Option<CartLine> {
        self.update_quantity(line_id, &|_| quantity)
    }
}

/// Trait for the add-to-cart backend.
#[async_trait]
pub trait CartBackend: Send + Sync {
    async fn add_item(&self, product_id: &str, quantity: u32) -> Result<()>;
}
