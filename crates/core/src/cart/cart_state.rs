use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::warn;

use super::cart_model::CartLine;
use super::cart_traits::CartStateTrait;
use crate::constants::MIN_QUANTITY;

/// In-memory cart state preserving insertion order.
#[derive(Default)]
pub struct InMemoryCartState {
    lines: RwLock<Vec<CartLine>>,
}

impl InMemoryCartState {
    pub fn new(lines: Vec<CartLine>) -> Self {
        Self {
            lines: RwLock::new(lines),
        }
    }

    fn read_lines(&self) -> RwLockReadGuard<'_, Vec<CartLine>> {
        self.lines.read().unwrap_or_else(|poisoned| {
            warn!("Cart state lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_lines(&self) -> RwLockWriteGuard<'_, Vec<CartLine>> {
        self.lines.write().unwrap_or_else(|poisoned| {
            warn!("Cart state lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Inserts the line, or replaces the line with the same id in place.
    pub fn upsert_line(&self, line: CartLine) {
        let mut lines = self.write_lines();
        match lines.iter_mut().find(|l| l.line_id == line.line_id) {
            Some(existing) => *existing = line,
            None => lines.push(line),
        }
    }

    /// Removes the line; returns whether it existed.
    pub fn remove_line(&self, line_id: &str) -> bool {
        let mut lines = self.write_lines();
        let before = lines.len();
        lines.retain(|l| l.line_id != line_id);
        lines.len() != before
    }
}

impl CartStateTrait for InMemoryCartState {
    fn get_line(&self, line_id: &str) -> Option<CartLine> {
        self.read_lines()
            .iter()
            .find(|l| l.line_id == line_id)
            .cloned()
    }

    fn lines(&self) -> Vec<CartLine> {
        self.read_lines().clone()
    }

    fn update_quantity(&self, line_id: &str, update: &dyn Fn(u32) -> u32) -> Option<CartLine> {
        let mut lines = self.write_lines();
        let line = lines.iter_mut().find(|l| l.line_id == line_id)?;
        line.quantity = update(line.quantity).max(MIN_QUANTITY);
        Some(line.clone())
    }
}
