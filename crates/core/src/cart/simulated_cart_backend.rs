use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::cart_traits::CartBackend;
use crate::errors::Result;

/// Fixed-latency stand-in for the add-to-cart API. Always succeeds.
pub struct SimulatedCartBackend {
    latency: Duration,
}

impl SimulatedCartBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl CartBackend for SimulatedCartBackend {
    async fn add_item(&self, product_id: &str, quantity: u32) -> Result<()> {
        tokio::time::sleep(self.latency).await;
        debug!("Simulated add of {} x '{}'", quantity, product_id);
        Ok(())
    }
}
