//! Cart module - line models, recalculation engine and add-to-cart flow.

mod add_to_cart_service;
mod cart_engine;
mod cart_model;
mod cart_state;
mod cart_traits;
mod simulated_cart_backend;

#[cfg(test)]
mod add_to_cart_service_tests;


pub use add_to_cart_service::AddToCartService;
pub use cart_engine::CartRecalculationEngine;
pub use cart_model::{clamp_quantity, grand_total, CartLine, CartRecalculation, QuantityInput};
pub use cart_state::InMemoryCartState;
pub use cart_traits::{CartBackend, CartStateTrait};
pub use simulated_cart_backend::SimulatedCartBackend;
