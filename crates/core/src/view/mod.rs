//! View updates module.
//!
//! Provides the update types emitted by the search dispatcher, the cart
//! engine and their supporting services, and the renderer trait through which
//! they reach the page. The core makes no assumption about rendering
//! technology.

mod renderer;
mod view_update;

pub use renderer::*;
pub use view_update::*;
