/// Quiet period before a typed query is dispatched
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Latency of the simulated search backend
pub const SIMULATED_SEARCH_LATENCY_MS: u64 = 1000;

/// Latency of the simulated add-to-cart backend
pub const SIMULATED_ADD_TO_CART_LATENCY_MS: u64 = 1000;

/// How long a notification stays visible before it is dismissed automatically
pub const NOTIFICATION_TTL_MS: u64 = 5000;

/// Queries shorter than this (in characters) are never dispatched
pub const MIN_QUERY_CHARS: usize = 2;

/// Floor applied to every cart line quantity
pub const MIN_QUANTITY: u32 = 1;

/// Decimal places used when displaying amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Currency symbol prefixed to displayed amounts
pub const CURRENCY_SYMBOL: &str = "$";

/// Message shown after a product was added to the cart
pub const ADD_TO_CART_SUCCESS_MESSAGE: &str = "Product added to cart successfully!";

/// Message shown when the cart backend rejects an add-to-cart request
pub const ADD_TO_CART_FAILURE_MESSAGE: &str = "Could not add product to cart.";
