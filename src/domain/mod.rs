pub mod browse;
pub mod errors;
pub mod logging;
pub mod price_registry;
