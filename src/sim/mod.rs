/// Base consumption with calendar and random variation.
pub mod consumption;
pub mod engine;
/// Cost, carbon and efficiency tables.
pub mod metrics;
/// Injectable random sources.
pub mod rng;
pub mod store;
pub mod types;
pub mod weather;
/// Trailing date windows.
pub mod window;
