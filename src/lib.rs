//! Synthetic campus energy readings and the dashboard views reduced from them.

#[cfg(feature = "api")]
pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod forecast;
pub mod io;
pub mod logging;
/// Reading generation: windows, random sources, consumption model, store and engine.
pub mod sim;
pub mod views;

pub use error::{EngineError, Result};
pub use sim::engine::{Engine, EngineOptions};
