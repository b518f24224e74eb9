//! Core library for the `cityweather` lookup app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider
//! - Shared domain models (readings, derived display values)
//! - The entry/results view flow and the session state that links them
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod flow;
pub mod model;
pub mod provider;
pub mod session;

pub use config::Config;
pub use flow::{EntryView, ResultState, ResultView, Route};
pub use model::{DisplayTemperatures, WeatherReading};
pub use provider::{ProviderError, WeatherProvider};
pub use session::Session;
