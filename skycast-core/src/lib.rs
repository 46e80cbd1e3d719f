//! Core library for the `skycast` weather lookup tool.
//!
//! This crate defines:
//! - Settings handling (API key, units, endpoint)
//! - A thin client for the OpenWeather current-weather endpoint
//! - A presenter that projects readings onto an injected view
//! - Search handlers orchestrating one user action each
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or
//! services.

pub mod client;
pub mod config;
pub mod handler;
pub mod location;
pub mod model;
pub mod presenter;
pub mod view;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::{FetchError, WeatherClient};
pub use config::Settings;
pub use handler::{search_by_city, search_by_location};
pub use location::{IpLocationSource, LocationError, LocationSource, Position};
pub use model::{Units, WeatherReading};
pub use presenter::WeatherPresenter;
pub use view::{Field, WeatherView};
