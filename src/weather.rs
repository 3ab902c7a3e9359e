//! weatherapi.com integration.
//!
//! [`client::WeatherClient`] issues one HTTP GET per lookup and decodes
//! the provider's JSON envelope into the typed reports in [`model`].
//! Fetches run as [`command`] values spawned by the App.

pub mod client;
pub mod command;
pub mod error;
pub mod model;
pub mod units;

pub use client::WeatherClient;
pub use error::WeatherError;
