//! The tab screens and the splash view.
//!
//! Home, Search and Forecast are thin bindings of the shared
//! [`fetch::FetchController`] view model to their presentation.

pub mod current_view;
pub mod fetch;
pub mod forecast;
pub mod home;
pub mod search;
pub mod splash;
pub mod tabs;
