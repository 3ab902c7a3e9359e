//! Reusable UI building blocks.
//!
//! Components know nothing about the weather domain; they handle key
//! events and emit generic outputs that the screens translate.

mod component;
mod error_dialog;
pub mod logo;
mod search_bar;
mod spinner;

pub use component::{Component, Handled};
pub use error_dialog::{ErrorDialog, ErrorDialogEvent};
pub use search_bar::{SearchBar, SearchBarEvent};
pub use spinner::Spinner;
