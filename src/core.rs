//! Core framework for skycast.
//!
//! # Terminology
//! - **Event**: input from the terminal or a timer - see [`event::Event`]
//! - **Message**: app-level communication driving state changes - see [`message::AppMessage`]
//! - **Command**: async side-effect operations - see [`command::Command`]
//! - **Screen**: a tab's view model and presentation - see [`screen::Screen`]

pub mod command;
pub mod event;
pub mod message;
pub mod screen;

pub use command::Command;
pub use event::Event;
pub use message::AppMessage;
pub use screen::{Screen, UpdateResult};
