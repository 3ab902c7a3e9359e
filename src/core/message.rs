//! Application-level messages.
//!
//! Messages drive the App's single processing loop. Terminal events are
//! translated into messages, and spawned commands report their completion
//! as messages, so the App has exactly one funnel for state changes.

use crossterm::event::KeyEvent;

use crate::core::event::Event;

/// Application-level messages for state transitions and global state.
#[derive(Debug, Clone)]
pub enum AppMessage {
    // === Lifecycle ===
    /// Periodic tick for animations and draining async results
    Tick,
    /// Render the UI
    Render,
    /// Terminal resized
    Resize(u16, u16),
    /// Quit the application
    Quit,

    // === Input ===
    /// Key pressed
    Key(KeyEvent),

    // === Feedback ===
    /// Display an error dialog to the user
    DisplayError(String),

    // === Async ===
    /// A spawned command finished; screens should drain their channels
    CommandCompleted { name: String, success: bool },
}

impl From<Event> for AppMessage {
    fn from(event: Event) -> Self {
        match event {
            Event::Tick => Self::Tick,
            Event::Render => Self::Render,
            Event::Key(key) => Self::Key(key),
            Event::Resize(width, height) => Self::Resize(width, height),
            Event::Quit => Self::Quit,
            Event::Error(message) => Self::DisplayError(message),
        }
    }
}
