//! Events produced by the terminal event loop.
//!
//! Events represent input from the external world (keyboard, timers).
//! They flow INTO the application from the TUI layer.

use crossterm::event::KeyEvent;

/// Events from the terminal/environment.
#[derive(Clone, Debug)]
pub enum Event {
    /// Quit requested (Ctrl+C, SIGTERM)
    Quit,
    /// Error occurred in the event loop
    Error(String),
    /// Periodic tick (for animations, draining async results)
    Tick,
    /// Render frame requested
    Render,
    /// Key pressed
    Key(KeyEvent),
    /// Terminal resized
    Resize(u16, u16),
}
