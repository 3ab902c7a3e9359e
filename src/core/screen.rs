//! Screen trait for the tab views.
//!
//! Screens follow a single-funnel update pattern:
//! - `init()` queues the initial fetch
//! - `handle_input()` queues work from user input
//! - `handle_tick()` advances animations
//! - `update()` processes everything queued - THE SINGLE FUNNEL
//!
//! Only `update()` can return commands or report errors, so all side
//! effects flow through one place.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::Theme;
use crate::core::command::Command;
use crate::core::event::Event;

/// Result from [`Screen::update`].
pub enum UpdateResult {
    /// No action needed
    Idle,
    /// Spawn these commands
    Commands(Vec<Box<dyn Command>>),
    /// Report an error to the user
    Error(String),
}

impl<T: Command> From<T> for UpdateResult {
    fn from(value: T) -> Self {
        Self::Commands(vec![Box::new(value)])
    }
}

/// A tab screen.
///
/// Screens own their view state and message queue. The App calls methods
/// in this order:
///
/// 1. `init()` - once when the tab surface mounts
/// 2. `update()` - immediately after init to process the startup fetch
/// 3. For each event: `handle_tick()` or `handle_input()`, then `update()`
///    if the input was consumed
/// 4. When a command completes: `update()`
pub trait Screen {
    /// Queue the startup fetch. Called once when the tab surface mounts;
    /// the App calls `update()` immediately after.
    fn init(&mut self) {}

    /// Advance animation state (spinners). No messages here.
    fn handle_tick(&mut self) {}

    /// Handle an input event. Return `true` if it was consumed (the App
    /// will then call `update()`).
    fn handle_input(&mut self, event: &Event) -> bool;

    /// Process everything queued and return the result.
    fn update(&mut self) -> UpdateResult;

    /// Render the current state.
    fn view(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Key hints shown in the footer while this screen is active.
    fn key_hints(&self) -> &'static str {
        ""
    }
}
