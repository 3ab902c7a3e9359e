//! Component trait for reusable UI building blocks.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::Theme;

/// Result of handling an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled<E> {
    /// Input was not handled, parent should process it.
    Ignored,
    /// Input was consumed but produced no event.
    Consumed,
    /// Input was consumed and produced an event.
    Event(E),
}

impl<E> Handled<E> {
    /// Returns true if the input was consumed (not ignored).
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

impl<E> From<E> for Handled<E> {
    fn from(event: E) -> Self {
        Self::Event(event)
    }
}

/// Interactive UI building block.
///
/// Components handle key events and emit generic outputs. They know
/// nothing about business logic.
pub trait Component {
    /// The output type this component produces.
    type Output;

    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> Handled<Self::Output> {
        _ = key;
        Handled::Ignored
    }

    /// Called on each tick for animations and time-based updates.
    fn on_tick(&mut self) {}

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
}
