//! Async command pattern for side effects.
//!
//! Commands represent async operations that run outside the main event loop.
//! Screens return commands from `update()`, and the App spawns them with
//! automatic completion detection. A command reports its result back to the
//! owning screen through that screen's message channel, never by return
//! value.

use async_trait::async_trait;

/// Async command that performs side effects.
///
/// Commands are spawned by the App and tracked for logging. They send
/// results back to their screen via a channel; a send to a receiver that
/// no longer listens is a no-op, not an error.
#[async_trait]
pub trait Command: Send + 'static {
    /// Human-readable name for logging. Include context like the query.
    fn name(&self) -> String;

    /// Execute the command.
    async fn execute(self: Box<Self>) -> color_eyre::Result<()>;
}
