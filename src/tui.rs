//! Terminal UI wrapper.
//!
//! [`Tui`] wraps ratatui's Terminal, manages raw mode and the alternate
//! screen, and runs the async event loop that feeds [`Event`]s to the
//! App.

use std::io::Stdout;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use crossterm::cursor;
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use futures::{FutureExt, StreamExt};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

use crate::core::event::Event;

pub type Backend = CrosstermBackend<Stdout>;

/// Terminal wrapper with an async event stream.
pub struct Tui {
    terminal: Terminal<Backend>,
    task: JoinHandle<()>,
    cancellation_token: CancellationToken,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    frame_rate: f64,
    tick_rate: f64,
}

impl Tui {
    /// Create a new TUI with the specified frame and tick rates.
    pub fn new(frame_rate: f64, tick_rate: f64) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal: Terminal::new(Backend::new(std::io::stdout()))?,
            task: tokio::spawn(async {}),
            cancellation_token: CancellationToken::new(),
            event_rx,
            event_tx,
            frame_rate,
            tick_rate,
        })
    }

    /// Enter the TUI (raw mode, alternate screen) and start the loop.
    pub fn enter(&mut self) -> color_eyre::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(std::io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.start();
        Ok(())
    }

    /// Exit the TUI and restore the terminal state.
    pub fn exit(&mut self) -> color_eyre::Result<()> {
        self.stop();
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.flush()?;
            crossterm::execute!(std::io::stdout(), LeaveAlternateScreen, cursor::Show)?;
            crossterm::terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    /// Get the next event from the event stream.
    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    fn start(&mut self) {
        self.cancellation_token.cancel();
        self.cancellation_token = CancellationToken::new();
        let event_loop = Self::event_loop(
            self.event_tx.clone(),
            self.cancellation_token.clone(),
            self.tick_rate,
            self.frame_rate,
        );
        self.task = tokio::spawn(event_loop);
    }

    fn stop(&self) {
        self.cancellation_token.cancel();
        // The loop exits on cancellation; abort is the backstop.
        self.task.abort();
    }

    async fn event_loop(
        event_tx: UnboundedSender<Event>,
        cancellation_token: CancellationToken,
        tick_rate: f64,
        frame_rate: f64,
    ) {
        let mut event_stream = EventStream::new();
        let mut tick_interval = interval(Duration::from_secs_f64(1.0 / tick_rate));
        let mut frame_interval = interval(Duration::from_secs_f64(1.0 / frame_rate));

        #[cfg(unix)]
        {
            let event_tx = event_tx.clone();
            tokio::spawn(async move {
                let Ok(mut sigterm) =
                    tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                else {
                    return;
                };
                sigterm.recv().await;
                let _ = event_tx.send(Event::Quit);
            });
        }

        loop {
            let event = tokio::select! {
                () = cancellation_token.cancelled() => break,
                _ = tick_interval.tick() => Event::Tick,
                _ = frame_interval.tick() => Event::Render,
                crossterm_event = event_stream.next().fuse() => {
                    match crossterm_event {
                        Some(Ok(CrosstermEvent::Key(key))) => {
                            if key.kind != KeyEventKind::Press {
                                continue;
                            }
                            if key.modifiers.contains(KeyModifiers::CONTROL)
                                && key.code == KeyCode::Char('c')
                            {
                                Event::Quit
                            } else {
                                Event::Key(key)
                            }
                        }
                        Some(Ok(CrosstermEvent::Resize(width, height))) => {
                            Event::Resize(width, height)
                        }
                        Some(Ok(_)) => continue,
                        Some(Err(e)) => Event::Error(e.to_string()),
                        None => break,
                    }
                }
            };
            if event_tx.send(event).is_err() {
                break;
            }
        }
        cancellation_token.cancel();
    }
}

impl Deref for Tui {
    type Target = Terminal<Backend>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
