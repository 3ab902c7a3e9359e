//! Application shell.
//!
//! Owns the splash -> tabs transition, the command spawner and the
//! global error dialog. All state changes funnel through one message
//! loop; spawned commands never touch state directly.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::Theme;
use crate::core::command::Command;
use crate::core::event::Event;
use crate::core::message::AppMessage;
use crate::screens::forecast::ForecastScreen;
use crate::screens::home::HomeScreen;
use crate::screens::search::SearchScreen;
use crate::screens::splash::{Splash, SplashTimings};
use crate::screens::tabs::TabSurface;
use crate::tui::Tui;
use crate::ui::{Component, ErrorDialog, ErrorDialogEvent, Handled};
use crate::weather::client::WeatherClient;

const FRAME_RATE: f64 = 30.0;
const TICK_RATE: f64 = 10.0;

/// The shell is either on the splash or on the tabs; the transition
/// happens exactly once per launch and is not reversible.
enum Shell {
    Splash(Splash),
    Tabs(TabSurface),
}

pub struct App {
    shell: Shell,
    dialog: Option<ErrorDialog>,
    theme: Theme,
    client: WeatherClient,
    location: String,
    forecast_days: u8,
    msg_tx: UnboundedSender<AppMessage>,
    msg_rx: UnboundedReceiver<AppMessage>,
    should_quit: bool,
}

impl App {
    pub fn new(client: WeatherClient, location: String, forecast_days: u8, theme: Theme) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            shell: Shell::Splash(Splash::start(SplashTimings::default())),
            dialog: None,
            theme,
            client,
            location,
            forecast_days,
            msg_tx,
            msg_rx,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(FRAME_RATE, TICK_RATE)?;
        tui.enter()?;

        loop {
            let Some(message) = self.next_message(&mut tui).await else {
                break;
            };
            self.process(&mut tui, message)?;
            if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }

    /// One funnel: terminal events and command completions arrive as the
    /// same message type.
    async fn next_message(&mut self, tui: &mut Tui) -> Option<AppMessage> {
        tokio::select! {
            event = tui.next_event() => event.map(AppMessage::from),
            message = self.msg_rx.recv() => message,
        }
    }

    fn process(&mut self, tui: &mut Tui, message: AppMessage) -> color_eyre::Result<()> {
        match message {
            AppMessage::Tick => self.on_tick(),
            AppMessage::Render | AppMessage::Resize(_, _) => self.render(tui)?,
            AppMessage::Quit => self.should_quit = true,
            AppMessage::Key(key) => self.on_key(key),
            AppMessage::DisplayError(message) => {
                self.dialog = Some(ErrorDialog::new(message));
            }
            AppMessage::CommandCompleted { name, success } => {
                if success {
                    debug!(command = %name, "command completed");
                } else {
                    warn!(command = %name, "command failed");
                }
                self.pump_screens();
            }
        }
        Ok(())
    }

    fn on_tick(&mut self) {
        let splash_finished = match &mut self.shell {
            Shell::Splash(splash) => splash.update(),
            Shell::Tabs(tabs) => {
                tabs.handle_tick();
                false
            }
        };
        if splash_finished {
            self.enter_tabs();
        }
    }

    /// Irreversible splash -> tabs transition.
    fn enter_tabs(&mut self) {
        info!("splash finished, mounting tab surface");
        let mut tabs = TabSurface::new(
            HomeScreen::new(self.client.clone(), self.location.clone()),
            SearchScreen::new(self.client.clone(), self.location.clone()),
            ForecastScreen::new(self.client.clone(), self.location.clone(), self.forecast_days),
        );
        tabs.init();
        self.shell = Shell::Tabs(tabs);
        self.pump_screens();
    }

    fn on_key(&mut self, key: KeyEvent) {
        // An open dialog traps all input until dismissed.
        if let Some(dialog) = &mut self.dialog {
            if let Handled::Event(ErrorDialogEvent::Dismissed) = dialog.handle_key(key) {
                self.dialog = None;
            }
            return;
        }

        match &mut self.shell {
            // The splash is not skippable.
            Shell::Splash(_) => {}
            Shell::Tabs(tabs) => {
                if tabs.handle_input(&Event::Key(key)) {
                    self.pump_screens();
                } else if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
        }
    }

    /// Drive every screen's update funnel, spawn the commands it asks
    /// for, surface the first error as a dialog.
    fn pump_screens(&mut self) {
        let update = match &mut self.shell {
            Shell::Tabs(tabs) => tabs.update(),
            Shell::Splash(_) => return,
        };
        for command in update.commands {
            self.spawn(command);
        }
        if let Some(message) = update.error {
            self.dialog = Some(ErrorDialog::new(message));
        }
    }

    fn spawn(&self, command: Box<dyn Command>) {
        let name = command.name();
        debug!(command = %name, "spawning command");
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let success = command.execute().await.is_ok();
            let _ = tx.send(AppMessage::CommandCompleted { name, success });
        });
    }

    fn render(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        let theme = self.theme;
        tui.draw(|frame| {
            let area = frame.area();
            match &mut self.shell {
                Shell::Splash(splash) => splash.view(frame, area, &theme),
                Shell::Tabs(tabs) => tabs.view(frame, area, &theme),
            }
            if let Some(dialog) = &mut self.dialog {
                dialog.render(frame, area, &theme);
            }
        })?;
        Ok(())
    }
}
