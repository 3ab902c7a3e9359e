//! Home tab: current conditions for the configured default location.
//!
//! Fetches once on mount; `r` refetches. There is no query input here,
//! so the blank-query guard never applies.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::Theme;
use crate::core::command::Command;
use crate::core::event::Event;
use crate::core::screen::{Screen, UpdateResult};
use crate::screens::current_view;
use crate::screens::fetch::{Applied, FetchController, FetchOutcome, FetchState};
use crate::ui::{Component, Spinner, logo};
use crate::weather::client::WeatherClient;
use crate::weather::command::FetchCurrentCmd;
use crate::weather::model::CurrentReport;

pub struct HomeScreen {
    client: WeatherClient,
    location: String,
    controller: FetchController<CurrentReport>,
    spinner: Spinner,
    queued: bool,
    tx: UnboundedSender<FetchOutcome<CurrentReport>>,
    rx: UnboundedReceiver<FetchOutcome<CurrentReport>>,
}

impl HomeScreen {
    pub fn new(client: WeatherClient, location: String) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            location,
            controller: FetchController::new(),
            spinner: Spinner::new("Loading weather..."),
            queued: false,
            tx,
            rx,
        }
    }
}

impl Screen for HomeScreen {
    fn init(&mut self) {
        self.queued = true;
    }

    fn handle_tick(&mut self) {
        if self.controller.is_loading() {
            self.spinner.on_tick();
        }
    }

    fn handle_input(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.code == KeyCode::Char('r') {
            self.queued = true;
            return true;
        }
        false
    }

    fn update(&mut self) -> UpdateResult {
        let mut commands: Vec<Box<dyn Command>> = Vec::new();
        if std::mem::take(&mut self.queued) {
            let seq = self.controller.begin();
            commands.push(Box::new(FetchCurrentCmd::new(
                self.client.clone(),
                self.location.clone(),
                seq,
                self.tx.clone(),
            )));
        }

        let mut error = None;
        while let Ok(outcome) = self.rx.try_recv() {
            if let Applied::Failed(message) = self.controller.apply(outcome) {
                error = Some(message);
            }
        }

        if let Some(message) = error {
            return UpdateResult::Error(message);
        }
        if commands.is_empty() {
            UpdateResult::Idle
        } else {
            UpdateResult::Commands(commands)
        }
    }

    fn view(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [logo_area, body] =
            Layout::vertical([Constraint::Length(logo::HEIGHT + 1), Constraint::Min(0)])
                .areas(area);
        frame.render_widget(logo::paragraph(theme.accent), logo_area);

        if self.controller.is_loading() {
            self.spinner.render(frame, body, theme);
            return;
        }
        match self.controller.state() {
            FetchState::Loaded(report) => current_view::render(frame, body, theme, report),
            _ => current_view::render_empty(frame, body, theme, "No weather data"),
        }
    }

    fn key_hints(&self) -> &'static str {
        "r refresh"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::WeatherError;
    use crate::weather::model::{Condition, CurrentConditions, Location};

    fn screen() -> HomeScreen {
        HomeScreen::new(WeatherClient::new("test-key"), "London".to_string())
    }

    fn report() -> CurrentReport {
        CurrentReport {
            location: Location {
                name: "London".to_string(),
                region: String::new(),
                country: "United Kingdom".to_string(),
                localtime: "2026-08-05 14:30".to_string(),
                tz_id: "Europe/London".to_string(),
            },
            current: CurrentConditions {
                temp_c: 20.0,
                feelslike_c: 21.2,
                condition: Condition {
                    text: "Partly cloudy".to_string(),
                    icon: "//cdn.weatherapi.com/weather/64x64/day/116.png".to_string(),
                },
                wind_kph: 10.0,
                wind_dir: "WSW".to_string(),
                humidity: 72,
                uv: 4.0,
                vis_km: 10.0,
            },
        }
    }

    #[test]
    fn init_starts_loading_and_produces_one_command() {
        let mut screen = screen();
        screen.init();

        let result = screen.update();
        assert!(screen.controller.is_loading());
        match result {
            UpdateResult::Commands(commands) => assert_eq!(commands.len(), 1),
            _ => panic!("expected a fetch command"),
        }
    }

    #[test]
    fn outcome_is_applied_on_update() {
        let mut screen = screen();
        screen.init();
        let _ = screen.update();

        screen
            .tx
            .send(FetchOutcome {
                seq: 1,
                result: Ok(report()),
            })
            .unwrap();
        let _ = screen.update();
        assert!(screen.controller.loaded().is_some());
    }

    #[test]
    fn failure_surfaces_error_and_clears_data() {
        let mut screen = screen();
        screen.init();
        let _ = screen.update();
        screen
            .tx
            .send(FetchOutcome {
                seq: 1,
                result: Ok(report()),
            })
            .unwrap();
        let _ = screen.update();

        // Refetch and fail it.
        screen.handle_input(&Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Char('r'),
            crossterm::event::KeyModifiers::NONE,
        )));
        let _ = screen.update();
        screen
            .tx
            .send(FetchOutcome {
                seq: 2,
                result: Err(WeatherError::Provider(
                    "No matching location found.".to_string(),
                )),
            })
            .unwrap();

        match screen.update() {
            UpdateResult::Error(message) => {
                assert_eq!(message, "No matching location found.");
            }
            _ => panic!("expected an error"),
        }
        assert!(screen.controller.loaded().is_none());
    }
}
