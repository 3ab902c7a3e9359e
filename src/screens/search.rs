//! Search tab: current conditions for a user-entered location.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::Theme;
use crate::core::command::Command;
use crate::core::event::Event;
use crate::core::screen::{Screen, UpdateResult};
use crate::screens::current_view;
use crate::screens::fetch::{
    Applied, BLANK_QUERY_PROMPT, FetchController, FetchOutcome, FetchState, normalize_query,
};
use crate::ui::{Component, Handled, SearchBar, SearchBarEvent, Spinner, logo};
use crate::weather::client::WeatherClient;
use crate::weather::command::FetchCurrentCmd;
use crate::weather::model::CurrentReport;

pub struct SearchScreen {
    client: WeatherClient,
    default_location: String,
    bar: SearchBar,
    /// Inline prompt shown after a blank submission; cleared on input.
    hint: Option<&'static str>,
    controller: FetchController<CurrentReport>,
    spinner: Spinner,
    queued: Option<String>,
    tx: UnboundedSender<FetchOutcome<CurrentReport>>,
    rx: UnboundedReceiver<FetchOutcome<CurrentReport>>,
}

impl SearchScreen {
    pub fn new(client: WeatherClient, default_location: String) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            default_location,
            bar: SearchBar::new("Enter city name"),
            hint: None,
            controller: FetchController::new(),
            spinner: Spinner::new("Searching..."),
            queued: None,
            tx,
            rx,
        }
    }
}

impl Screen for SearchScreen {
    fn init(&mut self) {
        self.queued = Some(self.default_location.clone());
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
        match self.bar.handle_key(*key) {
            Handled::Event(SearchBarEvent::Submitted(raw)) => {
                if let Some(query) = normalize_query(&raw) {
                    self.hint = None;
                    self.queued = Some(query);
                } else {
                    self.hint = Some(BLANK_QUERY_PROMPT);
                }
                true
            }
            Handled::Consumed => {
                self.hint = None;
                true
            }
            Handled::Ignored => false,
        }
    }

    fn update(&mut self) -> UpdateResult {
        let mut commands: Vec<Box<dyn Command>> = Vec::new();
        if let Some(query) = self.queued.take() {
            let seq = self.controller.begin();
            commands.push(Box::new(FetchCurrentCmd::new(
                self.client.clone(),
                query,
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
        let [logo_area, bar_area, hint_area, body] = Layout::vertical([
            Constraint::Length(logo::HEIGHT + 1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(logo::paragraph(theme.accent), logo_area);
        self.bar.render(frame, bar_area, theme);

        if let Some(hint) = self.hint {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    hint,
                    Style::default().fg(theme.highlight),
                ))),
                hint_area,
            );
        }

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
        "/ search · Enter submit"
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    fn screen() -> SearchScreen {
        SearchScreen::new(WeatherClient::new("test-key"), "London".to_string())
    }

    fn press(screen: &mut SearchScreen, code: KeyCode) -> bool {
        screen.handle_input(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn submit(screen: &mut SearchScreen, text: &str) {
        press(screen, KeyCode::Char('/'));
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
        press(screen, KeyCode::Enter);
    }

    #[test]
    fn submission_transitions_to_loading_before_any_resolution() {
        let mut screen = screen();
        submit(&mut screen, "Paris");

        assert!(!screen.controller.is_loading());
        match screen.update() {
            UpdateResult::Commands(commands) => assert_eq!(commands.len(), 1),
            _ => panic!("expected a fetch command"),
        }
        assert!(screen.controller.is_loading());
    }

    #[test]
    fn blank_submission_prompts_without_state_change_or_fetch() {
        let mut screen = screen();
        submit(&mut screen, "   ");

        assert_eq!(screen.hint, Some(BLANK_QUERY_PROMPT));
        assert!(matches!(screen.controller.state(), FetchState::Idle));
        assert!(matches!(screen.update(), UpdateResult::Idle));
    }

    #[test]
    fn typing_clears_the_blank_query_prompt() {
        let mut screen = screen();
        submit(&mut screen, "");
        assert!(screen.hint.is_some());

        press(&mut screen, KeyCode::Char('/'));
        press(&mut screen, KeyCode::Char('O'));
        assert!(screen.hint.is_none());
    }

    #[test]
    fn init_fetches_the_default_location() {
        let mut screen = screen();
        screen.init();
        match screen.update() {
            UpdateResult::Commands(commands) => {
                assert_eq!(commands.len(), 1);
                assert!(commands[0].name().contains("London"));
            }
            _ => panic!("expected a fetch command"),
        }
    }
}
