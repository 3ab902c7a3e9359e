//! Forecast tab: multi-day forecast plus an astronomy snapshot.
//!
//! One fetch populates both sub-views; switching between them is pure
//! presentation and never refetches. The astronomy snapshot belongs to
//! the first returned day.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
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
use crate::weather::command::FetchForecastCmd;
use crate::weather::model::{ForecastDay, ForecastReport};
use crate::weather::units::{celsius_to_fahrenheit, one_decimal};

/// The two sub-views fed by one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubTab {
    Forecast,
    Astronomy,
}

impl SubTab {
    const fn toggle(self) -> Self {
        match self {
            Self::Forecast => Self::Astronomy,
            Self::Astronomy => Self::Forecast,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Forecast => 0,
            Self::Astronomy => 1,
        }
    }
}

pub struct ForecastScreen {
    client: WeatherClient,
    default_location: String,
    days: u8,
    bar: SearchBar,
    hint: Option<&'static str>,
    sub_tab: SubTab,
    controller: FetchController<ForecastReport>,
    spinner: Spinner,
    queued: Option<String>,
    tx: UnboundedSender<FetchOutcome<ForecastReport>>,
    rx: UnboundedReceiver<FetchOutcome<ForecastReport>>,
}

impl ForecastScreen {
    pub fn new(client: WeatherClient, default_location: String, days: u8) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            default_location,
            days,
            bar: SearchBar::new("Search city or location"),
            hint: None,
            sub_tab: SubTab::Forecast,
            controller: FetchController::new(),
            spinner: Spinner::new("Loading forecast..."),
            queued: None,
            tx,
            rx,
        }
    }

    fn render_days(frame: &mut Frame, area: Rect, theme: &Theme, days: &[ForecastDay]) {
        let chunks = Layout::vertical(days.iter().map(|_| Constraint::Length(6))).split(area);
        let label = Style::default().fg(theme.subtext);
        let value = Style::default().fg(theme.text);

        for (day, chunk) in days.iter().zip(chunks.iter()) {
            let max_f = one_decimal(celsius_to_fahrenheit(day.maxtemp_c));
            let min_f = one_decimal(celsius_to_fahrenheit(day.mintemp_c));
            let lines = vec![
                Line::from(Span::styled(day.condition.text.clone(), value)),
                Line::from(vec![
                    Span::styled("Sunrise: ", label),
                    Span::styled(day.sunrise.clone(), value),
                    Span::styled(" | Sunset: ", label),
                    Span::styled(day.sunset.clone(), value),
                ]),
                Line::from(vec![
                    Span::styled("Max: ", label),
                    Span::styled(format!("{}°C / {max_f}°F", day.maxtemp_c), value),
                    Span::styled(" | Min: ", label),
                    Span::styled(format!("{}°C / {min_f}°F", day.mintemp_c), value),
                ]),
                Line::from(vec![
                    Span::styled("Chance of rain: ", label),
                    Span::styled(format!("{}%", day.chance_of_rain), value),
                ]),
            ];
            let block = Block::default()
                .title(format!(" {} ", day.date))
                .title_style(
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.muted));
            frame.render_widget(
                Paragraph::new(lines).block(block).alignment(Alignment::Center),
                *chunk,
            );
        }
    }

    fn render_astronomy(frame: &mut Frame, area: Rect, theme: &Theme, report: &ForecastReport) {
        let astronomy = &report.astronomy;
        let label = Style::default().fg(theme.subtext);
        let value = Style::default().fg(theme.text);
        let lines = vec![
            Line::from(vec![
                Span::styled("Moonrise: ", label),
                Span::styled(astronomy.moonrise.clone(), value),
            ]),
            Line::from(vec![
                Span::styled("Moonset: ", label),
                Span::styled(astronomy.moonset.clone(), value),
            ]),
            Line::from(vec![
                Span::styled("Moon phase: ", label),
                Span::styled(astronomy.moon_phase.clone(), value),
            ]),
            Line::from(vec![
                Span::styled("Moon illumination: ", label),
                Span::styled(format!("{}%", astronomy.moon_illumination), value),
            ]),
        ];
        let block = Block::default()
            .title(" Astronomy ")
            .title_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.muted));
        let [card] =
            Layout::vertical([Constraint::Length(6)]).areas(area);
        frame.render_widget(
            Paragraph::new(lines).block(block).alignment(Alignment::Center),
            card,
        );
    }
}

impl Screen for ForecastScreen {
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
                return true;
            }
            Handled::Consumed => {
                self.hint = None;
                return true;
            }
            Handled::Ignored => {}
        }

        // Sub-tab switching never refetches.
        if matches!(key.code, KeyCode::Left | KeyCode::Right) {
            self.sub_tab = self.sub_tab.toggle();
            return true;
        }
        false
    }

    fn update(&mut self) -> UpdateResult {
        let mut commands: Vec<Box<dyn Command>> = Vec::new();
        if let Some(query) = self.queued.take() {
            let seq = self.controller.begin();
            commands.push(Box::new(FetchForecastCmd::new(
                self.client.clone(),
                query,
                self.days,
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
        let [logo_area, location_area, bar_area, hint_area, sub_tab_area, body] =
            Layout::vertical([
                Constraint::Length(logo::HEIGHT + 1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(area);

        frame.render_widget(logo::paragraph(theme.accent), logo_area);

        if let Some(report) = self.controller.loaded() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    report.location.display_name(),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center),
                location_area,
            );
        }

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

        let titles = [
            format!("{}-Day Forecast", self.days),
            "Astronomy".to_string(),
        ];
        frame.render_widget(
            Tabs::new(titles)
                .select(self.sub_tab.index())
                .style(Style::default().fg(theme.muted))
                .highlight_style(
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            sub_tab_area,
        );

        if self.controller.is_loading() {
            self.spinner.render(frame, body, theme);
            return;
        }
        match self.controller.state() {
            FetchState::Loaded(report) => match self.sub_tab {
                SubTab::Forecast => Self::render_days(frame, body, theme, &report.days),
                SubTab::Astronomy => Self::render_astronomy(frame, body, theme, report),
            },
            _ => {
                let message = match self.sub_tab {
                    SubTab::Forecast => "No data available",
                    SubTab::Astronomy => "No astronomy data",
                };
                current_view::render_empty(frame, body, theme, message);
            }
        }
    }

    fn key_hints(&self) -> &'static str {
        "/ search · Enter submit · ←/→ sub-tab"
    }
}
