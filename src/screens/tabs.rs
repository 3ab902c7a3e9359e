//! The tabbed surface mounted after the splash.
//!
//! All three screens stay mounted; a fetch finishing on a background tab
//! is applied there and simply visible when the user switches back.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};

use crate::Theme;
use crate::core::command::Command;
use crate::core::event::Event;
use crate::core::screen::{Screen, UpdateResult};
use crate::screens::forecast::ForecastScreen;
use crate::screens::home::HomeScreen;
use crate::screens::search::SearchScreen;

/// Tab identity. The icon and title come from this closed mapping;
/// nothing routes on tab names as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Home,
    Search,
    Forecast,
}

impl TabId {
    pub const ALL: [Self; 3] = [Self::Home, Self::Search, Self::Forecast];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Search => "Search",
            Self::Forecast => "Forecast",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Search => "⌕",
            Self::Forecast => "☂",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Search => 1,
            Self::Forecast => 2,
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Home => Self::Search,
            Self::Search => Self::Forecast,
            Self::Forecast => Self::Home,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Home => Self::Forecast,
            Self::Search => Self::Home,
            Self::Forecast => Self::Search,
        }
    }
}

/// Merged result of pumping every screen's `update()`.
pub struct TabUpdate {
    pub commands: Vec<Box<dyn Command>>,
    pub error: Option<String>,
}

pub struct TabSurface {
    active: TabId,
    home: HomeScreen,
    search: SearchScreen,
    forecast: ForecastScreen,
}

impl TabSurface {
    pub const fn new(home: HomeScreen, search: SearchScreen, forecast: ForecastScreen) -> Self {
        Self {
            active: TabId::Home,
            home,
            search,
            forecast,
        }
    }

    /// Queue the startup fetch on every screen.
    pub fn init(&mut self) {
        self.home.init();
        self.search.init();
        self.forecast.init();
    }

    fn active_screen(&mut self) -> &mut dyn Screen {
        match self.active {
            TabId::Home => &mut self.home,
            TabId::Search => &mut self.search,
            TabId::Forecast => &mut self.forecast,
        }
    }

    pub fn handle_tick(&mut self) {
        self.home.handle_tick();
        self.search.handle_tick();
        self.forecast.handle_tick();
    }

    /// Route input to the active screen first; fall back to tab
    /// navigation.
    pub fn handle_input(&mut self, event: &Event) -> bool {
        if self.active_screen().handle_input(event) {
            return true;
        }

        let Event::Key(key) = event else {
            return false;
        };
        match key.code {
            KeyCode::Tab => {
                self.active = self.active.next();
                true
            }
            KeyCode::BackTab => {
                self.active = self.active.prev();
                true
            }
            KeyCode::Char('1') => {
                self.active = TabId::Home;
                true
            }
            KeyCode::Char('2') => {
                self.active = TabId::Search;
                true
            }
            KeyCode::Char('3') => {
                self.active = TabId::Forecast;
                true
            }
            _ => false,
        }
    }

    /// Pump every screen, not just the active one: outcomes may land on
    /// a background tab.
    pub fn update(&mut self) -> TabUpdate {
        let mut commands: Vec<Box<dyn Command>> = Vec::new();
        let mut error: Option<String> = None;

        for result in [
            self.home.update(),
            self.search.update(),
            self.forecast.update(),
        ] {
            match result {
                UpdateResult::Idle => {}
                UpdateResult::Commands(batch) => commands.extend(batch),
                UpdateResult::Error(message) => {
                    if error.is_none() {
                        error = Some(message);
                    }
                }
            }
        }

        TabUpdate { commands, error }
    }

    pub fn view(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [tab_bar, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let titles = TabId::ALL
            .iter()
            .map(|tab| format!(" {} {} ", tab.icon(), tab.title()));
        frame.render_widget(
            Tabs::new(titles)
                .select(self.active.index())
                .style(Style::default().fg(theme.muted))
                .highlight_style(
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            tab_bar,
        );

        let hints = self.active_screen().key_hints();
        let footer_line = if hints.is_empty() {
            "Tab/1-3 switch tab · q quit".to_string()
        } else {
            format!("Tab/1-3 switch tab · {hints} · q quit")
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                footer_line,
                Style::default().fg(theme.muted),
            )))
            .alignment(Alignment::Center),
            footer,
        );

        self.active_screen().view(frame, body, theme);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::weather::WeatherClient;

    fn surface() -> TabSurface {
        let client = WeatherClient::new("test-key");
        TabSurface::new(
            HomeScreen::new(client.clone(), "London".to_string()),
            SearchScreen::new(client.clone(), "London".to_string()),
            ForecastScreen::new(client, "London".to_string(), 3),
        )
    }

    fn press(surface: &mut TabSurface, code: KeyCode) -> bool {
        surface.handle_input(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn tab_cycling_wraps_in_both_directions() {
        let mut surface = surface();
        assert_eq!(surface.active, TabId::Home);

        press(&mut surface, KeyCode::Tab);
        assert_eq!(surface.active, TabId::Search);
        press(&mut surface, KeyCode::Tab);
        assert_eq!(surface.active, TabId::Forecast);
        press(&mut surface, KeyCode::Tab);
        assert_eq!(surface.active, TabId::Home);

        press(&mut surface, KeyCode::BackTab);
        assert_eq!(surface.active, TabId::Forecast);
    }

    #[test]
    fn digit_keys_jump_directly() {
        let mut surface = surface();
        press(&mut surface, KeyCode::Char('3'));
        assert_eq!(surface.active, TabId::Forecast);
        press(&mut surface, KeyCode::Char('2'));
        assert_eq!(surface.active, TabId::Search);
        press(&mut surface, KeyCode::Char('1'));
        assert_eq!(surface.active, TabId::Home);
    }

    #[test]
    fn init_queues_a_fetch_per_screen() {
        let mut surface = surface();
        surface.init();
        let update = surface.update();
        assert_eq!(update.commands.len(), 3);
        assert!(update.error.is_none());
    }

    #[test]
    fn every_tab_has_an_icon_and_title() {
        for tab in TabId::ALL {
            assert!(!tab.icon().is_empty());
            assert!(!tab.title().is_empty());
        }
    }
}
