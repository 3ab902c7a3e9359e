use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use throbber_widgets_tui::WhichUse::Spin;
use throbber_widgets_tui::{BRAILLE_SIX, Throbber, ThrobberState};

use crate::Theme;
use crate::ui::Component;

/// Loading indicator shown while a fetch is in flight.
pub struct Spinner {
    throbber_state: ThrobberState,
    label: &'static str,
}

impl Spinner {
    pub fn new(label: &'static str) -> Self {
        Self {
            throbber_state: ThrobberState::default(),
            label,
        }
    }
}

impl Component for Spinner {
    type Output = ();

    fn on_tick(&mut self) {
        self.throbber_state.calc_next();
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let throbber = Throbber::default()
            .throbber_set(BRAILLE_SIX)
            .use_type(Spin)
            .label(self.label)
            .throbber_style(Style::default().fg(theme.accent))
            .style(Style::default().fg(theme.subtext));

        // Throbber glyph plus a space before the label.
        let width = self.label.len() as u16 + 2;
        let area = area.centered(Constraint::Length(width), Constraint::Length(1));

        frame.render_stateful_widget(throbber, area, &mut self.throbber_state);
    }
}
