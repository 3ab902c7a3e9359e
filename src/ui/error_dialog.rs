use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::Theme;
use crate::ui::{Component, Handled};

pub enum ErrorDialogEvent {
    Dismissed,
}

/// Dismissable error popup. While open it traps all input.
pub struct ErrorDialog {
    message: String,
}

impl ErrorDialog {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Component for ErrorDialog {
    type Output = ErrorDialogEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Handled<Self::Output> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => ErrorDialogEvent::Dismissed.into(),
            _ => Handled::Consumed,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = area.centered(Constraint::Percentage(60), Constraint::Percentage(40));

        frame.render_widget(Clear, popup_area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(theme.text),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter or Esc to dismiss",
                Style::default().fg(theme.muted),
            )),
        ];

        let block = Block::default()
            .title(" Error ")
            .title_style(
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.error))
            .style(Style::default().bg(theme.base));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, popup_area);
    }
}
