use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::Theme;
use crate::ui::{Component, Handled};

#[derive(Debug, PartialEq, Eq)]
pub enum SearchBarEvent {
    Submitted(String),
}

/// Inline single-line location input.
///
/// Unfocused, the bar only reacts to `/` (grab focus). Focused, it traps
/// every key: Enter submits the raw value and releases focus, Esc just
/// releases focus. The submitted value is NOT validated here; blank-query
/// handling belongs to the screens.
pub struct SearchBar {
    value: String,
    cursor: usize,
    placeholder: &'static str,
    focused: bool,
}

impl SearchBar {
    pub const fn new(placeholder: &'static str) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder,
            focused: false,
        }
    }

    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn delete_char_before_cursor(&mut self) {
        if let Some(c) = self.value[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.value.remove(self.cursor);
        }
    }

    fn delete_char_at_cursor(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    fn move_cursor_left(&mut self) {
        if let Some(c) = self.value[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    fn move_cursor_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn clear_line(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

impl Component for SearchBar {
    type Output = SearchBarEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Handled<Self::Output> {
        if !self.focused {
            if key.code == KeyCode::Char('/') {
                self.focused = true;
                return Handled::Consumed;
            }
            return Handled::Ignored;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => {
                self.focused = false;
                SearchBarEvent::Submitted(self.value.clone()).into()
            }
            (KeyCode::Esc, _) => {
                self.focused = false;
                Handled::Consumed
            }
            (KeyCode::Backspace, _) => {
                self.delete_char_before_cursor();
                Handled::Consumed
            }
            (KeyCode::Delete, _) => {
                self.delete_char_at_cursor();
                Handled::Consumed
            }
            (KeyCode::Left, _) => {
                self.move_cursor_left();
                Handled::Consumed
            }
            (KeyCode::Right, _) => {
                self.move_cursor_right();
                Handled::Consumed
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                Handled::Consumed
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = self.value.len();
                Handled::Consumed
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.clear_line();
                Handled::Consumed
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.insert_char(c);
                Handled::Consumed
            }
            // Trap everything else so tab-switching keys don't fire mid-edit.
            _ => Handled::Consumed,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border_color = if self.focused {
            theme.accent
        } else {
            theme.muted
        };
        let block = Block::default()
            .title(" Search city or location ")
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color));

        let line = if self.value.is_empty() && !self.focused {
            Line::from(Span::styled(
                self.placeholder,
                Style::default().fg(theme.muted),
            ))
        } else {
            let (before, after) = self.value.split_at(self.cursor);
            let cursor_char = after.chars().next().unwrap_or(' ');
            let rest: String = after.chars().skip(1).collect();

            let text_style = Style::default().fg(theme.text);
            if self.focused {
                let cursor_style = Style::default()
                    .fg(theme.base)
                    .bg(theme.text)
                    .add_modifier(Modifier::BOLD);
                Line::from(vec![
                    Span::styled(before.to_string(), text_style),
                    Span::styled(cursor_char.to_string(), cursor_style),
                    Span::styled(rest, text_style),
                ])
            } else {
                Line::from(Span::styled(self.value.clone(), text_style))
            }
        };

        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(bar: &mut SearchBar, text: &str) {
        for c in text.chars() {
            bar.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn slash_grabs_focus_and_enter_submits() {
        let mut bar = SearchBar::new("Enter city name");
        assert!(!bar.is_focused());
        assert_eq!(bar.handle_key(key(KeyCode::Char('x'))), Handled::Ignored);

        bar.handle_key(key(KeyCode::Char('/')));
        assert!(bar.is_focused());

        type_str(&mut bar, "Paris");
        match bar.handle_key(key(KeyCode::Enter)) {
            Handled::Event(SearchBarEvent::Submitted(value)) => assert_eq!(value, "Paris"),
            _ => panic!("expected a submission"),
        }
        assert!(!bar.is_focused());
    }

    #[test]
    fn editing_handles_multibyte_input() {
        let mut bar = SearchBar::new("");
        bar.handle_key(key(KeyCode::Char('/')));
        type_str(&mut bar, "Zürich");

        bar.handle_key(key(KeyCode::Backspace));
        bar.handle_key(key(KeyCode::Backspace));
        type_str(&mut bar, "ch");

        match bar.handle_key(key(KeyCode::Enter)) {
            Handled::Event(SearchBarEvent::Submitted(value)) => assert_eq!(value, "Zürich"),
            _ => panic!("expected a submission"),
        }
    }

    #[test]
    fn focused_bar_traps_tab_switch_keys() {
        let mut bar = SearchBar::new("");
        bar.handle_key(key(KeyCode::Char('/')));
        assert!(bar.handle_key(key(KeyCode::Tab)).is_consumed());
        assert!(bar.handle_key(key(KeyCode::Char('1'))).is_consumed());
    }
}
