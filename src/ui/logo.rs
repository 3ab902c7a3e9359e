//! The skycast banner, the stand-in for the bundled logo image.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LINES: [&str; 5] = [
    r" ____  _  ____   _____   _    ____ _____ ",
    r"/ ___|| |/ /\ \ / / ___| / \  / ___|_   _|",
    r"\___ \| ' /  \ V / |    / _ \ \___ \ | |  ",
    r" ___) | . \   | || |___/ ___ \ ___) || |  ",
    r"|____/|_|\_\  |_| \____/_/  \_\____/ |_|  ",
];

pub const HEIGHT: u16 = LINES.len() as u16;

/// Centered banner paragraph in the given color.
pub fn paragraph(color: Color) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = LINES
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                *line,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    Paragraph::new(lines).alignment(Alignment::Center)
}
