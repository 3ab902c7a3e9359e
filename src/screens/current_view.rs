//! Shared rendering of a current-conditions report.
//!
//! Home and Search show the same card stack, so the presentation lives
//! here once. All imperial figures are derived at render time.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::Theme;
use crate::weather::model::CurrentReport;
use crate::weather::units::{celsius_to_fahrenheit, km_to_miles, kph_to_mph, one_decimal};

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, report: &CurrentReport) {
    let [location_area, conditions_area, details_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(6),
    ])
    .areas(area);

    let location = &report.location;
    let current = &report.current;

    let card = |title: &'static str| {
        Block::default()
            .title(title)
            .title_style(Style::default().fg(theme.accent))
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.muted))
    };
    let label = Style::default().fg(theme.subtext);
    let value = Style::default().fg(theme.text);

    let location_lines = vec![
        Line::from(Span::styled(
            location.display_name(),
            value.add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Local time: ", label),
            Span::styled(location.localtime.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Time zone: ", label),
            Span::styled(location.tz_id.clone(), value),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(location_lines)
            .block(card(" Location "))
            .alignment(Alignment::Center),
        location_area,
    );

    let temp_f = one_decimal(celsius_to_fahrenheit(current.temp_c));
    let feels_f = one_decimal(celsius_to_fahrenheit(current.feelslike_c));
    let condition_lines = vec![
        Line::from(Span::styled(
            format!("{}°C / {temp_f}°F", current.temp_c),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(current.condition.text.clone(), value)),
        Line::from(vec![
            Span::styled("Feels like: ", label),
            Span::styled(format!("{}°C / {feels_f}°F", current.feelslike_c), value),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(condition_lines)
            .block(card(" Conditions "))
            .alignment(Alignment::Center),
        conditions_area,
    );

    let wind_mph = one_decimal(kph_to_mph(current.wind_kph));
    let vis_mi = one_decimal(km_to_miles(current.vis_km));
    let detail_lines = vec![
        Line::from(vec![
            Span::styled("Humidity: ", label),
            Span::styled(format!("{}%", current.humidity), value),
        ]),
        Line::from(vec![
            Span::styled("Wind: ", label),
            Span::styled(
                format!(
                    "{} kph ({wind_mph} mph) {}",
                    current.wind_kph, current.wind_dir
                ),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("UV index: ", label),
            Span::styled(format!("{}", current.uv), value),
        ]),
        Line::from(vec![
            Span::styled("Visibility: ", label),
            Span::styled(format!("{} km ({vis_mi} mi)", current.vis_km), value),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(detail_lines)
            .block(card(" Details "))
            .alignment(Alignment::Center),
        details_area,
    );
}

/// Placeholder body for screens with nothing to show (pre-fetch, or
/// after a failed fetch reverted the view).
pub fn render_empty(frame: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let area = area.centered(Constraint::Percentage(100), Constraint::Length(1));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.muted),
        )))
        .alignment(Alignment::Center),
        area,
    );
}
