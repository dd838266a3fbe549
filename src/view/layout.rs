//! Header rendering (avatar, greeting, category chips)

use chrono::Timelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{Category, Focus, UiState};

/// Greeting bucket for a wall-clock hour
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    }
}

pub fn render_header(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(5), // Avatar
            Constraint::Min(0),    // Greeting
        ])
        .split(area);

    let avatar = Paragraph::new("R")
        .centered()
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x6b, 0x4a, 0x3a))
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(avatar, chunks[0]);

    let greeting = greeting_for_hour(chrono::Local::now().hour());
    let greeting = Paragraph::new(greeting)
        .centered()
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(greeting, chunks[1]);
}

pub fn render_category_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let focused = ui_state.focus == Focus::Categories;

    let mut spans: Vec<Span> = Vec::new();
    for (i, category) in Category::ALL.iter().enumerate() {
        let is_active = *category == ui_state.active_category;

        let mut style = if is_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if focused && i == ui_state.category_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        spans.push(Span::styled(format!(" {} ", category.label()), style));
        spans.push(Span::raw("  "));
    }

    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Browse ")
            .padding(Padding::horizontal(1))
            .border_style(border_style),
    );
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_buckets() {
        assert_eq!(greeting_for_hour(5), "Good Morning");
        assert_eq!(greeting_for_hour(11), "Good Morning");
        assert_eq!(greeting_for_hour(12), "Good Afternoon");
        assert_eq!(greeting_for_hour(17), "Good Afternoon");
        assert_eq!(greeting_for_hour(18), "Good Evening");
        assert_eq!(greeting_for_hour(0), "Good Evening");
        assert_eq!(greeting_for_hour(4), "Good Evening");
    }
}
