//! Bottom navigation bar rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{Focus, Tab, UiState};

pub fn render_nav_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let focused = ui_state.focus == Focus::NavBar;

    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Four equally sized tab cells
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    for (i, tab) in Tab::ALL.iter().enumerate() {
        let is_active = *tab == ui_state.active_tab;

        // Active tint vs inactive tint
        let mut style = if is_active {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if focused && i == ui_state.tab_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        let cell = Paragraph::new(Line::from(Span::styled(
            format!("{} {}", tab.icon(), tab.label()),
            style,
        )))
        .centered();
        frame.render_widget(cell, chunks[i]);
    }
}
