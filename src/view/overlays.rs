//! Modal overlay rendering (alert notice, help popup)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::ALERT_MESSAGE;

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));
    Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

pub fn render_alert_notice(frame: &mut Frame) {
    let popup_area = centered_popup(frame.area(), ALERT_MESSAGE.len() as u16 + 8, 3);

    // Clear the area behind the popup first
    frame.render_widget(Clear, popup_area);

    let notice = Paragraph::new(ALERT_MESSAGE)
        .centered()
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Notice (Esc to dismiss) ")
                .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(notice, popup_area);
}

pub fn render_help_popup(frame: &mut Frame) {
    let keybindings = [
        ("Tab / Shift+Tab", "Cycle sections"),
        ("↑ / ↓", "Move between sections"),
        ("← / →", "Move within a section"),
        ("Enter", "Select"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_area = centered_popup(frame.area(), 46, keybindings.len() as u16 + 2);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>16}", key),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(desc.to_string(), Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help, popup_area);
}
