//! Playlist row rendering (horizontally scrollable card strips)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Playlist;
use super::utils::{image_tag, truncate_string};

const CARD_WIDTH: u16 = 20;

/// Render one titled row of playlist cards.
///
/// The strip windows around `cursor` so the highlighted card stays
/// visible; `selectable` rows mark the card matching `active_id`,
/// display-only rows ignore it. An empty `items` slice renders an
/// empty strip.
pub fn render_playlist_row(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[&Playlist],
    active_id: Option<u32>,
    cursor: usize,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if items.is_empty() || inner.width < CARD_WIDTH || inner.height == 0 {
        return;
    }

    let visible = (inner.width / CARD_WIDTH).max(1) as usize;
    let offset = cursor.saturating_sub(visible.saturating_sub(1));

    for (slot, (index, playlist)) in items.iter().enumerate().skip(offset).take(visible).enumerate()
    {
        let card_area = Rect {
            x: inner.x + slot as u16 * CARD_WIDTH,
            y: inner.y,
            width: CARD_WIDTH.min(inner.width - slot as u16 * CARD_WIDTH),
            height: inner.height,
        };
        render_card(
            frame,
            card_area,
            playlist,
            active_id == Some(playlist.id),
            focused && index == cursor,
        );
    }
}

fn render_card(frame: &mut Frame, area: Rect, playlist: &Playlist, is_active: bool, is_cursor: bool) {
    let border_style = if is_cursor {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title_style = if is_active {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner_width = area.width.saturating_sub(2) as usize;

    // Art placeholder standing in for the remote cover image
    let art = "▒".repeat(inner_width);
    let tag = image_tag(playlist.image);

    let lines = vec![
        Line::styled(art, Style::default().fg(Color::DarkGray)),
        Line::styled(tag, Style::default().fg(Color::DarkGray)).centered(),
        Line::styled(truncate_string(playlist.title, inner_width), title_style).centered(),
    ];

    let card = Paragraph::new(lines).block(block);
    frame.render_widget(card, area);
}
