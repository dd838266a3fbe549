//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (truncation, art tags)
//! - `layout`: Header (avatar, greeting) and category chip bar
//! - `content`: Playlist card rows
//! - `navbar`: Bottom navigation bar
//! - `overlays`: Modal overlays (alert notice, help)

mod content;
mod layout;
mod navbar;
mod overlays;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{AppModel, Focus, RowKind};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, model: &AppModel) {
        let ui_state = &model.ui;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Avatar + greeting
                Constraint::Length(3), // Category chips
                Constraint::Length(7), // Popular Playlists
                Constraint::Length(7), // Recently Played
                Constraint::Length(7), // Recommended For You
                Constraint::Length(3), // Alert button
                Constraint::Min(0),    // Filler
                Constraint::Length(3), // Bottom navigation
            ])
            .split(frame.area());

        layout::render_header(frame, chunks[0]);
        layout::render_category_bar(frame, chunks[1], ui_state);

        // Popular row shows the filtered catalog and carries the selection
        content::render_playlist_row(
            frame,
            chunks[2],
            RowKind::Popular.title(),
            &model.row_items(RowKind::Popular),
            ui_state.active_playlist,
            ui_state.row_cursor(RowKind::Popular),
            ui_state.focus == Focus::PopularRow,
        );

        // The remaining rows are display-only
        content::render_playlist_row(
            frame,
            chunks[3],
            RowKind::Recent.title(),
            &model.row_items(RowKind::Recent),
            None,
            ui_state.row_cursor(RowKind::Recent),
            ui_state.focus == Focus::RecentRow,
        );
        content::render_playlist_row(
            frame,
            chunks[4],
            RowKind::Recommended.title(),
            &model.row_items(RowKind::Recommended),
            None,
            ui_state.row_cursor(RowKind::Recommended),
            ui_state.focus == Focus::RecommendedRow,
        );

        Self::render_alert_button(frame, chunks[5], ui_state.focus == Focus::AlertButton);

        navbar::render_nav_bar(frame, chunks[7], ui_state);

        // Overlays last so they draw above everything else
        if ui_state.show_alert {
            overlays::render_alert_notice(frame);
        }
        if ui_state.show_help {
            overlays::render_help_popup(frame);
        }
    }

    fn render_alert_button(frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let button = Paragraph::new("Alert")
            .centered()
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(button, area);
    }
}
