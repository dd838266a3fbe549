//! Focus cycling, cursor movement and activation

use crate::model::{Category, Focus, RowKind, Tab};
use super::AppController;

impl AppController {
    pub fn cycle_focus_forward(&mut self) {
        self.model.ui.focus = self.model.ui.focus.next();
    }

    pub fn cycle_focus_backward(&mut self) {
        self.model.ui.focus = self.model.ui.focus.prev();
    }

    /// Move the cursor within the focused strip.
    ///
    /// Chip and tab strips wrap around; playlist rows stop at their ends
    /// like a scroll strip. The alert button is a single control.
    pub fn move_cursor(&mut self, forward: bool) {
        match self.model.ui.focus {
            Focus::Categories => {
                let len = Category::ALL.len();
                let cursor = self.model.ui.category_cursor;
                self.model.ui.category_cursor = if forward {
                    (cursor + 1) % len
                } else {
                    (cursor + len - 1) % len
                };
            }
            Focus::NavBar => {
                let len = Tab::ALL.len();
                let cursor = self.model.ui.tab_cursor;
                self.model.ui.tab_cursor = if forward {
                    (cursor + 1) % len
                } else {
                    (cursor + len - 1) % len
                };
            }
            Focus::PopularRow | Focus::RecentRow | Focus::RecommendedRow => {
                let row = match self.model.ui.focus {
                    Focus::PopularRow => RowKind::Popular,
                    Focus::RecentRow => RowKind::Recent,
                    _ => RowKind::Recommended,
                };
                let len = self.model.row_items(row).len();
                let cursor = self.model.ui.row_cursor(row);
                let cursor = if forward {
                    (cursor + 1).min(len.saturating_sub(1))
                } else {
                    cursor.saturating_sub(1)
                };
                self.model.ui.set_row_cursor(row, cursor);
            }
            Focus::AlertButton => {}
        }
    }

    /// Activate the control under the cursor (the TUI equivalent of a tap)
    pub fn activate(&mut self) {
        match self.model.ui.focus {
            Focus::Categories => {
                let category = Category::ALL[self.model.ui.category_cursor];
                self.model.set_active_category(category);
            }
            Focus::PopularRow => {
                let cursor = self.model.ui.row_cursor(RowKind::Popular);
                if let Some(playlist) = self.model.visible_playlists().get(cursor) {
                    self.model.select_playlist(playlist.id);
                }
            }
            // Display-only rows: scrolling but no selection
            Focus::RecentRow | Focus::RecommendedRow => {}
            Focus::AlertButton => {
                self.model.show_alert();
            }
            Focus::NavBar => {
                let tab = Tab::ALL[self.model.ui.tab_cursor];
                self.model.set_active_tab(tab);
            }
        }
    }
}
