//! Main application model with state management

use super::catalog::{self, Playlist};
use super::types::{Category, RowKind, Tab, UiState};

/// The fixed notice surfaced by the placeholder alert button
pub const ALERT_MESSAGE: &str = "Alert Button pressed";

/// Main application model containing all state
///
/// Everything is owned by the single UI thread; state transitions happen
/// synchronously inside the key handler before the next frame is drawn.
pub struct AppModel {
    pub ui: UiState,
    should_quit: bool,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            ui: UiState::default(),
            should_quit: false,
        }
    }

    // ========================================================================
    // Selection state
    // ========================================================================

    pub fn set_active_category(&mut self, category: Category) {
        if self.ui.active_category == category {
            // Re-selecting the active chip is a no-op
            tracing::debug!(category = category.label(), "category re-selected");
            return;
        }
        tracing::info!(category = category.label(), "category selected");
        self.ui.active_category = category;

        // The popular row may have shrunk; keep its cursor in range
        let visible = self.visible_playlists().len();
        let cursor = self.ui.row_cursor(RowKind::Popular);
        self.ui
            .set_row_cursor(RowKind::Popular, cursor.min(visible.saturating_sub(1)));
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        tracing::info!(tab = tab.label(), "tab selected");
        self.ui.active_tab = tab;
    }

    pub fn select_playlist(&mut self, id: u32) {
        tracing::info!(playlist_id = id, "playlist selected");
        self.ui.active_playlist = Some(id);
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    /// The filtered catalog backing the popular row; recomputed per read
    pub fn visible_playlists(&self) -> Vec<&'static Playlist> {
        catalog::filter_by(self.ui.active_category)
    }

    pub fn row_items(&self, row: RowKind) -> Vec<&'static Playlist> {
        match row {
            RowKind::Popular => self.visible_playlists(),
            RowKind::Recent => catalog::recently_played(),
            RowKind::Recommended => catalog::recommended(),
        }
    }

    // ========================================================================
    // Overlays & lifecycle
    // ========================================================================

    pub fn show_alert(&mut self) {
        tracing::debug!("alert notice opened");
        self.ui.show_alert = true;
    }

    pub fn dismiss_alert(&mut self) {
        tracing::debug!("alert notice dismissed");
        self.ui.show_alert = false;
    }

    pub fn toggle_help(&mut self) {
        self.ui.show_help = !self.ui.show_help;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_matches_fresh_load() {
        let model = AppModel::new();
        assert_eq!(model.ui.active_category, Category::All);
        assert_eq!(model.ui.active_tab, Tab::Home);
        assert_eq!(model.ui.active_playlist, None);
        assert!(!model.should_quit());
    }

    #[test]
    fn test_initial_rows_contain_12_6_and_6_items() {
        let model = AppModel::new();
        assert_eq!(model.row_items(RowKind::Popular).len(), 12);
        assert_eq!(model.row_items(RowKind::Recent).len(), 6);
        assert_eq!(model.row_items(RowKind::Recommended).len(), 6);
    }

    #[test]
    fn test_category_selection_is_exclusive() {
        let mut model = AppModel::new();
        model.set_active_category(Category::Podcasts);
        assert_eq!(model.ui.active_category, Category::Podcasts);
        model.set_active_category(Category::Music);
        assert_eq!(model.ui.active_category, Category::Music);
    }

    #[test]
    fn test_reselecting_active_category_is_a_noop() {
        let mut model = AppModel::new();
        model.set_active_category(Category::Music);
        let before = model.ui.clone();
        model.set_active_category(Category::Music);
        assert_eq!(model.ui.active_category, before.active_category);
        assert_eq!(
            model.ui.row_cursor(RowKind::Popular),
            before.row_cursor(RowKind::Popular)
        );
    }

    #[test]
    fn test_category_change_refilters_popular_row() {
        let mut model = AppModel::new();
        model.set_active_category(Category::Audiobooks);
        let visible = model.visible_playlists();
        assert_eq!(visible.len(), 4);
        assert!(visible.iter().all(|pl| pl.category == Category::Audiobooks));

        // Fixed rows are untouched by the filter
        assert_eq!(model.row_items(RowKind::Recent).len(), 6);
        assert_eq!(model.row_items(RowKind::Recommended).len(), 6);
    }

    #[test]
    fn test_category_change_clamps_popular_cursor() {
        let mut model = AppModel::new();
        model.ui.set_row_cursor(RowKind::Popular, 11);
        model.set_active_category(Category::Podcasts);
        assert!(model.ui.row_cursor(RowKind::Popular) < model.visible_playlists().len());
    }

    #[test]
    fn test_playlist_selection_holds_one_id() {
        let mut model = AppModel::new();
        model.select_playlist(3);
        assert_eq!(model.ui.active_playlist, Some(3));
        model.select_playlist(9);
        assert_eq!(model.ui.active_playlist, Some(9));
    }

    #[test]
    fn test_tab_selection_is_exclusive() {
        let mut model = AppModel::new();
        model.set_active_tab(Tab::Library);
        assert_eq!(model.ui.active_tab, Tab::Library);
        model.set_active_tab(Tab::Home);
        assert_eq!(model.ui.active_tab, Tab::Home);
    }

    #[test]
    fn test_alert_opens_and_dismisses_without_touching_selection() {
        let mut model = AppModel::new();
        model.select_playlist(5);
        model.show_alert();
        assert!(model.ui.show_alert);
        model.dismiss_alert();
        assert!(!model.ui.show_alert);
        assert_eq!(model.ui.active_playlist, Some(5));
        assert_eq!(model.ui.active_category, Category::All);
    }
}
