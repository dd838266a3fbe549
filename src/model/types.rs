//! Core type definitions for the application

/// A genre-like tag used to filter the playlist catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Music,
    Podcasts,
    Audiobooks,
}

impl Category {
    /// Every category, in chip display order
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Music,
        Category::Podcasts,
        Category::Audiobooks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Music => "Music",
            Category::Podcasts => "Podcasts",
            Category::Audiobooks => "Audiobooks",
        }
    }
}

/// One of the four fixed bottom-navigation destinations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Search,
    Library,
    Premium,
}

impl Tab {
    /// Every tab, in bar display order
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Search, Tab::Library, Tab::Premium];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Search => "Search",
            Tab::Library => "Library",
            Tab::Premium => "Premium",
        }
    }

    pub fn icon(self) -> &'static str {
        icon_for_label(self.label())
    }
}

/// Resolve a tab label to its icon glyph.
///
/// Unrecognized labels fall back to a neutral dot rather than erroring;
/// the tab set is closed, so the fallback only matters for stray input.
pub fn icon_for_label(label: &str) -> &'static str {
    match label {
        "Home" => "⌂",
        "Search" => "⌕",
        "Library" => "♫",
        "Premium" => "◆",
        _ => "•",
    }
}

/// Which strip of the screen currently has keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Categories,
    PopularRow,
    RecentRow,
    RecommendedRow,
    AlertButton,
    NavBar,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Categories => Focus::PopularRow,
            Focus::PopularRow => Focus::RecentRow,
            Focus::RecentRow => Focus::RecommendedRow,
            Focus::RecommendedRow => Focus::AlertButton,
            Focus::AlertButton => Focus::NavBar,
            Focus::NavBar => Focus::Categories,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Categories => Focus::NavBar,
            Focus::PopularRow => Focus::Categories,
            Focus::RecentRow => Focus::PopularRow,
            Focus::RecommendedRow => Focus::RecentRow,
            Focus::AlertButton => Focus::RecommendedRow,
            Focus::NavBar => Focus::AlertButton,
        }
    }
}

/// Identifies one of the three playlist rows on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    Popular,
    Recent,
    Recommended,
}

impl RowKind {
    pub fn title(self) -> &'static str {
        match self {
            RowKind::Popular => "Popular Playlists",
            RowKind::Recent => "Recently Played",
            RowKind::Recommended => "Recommended For You",
        }
    }

    fn index(self) -> usize {
        match self {
            RowKind::Popular => 0,
            RowKind::Recent => 1,
            RowKind::Recommended => 2,
        }
    }
}

/// UI state for the application
///
/// The three selection values (category, tab, playlist) are each written
/// only by their own activation handler; focus and cursors are keyboard
/// navigation state layered on top.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_category: Category,
    pub active_tab: Tab,
    pub active_playlist: Option<u32>,
    pub focus: Focus,
    pub category_cursor: usize,
    pub tab_cursor: usize,
    row_cursors: [usize; 3],
    pub show_alert: bool,
    pub show_help: bool,
}

impl UiState {
    pub fn row_cursor(&self, row: RowKind) -> usize {
        self.row_cursors[row.index()]
    }

    pub fn set_row_cursor(&mut self, row: RowKind, cursor: usize) {
        self.row_cursors[row.index()] = cursor;
    }
}
