//! The compiled-in sample catalog: categories are fixed and playlists are
//! defined once at startup, never created or mutated at runtime.

use super::types::Category;

/// A static sample playlist record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playlist {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    /// Remote cover art; carried as an opaque URL, never fetched here
    pub image: &'static str,
}

pub const PLAYLISTS: [Playlist; 12] = [
    Playlist { id: 1, title: "Top Hits", category: Category::Music, image: "https://picsum.photos/id/101/200" },
    Playlist { id: 2, title: "Daily Mix", category: Category::Music, image: "https://picsum.photos/id/180/200" },
    Playlist { id: 3, title: "Tech Talks", category: Category::Podcasts, image: "https://picsum.photos/id/103/200" },
    Playlist { id: 4, title: "True Crime", category: Category::Podcasts, image: "https://picsum.photos/id/250/200" },
    Playlist { id: 5, title: "Chill Vibes", category: Category::Music, image: "https://picsum.photos/id/39/200" },
    Playlist { id: 6, title: "Workout", category: Category::Music, image: "https://picsum.photos/id/106/200" },
    Playlist { id: 7, title: "Comedy", category: Category::Podcasts, image: "https://picsum.photos/id/107/200" },
    Playlist { id: 8, title: "History", category: Category::Audiobooks, image: "https://picsum.photos/id/108/200" },
    Playlist { id: 9, title: "Science Fiction", category: Category::Audiobooks, image: "https://picsum.photos/id/109/200" },
    Playlist { id: 10, title: "Classics", category: Category::Audiobooks, image: "https://picsum.photos/id/110/200" },
    Playlist { id: 11, title: "Jazz Essentials", category: Category::Music, image: "https://picsum.photos/id/111/200" },
    Playlist { id: 12, title: "Meditation", category: Category::Audiobooks, image: "https://picsum.photos/id/112/200" },
];

/// Filter the catalog by category, preserving catalog order.
///
/// `All` yields the full catalog. Recomputed on every call; the list is
/// twelve items, so there is nothing worth caching.
pub fn filter_by(category: Category) -> Vec<&'static Playlist> {
    PLAYLISTS
        .iter()
        .filter(|pl| category == Category::All || pl.category == category)
        .collect()
}

/// "Recently Played" row contents (first half of the catalog)
pub fn recently_played() -> Vec<&'static Playlist> {
    PLAYLISTS[..6].iter().collect()
}

/// "Recommended For You" row contents (second half of the catalog)
pub fn recommended() -> Vec<&'static Playlist> {
    PLAYLISTS[6..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in PLAYLISTS.iter().enumerate() {
            for b in &PLAYLISTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_filter_all_yields_full_catalog_in_order() {
        let filtered = filter_by(Category::All);
        assert_eq!(filtered.len(), 12);
        for (got, want) in filtered.iter().zip(PLAYLISTS.iter()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn test_filter_yields_only_matching_items() {
        for category in [Category::Music, Category::Podcasts, Category::Audiobooks] {
            let filtered = filter_by(category);
            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|pl| pl.category == category));
        }
    }

    #[test]
    fn test_filter_partitions_catalog() {
        let music = filter_by(Category::Music).len();
        let podcasts = filter_by(Category::Podcasts).len();
        let audiobooks = filter_by(Category::Audiobooks).len();
        assert_eq!(music + podcasts + audiobooks, PLAYLISTS.len());
        assert_eq!(music, 5);
        assert_eq!(podcasts, 3);
        assert_eq!(audiobooks, 4);
    }

    #[test]
    fn test_fixed_rows_split_the_catalog() {
        let recent = recently_played();
        let recommended = recommended();
        assert_eq!(recent.len(), 6);
        assert_eq!(recommended.len(), 6);
        assert_eq!(recent[0].id, 1);
        assert_eq!(recommended[0].id, 7);
        assert_eq!(recommended[5].id, 12);
    }
}
