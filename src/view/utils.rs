//! Utility functions for rendering UI components

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Extract a short tag from a cover-art URL for the card placeholder.
///
/// The catalog uses picsum URLs of the form `.../id/<n>/200`; the numeric
/// segment is the only part worth showing in a terminal. Anything else
/// falls back to a generic note glyph.
pub fn image_tag(url: &str) -> String {
    let mut segments = url.split('/');
    while let Some(segment) = segments.next() {
        if segment == "id" {
            if let Some(id) = segments.next() {
                if !id.is_empty() {
                    return format!("#{}", id);
                }
            }
        }
    }
    "♪".to_string()
}
