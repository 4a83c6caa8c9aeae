use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Playlist;

// Known naming conventions for annual top-tracks playlists. A playlist
// qualifies if any pattern matches its name, case-insensitively.
static TOP_SONGS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)your top songs \d{4}").unwrap(),
        Regex::new(r"(?i)top songs of \d{4}").unwrap(),
        Regex::new(r"(?i)\d{4} top tracks").unwrap(),
        Regex::new(r"(?i)wrapped \d{4}").unwrap(),
    ]
});

pub fn is_top_songs_playlist(name: &str) -> bool {
    TOP_SONGS_PATTERNS.iter().any(|p| p.is_match(name))
}

/// Filters a playlist listing down to detected top-songs playlists.
///
/// Original order is preserved and playlists covering the same year are not
/// deduplicated.
pub fn identify_top_songs_playlists(playlists: &[Playlist]) -> Vec<Playlist> {
    playlists
        .iter()
        .filter(|p| is_top_songs_playlist(&p.name))
        .cloned()
        .collect()
}
