use once_cell::sync::Lazy;
use regex::Regex;

static TRACK_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"track/(\w+)").unwrap());

/// Scans free text for `track/<id>` substrings in left-to-right order.
///
/// Duplicates and order are preserved; this order defines the rank of each
/// track in the pasted-links analysis path.
pub fn extract_track_ids(text: &str) -> Vec<String> {
    TRACK_LINK
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}

/// Splits raw pasted text on runs of whitespace into one URL per element.
///
/// Used only by the save-songs path, which expects one identifier-bearing
/// URL per element rather than scanning the whole text for track links.
pub fn split_song_urls(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
