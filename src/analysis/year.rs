use once_cell::sync::Lazy;
use regex::Regex;

static ANY_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

static WRAPPED_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(20\d{2})\b").unwrap());

/// Extracts the first run of four consecutive digits anywhere in the text.
///
/// This is the loose rule used by the playlist-analysis path. It is not
/// anchored to the 2000s, so a name like "1999 remix" yields `Some(1999)`.
/// No plausibility check is applied to the extracted value.
///
/// Returns `None` when the text contains no four-digit run; callers skip
/// the list entirely in that case instead of defaulting to a year.
pub fn extract_year(text: &str) -> Option<i32> {
    ANY_YEAR.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Extracts the first standalone `20xx` token from the text.
///
/// This is the strict rule used when the sync path classifies candidate
/// playlists by name. Only word-bounded years 2000-2099 match, so
/// "1999 remix" yields `None` here while [`extract_year`] would accept it.
pub fn extract_wrapped_year(text: &str) -> Option<i32> {
    WRAPPED_YEAR
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
