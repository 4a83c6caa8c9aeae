use crate::types::{CrossYearSong, SavedSong};

/// Default position cutoff when the caller does not supply one.
pub const DEFAULT_POSITION_THRESHOLD: u32 = 50;

/// Clamps a caller-supplied position threshold into the accepted range.
pub fn clamp_threshold(threshold: u32) -> u32 {
    threshold.clamp(1, 100)
}

/// Computes the cross-year report over saved per-year track selections.
///
/// Only selections at or below the clamped position threshold and inside
/// the optional inclusive year range participate. Selections are grouped by
/// (track id, track name, artist name, album name); a group survives only
/// when it spans more than one distinct year. Storage keys selections by
/// (year, track id), so years are counted distinct here, unlike the
/// aggregator's raw appearance counting.
///
/// Groups are ordered by distinct-year count descending, then by average
/// position ascending.
pub fn cross_year_report(
    songs: &[(i32, SavedSong)],
    threshold: u32,
    min_year: Option<i32>,
    max_year: Option<i32>,
) -> Vec<CrossYearSong> {
    let threshold = clamp_threshold(threshold);

    let mut groups: Vec<(Vec<i32>, Vec<&SavedSong>)> = Vec::new();

    for (year, song) in songs {
        if song.position > threshold {
            continue;
        }
        if min_year.is_some_and(|min| *year < min) {
            continue;
        }
        if max_year.is_some_and(|max| *year > max) {
            continue;
        }

        if let Some((years, group)) = groups.iter_mut().find(|(_, g)| {
            let first = g[0];
            first.track_id == song.track_id
                && first.track_name == song.track_name
                && first.artist_name == song.artist_name
                && first.album_name == song.album_name
        }) {
            years.push(*year);
            group.push(song);
        } else {
            groups.push((vec![*year], vec![song]));
        }
    }

    let mut report: Vec<CrossYearSong> = groups
        .into_iter()
        .filter_map(|(years, group)| summarize_group(years, group))
        .collect();

    report.sort_by(|a, b| {
        b.years_appeared
            .cmp(&a.years_appeared)
            .then(a.average_position.total_cmp(&b.average_position))
    });
    report
}

fn summarize_group(years: Vec<i32>, group: Vec<&SavedSong>) -> Option<CrossYearSong> {
    let mut years_list = years;
    years_list.sort_unstable();
    years_list.dedup();

    // single-year tracks are not cross-year by definition
    if years_list.len() < 2 {
        return None;
    }

    let total_appearances = group.len();
    let position_sum: u64 = group.iter().map(|s| s.position as u64).sum();
    let average_position = position_sum as f64 / total_appearances as f64;
    let best_position = group.iter().map(|s| s.position).min().unwrap_or(0);
    let worst_position = group.iter().map(|s| s.position).max().unwrap_or(0);

    let first = group[0];
    Some(CrossYearSong {
        track_id: first.track_id.clone(),
        track_name: first.track_name.clone(),
        artist_name: first.artist_name.clone(),
        album_name: first.album_name.clone(),
        years_appeared: years_list.len(),
        years_list,
        average_position,
        best_position,
        worst_position,
        total_appearances,
    })
}
