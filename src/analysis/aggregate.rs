use crate::types::{SongAnalysis, SongAppearance, Track};

/// Points awarded per appearance. Appearing at all, repeatedly, dominates
/// the score; rank only fine-tunes ordering among tracks with equal
/// appearance counts because the rank score is bounded by list length.
pub const WEIGHT_YEARS: u64 = 100;

/// Multiplier for the rank-derived score.
pub const WEIGHT_RANK: u64 = 1;

/// Aggregates a flat list of appearances into scored, ranked track summaries.
///
/// Appearances are grouped by track id in insertion order: the first
/// appearance of a track creates its group, later ones append to it. For
/// each group the summary carries the distinct years (ascending), the exact
/// floating-point mean rank, the raw appearance count and the popularity
/// score described below. Display strings are taken from the first-seen
/// appearance of the track.
///
/// The popularity score of a group is
///
/// ```text
/// appearances * WEIGHT_YEARS + rank_score * WEIGHT_RANK
/// ```
///
/// where `rank_score` sums `(max_rank - rank)` over the group's appearances
/// and `max_rank` is the group's own worst rank number. An appearance at the
/// group's max rank contributes nothing; appearances near the top of a list
/// contribute the most.
///
/// The result is sorted by popularity score descending with a stable sort,
/// so tracks with equal scores keep their group insertion order. Duplicate
/// appearances of a track within one year each count; no within-year
/// deduplication happens here.
///
/// This is a pure function of its input: it never fails, retains no state
/// between invocations, and an empty input yields an empty output.
pub fn aggregate_appearances(appearances: Vec<SongAppearance>) -> Vec<SongAnalysis> {
    let mut analysis: Vec<SongAnalysis> = group_by_track(appearances)
        .into_iter()
        .map(score_group)
        .collect();

    // stable sort: ties keep group insertion order
    analysis.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));
    analysis
}

/// Normalizes an ordered track list into appearances for one year.
///
/// Tracks without an id are dropped first; ranks are 1-based positions in
/// the surviving sequence. Display strings fall back to "Unknown Artist"
/// when a track carries no artist.
pub fn appearances_from_tracks(tracks: &[Track], year: i32) -> Vec<SongAppearance> {
    tracks
        .iter()
        .filter_map(|track| track.id.as_ref().map(|id| (id, track)))
        .enumerate()
        .map(|(index, (id, track))| SongAppearance {
            track_id: id.clone(),
            track_name: track.name.clone(),
            artist_name: track.primary_artist(),
            year,
            rank: index as u32 + 1,
            album_image: track.album_image(),
        })
        .collect()
}

fn group_by_track(appearances: Vec<SongAppearance>) -> Vec<Vec<SongAppearance>> {
    let mut groups: Vec<Vec<SongAppearance>> = Vec::new();

    for appearance in appearances {
        if let Some(group) = groups
            .iter_mut()
            .find(|g| g[0].track_id == appearance.track_id)
        {
            group.push(appearance);
        } else {
            groups.push(vec![appearance]);
        }
    }

    groups
}

// groups are never empty, group_by_track only creates them with a first member
fn score_group(appearances: Vec<SongAppearance>) -> SongAnalysis {
    let mut years_appeared: Vec<i32> = appearances.iter().map(|a| a.year).collect();
    years_appeared.sort_unstable();
    years_appeared.dedup();

    let total_appearances = appearances.len();
    let rank_sum: u64 = appearances.iter().map(|a| a.rank as u64).sum();
    let average_rank = rank_sum as f64 / total_appearances as f64;

    let max_rank = appearances.iter().map(|a| a.rank).max().unwrap_or(0);
    let rank_score: u64 = appearances
        .iter()
        .map(|a| (max_rank - a.rank) as u64)
        .sum();

    let popularity_score = total_appearances as u64 * WEIGHT_YEARS + rank_score * WEIGHT_RANK;

    let first = &appearances[0];
    SongAnalysis {
        track_id: first.track_id.clone(),
        track_name: first.track_name.clone(),
        artist_name: first.artist_name.clone(),
        popularity_score,
        years_appeared,
        average_rank,
        total_appearances,
        album_image: first.album_image.clone(),
    }
}
