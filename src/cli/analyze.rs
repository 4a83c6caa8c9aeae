use tabled::Table;

use crate::{
    analysis, error, info,
    management::TokenManager,
    spotify,
    types::{AnalysisTableRow, SongAnalysis, SongAppearance},
    utils, warning,
};

/// Cross-year analysis over the user's auto-detected top-songs playlists.
///
/// The year of each playlist comes from its name via the loose four-digit
/// rule; playlists whose name yields no year are skipped entirely. A
/// playlist whose tracks cannot be fetched simply contributes nothing.
pub async fn analyze_playlists() {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run rewindcli auth\n Error: {}",
                e
            );
        }
    };

    let playlists = match spotify::playlists::get_user_playlists(&mut token_mgr).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists: {}", e),
    };

    let top_songs_playlists = analysis::identify_top_songs_playlists(&playlists);
    if top_songs_playlists.is_empty() {
        warning!("No top-songs playlists found for this account.");
        return;
    }

    info!(
        "Analyzing {} top-songs playlists...",
        top_songs_playlists.len()
    );

    let mut appearances: Vec<SongAppearance> = Vec::new();

    for playlist in top_songs_playlists {
        let Some(year) = analysis::extract_year(&playlist.name) else {
            continue;
        };

        let tracks =
            match spotify::playlists::get_playlist_tracks(&mut token_mgr, &playlist.id).await {
                Ok(tracks) => tracks,
                Err(e) => {
                    warning!("Failed to fetch tracks for {}: {}", playlist.name, e);
                    continue;
                }
            };

        appearances.extend(analysis::appearances_from_tracks(&tracks, year));
    }

    render_analysis(analysis::aggregate_appearances(appearances));
}

/// Cross-year analysis over pasted track links, one input per year.
///
/// Each input is a `YEAR=FILE` pair; the file's text is scanned for
/// `track/<id>` links in order, and the scan order defines the ranks.
pub async fn analyze_links(inputs: Vec<utils::YearInput>) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run rewindcli auth\n Error: {}",
                e
            );
        }
    };

    let mut appearances: Vec<SongAppearance> = Vec::new();

    for input in inputs {
        let text = match utils::read_text_input(Some(input.path.clone())).await {
            Ok(text) => text,
            Err(e) => {
                warning!("{}", e);
                continue;
            }
        };

        let tracks = spotify::tracks::get_tracks_from_text(&mut token_mgr, &text).await;
        appearances.extend(analysis::appearances_from_tracks(&tracks, input.year));
    }

    if appearances.is_empty() {
        warning!("No tracks resolved from the given inputs.");
        return;
    }

    render_analysis(analysis::aggregate_appearances(appearances));
}

fn render_analysis(analysis: Vec<SongAnalysis>) {
    if analysis.is_empty() {
        info!("Nothing to analyze.");
        return;
    }

    let rows: Vec<AnalysisTableRow> = analysis
        .into_iter()
        .map(|a| AnalysisTableRow {
            score: a.popularity_score,
            track: a.track_name,
            artist: a.artist_name,
            years: utils::join_years(&a.years_appeared),
            appearances: a.total_appearances,
            // rounding happens only here, at display time
            avg_rank: format!("{:.1}", a.average_rank),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
