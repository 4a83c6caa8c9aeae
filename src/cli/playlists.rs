use tabled::Table;

use crate::{
    analysis, error,
    management::TokenManager,
    spotify,
    types::{Playlist, PlaylistTableRow},
};

pub async fn playlists(top_songs: bool) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run rewindcli auth\n Error: {}",
                e
            );
        }
    };

    let all_playlists = match spotify::playlists::get_user_playlists(&mut token_mgr).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists: {}", e),
    };

    let playlists: Vec<Playlist> = if top_songs {
        analysis::identify_top_songs_playlists(&all_playlists)
    } else {
        all_playlists
    };

    let rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            year: analysis::extract_wrapped_year(&p.name)
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string()),
            tracks: p.tracks.total,
            name: p.name,
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
