use chrono::Utc;

use crate::{
    analysis, error,
    management::{SavedSongsManager, TokenManager},
    spotify, success,
    types::SavedSong,
    utils, warning,
};

/// Saves pasted track links as the given year's selection.
///
/// The pasted text is split on whitespace into one URL per element, each
/// URL is resolved sequentially, and the surviving tracks are upserted into
/// the year's saved songs with their position in the resolved order. Only
/// the number of saved songs is reported; individual resolution failures
/// have already been logged and dropped upstream.
pub async fn add_songs(year: i32, file: Option<String>) {
    let text = match utils::read_text_input(file).await {
        Ok(text) => text,
        Err(e) => error!("{}", e),
    };

    if text.trim().is_empty() {
        warning!("No song links provided.");
        return;
    }

    let urls = analysis::split_song_urls(&text);

    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run rewindcli auth\n Error: {}",
                e
            );
        }
    };

    let tracks = spotify::tracks::get_tracks_from_urls(&mut token_mgr, &urls).await;
    if tracks.is_empty() {
        warning!("No tracks could be resolved from the given links.");
        return;
    }

    let mut songs_mgr = SavedSongsManager::load()
        .await
        .unwrap_or_else(|_| SavedSongsManager::new());

    let added_at = Utc::now().timestamp();
    let mut saved = 0;

    for (index, track) in tracks.iter().enumerate() {
        let Some(track_id) = &track.id else {
            continue;
        };

        songs_mgr.upsert_song(
            year,
            SavedSong {
                track_id: track_id.clone(),
                track_name: track.name.clone(),
                artist_name: track.primary_artist(),
                album_name: track.album.name.clone(),
                album_image: track.album_image(),
                position: index as u32 + 1,
                added_at,
            },
        );
        saved += 1;
    }

    match songs_mgr.persist().await {
        Ok(_) => success!("Successfully saved {} songs for {}.", saved, year),
        Err(e) => error!("Failed to persist saved songs: {:?}", e),
    }
}
