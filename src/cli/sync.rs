use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;

use crate::{
    analysis, error, info,
    management::{SavedSongsManager, SyncError, SyncLock, SyncStatusManager, TokenManager},
    spotify, success,
    types::{SavedSong, SyncState},
    warning,
};

/// Batch-syncs detected top-songs playlists into local saved-songs storage.
///
/// Progress milestones mirror the job record: 10 after the playlist
/// listing, 20 after classification, 30-90 across the per-playlist loop,
/// 100 on completion. The run is guarded by an exclusive lock so two
/// concurrent syncs cannot interleave writes to the single status record;
/// `--force` takes over a stale lock left behind by a crashed run.
///
/// Saved years are committed one playlist at a time. A failure mid-loop
/// marks the job failed but leaves previously committed years in place.
pub async fn sync(force: bool) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run rewindcli auth\n Error: {}",
                e
            );
        }
    };

    let lock = match acquire_lock(force).await {
        Ok(lock) => lock,
        Err(SyncError::AlreadyRunning) => {
            error!("A sync is already running. Use --force to take over a stale lock.");
        }
        Err(e) => error!("Failed to acquire sync lock: {:?}", e),
    };

    let mut status_mgr = SyncStatusManager::start();
    if let Err(e) = status_mgr.persist().await {
        let _ = lock.release().await;
        error!("Failed to persist sync status: {:?}", e);
    }

    match run_sync(&mut token_mgr, &mut status_mgr).await {
        Ok(message) => {
            let _ = status_mgr.complete().persist().await;
            let _ = lock.release().await;
            success!("{}", message);
        }
        Err(e) => {
            let _ = status_mgr.fail(e.clone()).persist().await;
            let _ = lock.release().await;
            error!("{}", e);
        }
    }
}

pub async fn sync_status() {
    match SyncStatusManager::load().await {
        Ok(manager) => {
            let status = manager.status();
            info!("State: {}", status.state);
            info!("Progress: {}%", status.progress);
            info!("Started: {}", format_timestamp(status.started_at));
            if let Some(completed_at) = status.completed_at {
                info!("Completed: {}", format_timestamp(completed_at));
            }
            if let Some(error) = &status.error {
                warning!("Error: {}", error);
            }
        }
        Err(_) => info!("No sync has been run yet."),
    }
}

async fn acquire_lock(force: bool) -> Result<SyncLock, SyncError> {
    if force {
        SyncLock::force_acquire().await
    } else {
        SyncLock::acquire().await
    }
}

async fn run_sync(
    token_mgr: &mut TokenManager,
    status_mgr: &mut SyncStatusManager,
) -> Result<String, String> {
    persist_progress(status_mgr, 0).await?;

    let playlists = spotify::playlists::get_user_playlists(token_mgr)
        .await
        .map_err(|e| format!("Failed to fetch playlists: {}", e))?;
    persist_progress(status_mgr, 10).await?;

    let top_songs_playlists = analysis::identify_top_songs_playlists(&playlists);
    persist_progress(status_mgr, 20).await?;

    if top_songs_playlists.is_empty() {
        return Ok("No top songs playlists found.".to_string());
    }

    let mut songs_mgr = SavedSongsManager::load()
        .await
        .unwrap_or_else(|_| SavedSongsManager::new());

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let total = top_songs_playlists.len();
    let mut synced = 0;

    for (i, playlist) in top_songs_playlists.iter().enumerate() {
        // strict year rule on this path; no year means the playlist is skipped
        let Some(year) = analysis::extract_wrapped_year(&playlist.name) else {
            continue;
        };

        pb.set_message(format!(
            "Syncing {name} ({current}/{total})",
            name = playlist.name,
            current = i + 1,
            total = total
        ));

        let tracks = match spotify::playlists::get_playlist_tracks(token_mgr, &playlist.id).await
        {
            Ok(tracks) => tracks,
            Err(e) => {
                pb.finish_and_clear();
                return Err(format!(
                    "Failed to fetch tracks for {}: {}",
                    playlist.name, e
                ));
            }
        };

        let added_at = Utc::now().timestamp();
        for (position, track) in tracks.iter().enumerate() {
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
                    position: position as u32 + 1,
                    added_at,
                },
            );
        }

        // commit per playlist; earlier years stay saved if a later one fails
        if let Err(e) = songs_mgr.persist().await {
            pb.finish_and_clear();
            return Err(format!("Failed to persist saved songs: {:?}", e));
        }
        synced += 1;

        let progress = (30 + ((i as u64 + 1) * 60 / total as u64) as u8).min(90);
        persist_progress(status_mgr, progress).await?;

        if i < total - 1 {
            sleep(Duration::from_millis(100)).await;
        }
    }

    pb.finish_and_clear();
    Ok(format!(
        "Synced {} playlists into {} saved years.",
        synced,
        songs_mgr.count_years()
    ))
}

async fn persist_progress(status_mgr: &mut SyncStatusManager, progress: u8) -> Result<(), String> {
    status_mgr
        .set_progress(SyncState::Processing, progress)
        .persist()
        .await
        .map_err(|e| format!("Failed to persist sync status: {:?}", e))
}

fn format_timestamp(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
