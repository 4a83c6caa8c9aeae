use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    management::TokenManager,
    types::{GetUserPlaylistsResponse, Playlist, PlaylistItemsResponse, Track},
    warning,
};

const PLAYLISTS_PAGE_LIMIT: u64 = 50;
const TRACKS_PAGE_LIMIT: u64 = 100;

/// Retrieves all playlists of the authenticated user.
///
/// Pages through `GET /me/playlists` with limit/offset pagination until the
/// reported total is reached. Pages are fetched one at a time; 502 responses
/// are retried after a 10 second delay and 429 responses honor the
/// `Retry-After` header before the page is requested again.
///
/// # Arguments
///
/// * `token_mgr` - token handle for the current session; asked for a valid
///   access token before every request
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Playlist>)` - every playlist of the user, in listing order
/// - `Err(reqwest::Error)` - network error, API error, or HTTP error
pub async fn get_user_playlists(
    token_mgr: &mut TokenManager,
) -> Result<Vec<Playlist>, reqwest::Error> {
    let mut all_playlists: Vec<Playlist> = Vec::new();
    let mut offset: u64 = 0;

    loop {
        let api_url = format!(
            "{uri}/me/playlists?limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            limit = PLAYLISTS_PAGE_LIMIT,
            offset = offset
        );

        let res = fetch_page::<GetUserPlaylistsResponse>(token_mgr, &api_url).await?;

        let total = res.total;
        let page_len = res.items.len() as u64;
        all_playlists.extend(res.items);
        offset += PLAYLISTS_PAGE_LIMIT;

        if page_len == 0 || all_playlists.len() as u64 >= total {
            return Ok(all_playlists);
        }
    }
}

/// Retrieves the ordered track listing of a playlist.
///
/// Pages through `GET /playlists/{id}/tracks`. Items whose track object is
/// missing (removed tracks) or has no id (local files) are dropped; the
/// returned order is the playlist order of the surviving tracks, which is
/// the rank-defining order for the analysis paths.
pub async fn get_playlist_tracks(
    token_mgr: &mut TokenManager,
    playlist_id: &str,
) -> Result<Vec<Track>, reqwest::Error> {
    let mut tracks: Vec<Track> = Vec::new();
    let mut fetched: u64 = 0;
    let mut offset: u64 = 0;

    loop {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks?limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            id = playlist_id,
            limit = TRACKS_PAGE_LIMIT,
            offset = offset
        );

        let res = fetch_page::<PlaylistItemsResponse>(token_mgr, &api_url).await?;

        let total = res.total;
        let page_len = res.items.len() as u64;
        fetched += page_len;

        tracks.extend(
            res.items
                .into_iter()
                .filter_map(|item| item.track)
                .filter(|track| track.id.is_some()),
        );

        offset += TRACKS_PAGE_LIMIT;

        if page_len == 0 || fetched >= total {
            return Ok(tracks);
        }
    }
}

async fn fetch_page<T: serde::de::DeserializeOwned>(
    token_mgr: &mut TokenManager,
    api_url: &str,
) -> Result<T, reqwest::Error> {
    loop {
        let token = token_mgr.get_valid_token().await;

        let client = Client::new();
        let response = match client.get(api_url).bearer_auth(token).send().await {
            Ok(resp) => resp,
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        // check for retry-after header
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry_after) = response.headers().get("retry-after") {
                let retry_after = retry_after
                    .to_str()
                    .unwrap_or("0")
                    .parse::<u64>()
                    .unwrap_or(0);
                if retry_after <= 120 {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue; // retry
                }
                warning!(
                    "Retry-After of {} seconds is abnormally high. Try again later.",
                    retry_after
                );
            }
        }

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                if let Some(status) = err.status() {
                    if status == StatusCode::BAD_GATEWAY {
                        sleep(Duration::from_secs(10)).await;
                        continue; // retry
                    }
                }
                return Err(err); // propagate other errors
            }
        };

        return response.json::<T>().await;
    }
}
