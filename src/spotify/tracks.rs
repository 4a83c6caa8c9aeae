use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{analysis, config, management::TokenManager, types::Track, warning};

/// Retrieves metadata for a single track by its Spotify id.
///
/// Implements the same retry discipline as the playlist requests: 502
/// responses are retried after a 10 second delay, 429 responses honor the
/// `Retry-After` header up to 120 seconds. Other errors propagate.
pub async fn get_track(
    token_mgr: &mut TokenManager,
    track_id: &str,
) -> Result<Track, reqwest::Error> {
    let api_url = format!(
        "{uri}/tracks/{id}",
        uri = &config::spotify_apiurl(),
        id = track_id
    );

    loop {
        let token = token_mgr.get_valid_token().await;

        let client = Client::new();
        let response = match client.get(&api_url).bearer_auth(token).send().await {
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

        return response.json::<Track>().await;
    }
}

/// Resolves every `track/<id>` link found in free text to track metadata.
///
/// The scan order of the text defines the result order. Used by the
/// pasted-links analysis path.
pub async fn get_tracks_from_text(token_mgr: &mut TokenManager, text: &str) -> Vec<Track> {
    let track_ids = analysis::extract_track_ids(text);
    resolve_tracks(token_mgr, track_ids).await
}

/// Resolves a pre-split list of URLs, one identifier-bearing URL per element.
///
/// Elements without a recognizable track link are skipped. Used by the
/// save-songs path, which splits pasted text on whitespace first.
pub async fn get_tracks_from_urls(token_mgr: &mut TokenManager, urls: &[String]) -> Vec<Track> {
    let track_ids: Vec<String> = urls
        .iter()
        .flat_map(|url| analysis::extract_track_ids(url))
        .collect();
    resolve_tracks(token_mgr, track_ids).await
}

// One fetch per identifier, sequential and in order. A failed identifier is
// logged and dropped; the survivors keep their relative order, which is what
// assigns their ranks downstream.
async fn resolve_tracks(token_mgr: &mut TokenManager, track_ids: Vec<String>) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    for track_id in track_ids {
        match get_track(token_mgr, &track_id).await {
            Ok(track) => tracks.push(track),
            Err(e) => {
                warning!("Failed to fetch track {}: {}", track_id, e);
            }
        }
    }

    tracks
}
