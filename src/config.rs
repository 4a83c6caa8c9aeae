//! Configuration management for rewindcli.
//!
//! Configuration values come from environment variables, optionally loaded
//! from a `.env` file in the platform-specific local data directory
//! (`rewindcli/.env`). Each accessor reads its variable on demand; all of
//! them panic with a descriptive message when the variable is missing, which
//! surfaces misconfiguration immediately at startup rather than mid-flow.

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from the `.env` file in the local data directory.
///
/// Creates the `rewindcli` data directory if needed and loads variables from
/// `rewindcli/.env` inside it:
/// - Linux: `~/.local/share/rewindcli/.env`
/// - macOS: `~/Library/Application Support/rewindcli/.env`
/// - Windows: `%LOCALAPPDATA%/rewindcli/.env`
///
/// Returns an error string when the directory cannot be created or the file
/// cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("rewindcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(())
}

/// Address and port for the local OAuth callback server, e.g. `127.0.0.1:8080`.
///
/// # Panics
///
/// Panics if `SERVER_ADDRESS` is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Spotify application client ID for the PKCE flow.
///
/// # Panics
///
/// Panics if `SPOTIFY_API_AUTH_CLIENT_ID` is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// OAuth redirect URI; must match the URI registered for the application.
///
/// # Panics
///
/// Panics if `SPOTIFY_API_REDIRECT_URI` is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Scopes requested during authorization (playlist read access).
///
/// # Panics
///
/// Panics if `SPOTIFY_API_AUTH_SCOPE` is not set.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Base URL of Spotify's OAuth authorization endpoint.
///
/// # Panics
///
/// Panics if `SPOTIFY_API_AUTH_URL` is not set.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// URL of the OAuth token exchange endpoint.
///
/// # Panics
///
/// Panics if `SPOTIFY_API_TOKEN_URL` is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Base URL of the Spotify Web API.
///
/// # Panics
///
/// Panics if `SPOTIFY_API_URL` is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}
