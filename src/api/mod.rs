//! # API Module
//!
//! HTTP endpoints for the local callback server that backs the OAuth flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles the OAuth redirect from Spotify's authorization
//!   server. Completes the PKCE flow by exchanging the authorization code,
//!   together with the stored code verifier, for an access token and placing
//!   it into the shared authentication state.
//! - [`health`] - Health check returning status and version, useful to
//!   verify the callback server is up before starting an auth flow.
//!
//! Both endpoints are plain async functions wired into an
//! [Axum](https://docs.rs/axum) router by [`crate::server`]. The callback
//! receives the shared `Arc<Mutex<Option<PkceToken>>>` state via an
//! Extension layer; [`crate::spotify::auth`] polls the same state for the
//! exchanged token.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
