//! # Spotify Integration Module
//!
//! The integration layer between rewindcli and the Spotify Web API. It
//! handles authentication, playlist and track retrieval, HTTP error
//! handling and rate limiting, and exposes a small Rust interface to the
//! higher-level CLI and analysis code.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Analysis)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Playlist Operations (listing, track items)
//!     └── Track Resolution (single-track metadata)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier/challenge generation, local
//!   callback server coordination, browser launch, code exchange and token
//!   refresh. No client secret is stored or transmitted.
//! - [`playlists`] - The current user's playlists with limit/offset
//!   pagination, and a playlist's track items with removed/local entries
//!   dropped.
//! - [`tracks`] - Single-track metadata lookup plus the two link-resolution
//!   paths: scanning free text for `track/<id>` links and resolving a
//!   pre-split URL list. Resolution is sequential, one request per
//!   identifier, and a failed identifier is logged and dropped without
//!   aborting the batch.
//!
//! ## Error Handling
//!
//! All request paths follow the same discipline:
//!
//! - **502 Bad Gateway**: automatic retry after a 10 second delay
//! - **429 Too Many Requests**: honor the `Retry-After` header for delays
//!   up to 120 seconds, warn and give up on longer ones
//! - other HTTP or network errors propagate to the caller as
//!   `reqwest::Error`
//!
//! Token expiry is handled transparently: callers hold a
//! [`crate::management::TokenManager`] and every request asks it for a
//! currently-valid access token, refreshing proactively when needed.
//!
//! ## API Coverage
//!
//! - `GET /me/playlists` - the user's playlists (paginated)
//! - `GET /playlists/{id}/tracks` - a playlist's track items (paginated)
//! - `GET /tracks/{id}` - single track metadata
//! - `POST /api/token` - code exchange and token refresh

pub mod auth;
pub mod playlists;
pub mod tracks;
