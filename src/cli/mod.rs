//! # CLI Module
//!
//! The user-facing command layer of rewindcli. Each command coordinates the
//! Spotify client, the local persistence managers and the analysis core,
//! and presents results as colored status lines and tables.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth authentication flow with PKCE
//! - [`playlists`] - Lists the user's playlists, optionally filtered to
//!   detected top-songs playlists
//! - [`analyze_playlists`] - Cross-year analysis over auto-detected
//!   top-songs playlists (year taken from the playlist name)
//! - [`analyze_links`] - Cross-year analysis over pasted track links,
//!   one input file per year
//! - [`add_songs`] - Saves pasted track links as a year's selection in
//!   local storage
//! - [`sync`] / [`sync_status`] - Batch-syncs detected playlists into local
//!   storage with progress tracking, guarded by an exclusive lock
//! - [`report`] - The storage-side cross-year report with distinct-year
//!   counting
//!
//! ## Data Flow
//!
//! The analyze commands are read-compute-display: fetch from Spotify, run
//! the pure aggregation, print a table, persist nothing. The songs/sync
//! commands are the write path: fetch, then upsert into the saved-songs
//! document that [`report`] later queries.
//!
//! ## Error Presentation
//!
//! Unrecoverable situations (missing token, failed playlist listing) exit
//! through the `error!` macro with a hint at the fixing command. Per-item
//! problems (one unresolvable track, one playlist without a year) are
//! warnings or silent skips and never abort the rest of the operation.

mod analyze;
mod auth;
mod playlists;
mod report;
mod songs;
mod sync;

pub use analyze::analyze_links;
pub use analyze::analyze_playlists;
pub use auth::auth;
pub use playlists::playlists;
pub use report::report;
pub use songs::add_songs;
pub use sync::sync;
pub use sync::sync_status;
