//! # Analysis Module
//!
//! The in-process computation layer of rewindcli: everything between "here is
//! a pile of playlist names, track links and saved songs" and "here is a
//! ranked answer".
//!
//! ## Components
//!
//! - [`year`] - Year extraction from free-text playlist names. Two distinct
//!   rules exist on purpose: the playlist-analysis path takes the first run
//!   of four digits anywhere in the name, while the sync path only accepts a
//!   standalone `20xx` token. The rules are kept separate per call site.
//! - [`classify`] - Detects "top songs of a year" playlists by matching a
//!   fixed set of known naming conventions (Wrapped and friends).
//! - [`links`] - Turns pasted free text into ordered track identifiers.
//!   Again two strategies for two call sites: a `track/<id>` scan over the
//!   whole text for the analysis path, and a whitespace split into one URL
//!   per element for the save-songs path.
//! - [`aggregate`] - The cross-year aggregator and popularity scorer. Groups
//!   appearances by track, scores each group and returns a ranked list.
//! - [`report`] - The storage-side cross-year report over saved songs. This
//!   one counts distinct years instead of raw appearances and is a separate
//!   computation from the aggregator.
//!
//! All functions in this module are pure: they hold no state between calls
//! and never perform I/O. Fetching and persistence live in [`crate::spotify`]
//! and [`crate::management`].

pub mod aggregate;
pub mod classify;
pub mod links;
pub mod report;
pub mod year;

pub use aggregate::{aggregate_appearances, appearances_from_tracks};
pub use classify::{identify_top_songs_playlists, is_top_songs_playlist};
pub use links::{extract_track_ids, split_song_urls};
pub use report::cross_year_report;
pub use year::{extract_wrapped_year, extract_year};
