use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
    pub total: u64,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub tracks: PlaylistTracksRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsResponse {
    pub items: Vec<PlaylistItem>,
    pub total: u64,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    // null for removed tracks, id-less for local files; both get dropped
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
}

impl Track {
    pub fn primary_artist(&self) -> String {
        self.artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_else(|| "Unknown Artist".to_string())
    }

    pub fn album_image(&self) -> Option<String> {
        self.album.images.first().map(|i| i.url.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// One observation of a track inside a specific year's ranked list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongAppearance {
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
    pub year: i32,
    pub rank: u32,
    pub album_image: Option<String>,
}

/// A track's combined summary across all of its appearances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongAnalysis {
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
    pub popularity_score: u64,
    pub years_appeared: Vec<i32>,
    pub average_rank: f64,
    pub total_appearances: usize,
    pub album_image: Option<String>,
}

/// One saved per-year track selection, keyed by (year, track id) in storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSong {
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
    pub album_name: String,
    pub album_image: Option<String>,
    pub position: u32,
    pub added_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearSongs {
    pub year: i32,
    pub songs: Vec<SavedSong>,
}

/// Storage-side cross-year summary with distinct-year counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossYearSong {
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
    pub album_name: String,
    pub years_appeared: usize,
    pub years_list: Vec<i32>,
    pub average_position: f64,
    pub best_position: u32,
    pub worst_position: u32,
    pub total_appearances: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncState {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl std::fmt::Display for SyncState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncState::Pending => write!(f, "pending"),
            SyncState::Processing => write!(f, "processing"),
            SyncState::Completed => write!(f, "completed"),
            SyncState::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStatus {
    pub state: SyncState,
    pub progress: u8,
    pub started_at: i64,
    pub updated_at: i64,
    pub completed_at: Option<i64>,
    pub error: Option<String>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub year: String,
    pub tracks: u64,
}

#[derive(Tabled)]
pub struct AnalysisTableRow {
    pub score: u64,
    pub track: String,
    pub artist: String,
    pub years: String,
    pub appearances: usize,
    pub avg_rank: String,
}

#[derive(Tabled)]
pub struct ReportTableRow {
    pub track: String,
    pub artist: String,
    pub years: String,
    pub avg_position: String,
    pub best: u32,
    pub worst: u32,
}
