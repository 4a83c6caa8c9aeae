use std::{io::Error, path::PathBuf};

use crate::types::{SavedSong, YearSongs};

#[derive(Debug)]
pub enum SongsError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for SongsError {
    fn from(err: Error) -> Self {
        SongsError::IoError(err)
    }
}

/// Persisted per-year track selections, one document for all years.
///
/// Selections are keyed by (year, track id): re-saving a track for a year
/// replaces its metadata and position instead of adding a second row.
pub struct SavedSongsManager {
    years: Vec<YearSongs>,
}

impl SavedSongsManager {
    pub fn new() -> Self {
        Self { years: Vec::new() }
    }

    pub async fn load() -> Result<Self, SongsError> {
        let path = Self::cache_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(SongsError::IoError)?;
        let years: Vec<YearSongs> =
            serde_json::from_str(&content).map_err(SongsError::SerdeError)?;
        Ok(Self { years })
    }

    pub async fn persist(&self) -> Result<(), SongsError> {
        let path = Self::cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(SongsError::IoError)?;
        }

        let json =
            serde_json::to_string_pretty(&self.years).map_err(SongsError::SerdeError)?;
        async_fs::write(path, json)
            .await
            .map_err(SongsError::IoError)
    }

    pub fn upsert_song(&mut self, year: i32, song: SavedSong) -> &mut Self {
        if let Some(year_songs) = self.years.iter_mut().find(|ys| ys.year == year) {
            if let Some(existing) = year_songs
                .songs
                .iter_mut()
                .find(|s| s.track_id == song.track_id)
            {
                *existing = song;
            } else {
                year_songs.songs.push(song);
            }
        } else {
            self.years.push(YearSongs {
                year,
                songs: vec![song],
            });
        }
        self
    }

    pub fn songs_for_year(&self, year: i32) -> Option<Vec<SavedSong>> {
        self.years
            .iter()
            .find(|ys| ys.year == year)
            .map(|ys| ys.songs.clone())
    }

    /// Flattens the document into (year, song) pairs for the report query.
    pub fn all_songs(&self) -> Vec<(i32, SavedSong)> {
        self.years
            .iter()
            .flat_map(|ys| ys.songs.iter().map(|s| (ys.year, s.clone())))
            .collect()
    }

    pub fn count_years(&self) -> usize {
        self.years.len()
    }

    pub fn count_songs(&self) -> usize {
        self.years.iter().map(|ys| ys.songs.len()).sum()
    }

    fn cache_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("rewindcli/cache/saved-songs.json");
        path
    }
}
