use std::{
    io::{Error, ErrorKind},
    path::PathBuf,
};

use chrono::Utc;

use crate::types::{SyncState, SyncStatus};

#[derive(Debug)]
pub enum SyncError {
    IoError(Error),
    SerdeError(serde_json::Error),
    AlreadyRunning,
}

impl From<Error> for SyncError {
    fn from(err: Error) -> Self {
        SyncError::IoError(err)
    }
}

/// The single per-user sync status record, overwritten in place.
pub struct SyncStatusManager {
    status: SyncStatus,
}

impl SyncStatusManager {
    pub fn start() -> Self {
        let now = Utc::now().timestamp();
        Self {
            status: SyncStatus {
                state: SyncState::Pending,
                progress: 0,
                started_at: now,
                updated_at: now,
                completed_at: None,
                error: None,
            },
        }
    }

    pub async fn load() -> Result<Self, SyncError> {
        let path = Self::status_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(SyncError::IoError)?;
        let status: SyncStatus =
            serde_json::from_str(&content).map_err(SyncError::SerdeError)?;
        Ok(Self { status })
    }

    pub async fn persist(&self) -> Result<(), SyncError> {
        let path = Self::status_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(SyncError::IoError)?;
        }

        let json =
            serde_json::to_string_pretty(&self.status).map_err(SyncError::SerdeError)?;
        async_fs::write(path, json).await.map_err(SyncError::IoError)
    }

    pub fn set_progress(&mut self, state: SyncState, progress: u8) -> &mut Self {
        self.status.state = state;
        self.status.progress = progress;
        self.status.updated_at = Utc::now().timestamp();
        self
    }

    pub fn complete(&mut self) -> &mut Self {
        let now = Utc::now().timestamp();
        self.status.state = SyncState::Completed;
        self.status.progress = 100;
        self.status.completed_at = Some(now);
        self.status.updated_at = now;
        self
    }

    pub fn fail(&mut self, error: String) -> &mut Self {
        self.status.state = SyncState::Failed;
        self.status.error = Some(error);
        self.status.updated_at = Utc::now().timestamp();
        self
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    fn status_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("rewindcli/state/sync-status.json");
        path
    }
}

/// Exclusive lock guarding the sync against a second concurrent run.
///
/// The status record is a single row overwritten in place, so two
/// interleaved syncs would corrupt it. The lock is a `create_new` file:
/// whoever creates it owns the sync until release.
pub struct SyncLock {
    path: PathBuf,
}

impl SyncLock {
    pub async fn acquire() -> Result<Self, SyncError> {
        let path = Self::lock_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(SyncError::IoError)?;
        }

        match async_fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(_) => Ok(Self { path }),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(SyncError::AlreadyRunning),
            Err(e) => Err(SyncError::IoError(e)),
        }
    }

    /// Removes a stale lock (e.g. after a crash) and acquires a fresh one.
    pub async fn force_acquire() -> Result<Self, SyncError> {
        let _ = async_fs::remove_file(Self::lock_path()).await;
        Self::acquire().await
    }

    pub async fn release(self) -> Result<(), SyncError> {
        async_fs::remove_file(&self.path)
            .await
            .map_err(SyncError::IoError)
    }

    fn lock_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("rewindcli/state/sync.lock");
        path
    }
}
