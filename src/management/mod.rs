mod auth;
mod songs;
mod sync;

pub use auth::TokenManager;
pub use songs::SavedSongsManager;
pub use songs::SongsError;
pub use sync::SyncError;
pub use sync::SyncLock;
pub use sync::SyncStatusManager;
