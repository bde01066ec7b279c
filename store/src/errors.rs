use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing database could not be opened, read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    /// Another caller panicked while holding the connection.
    #[error("storage unavailable: connection lock poisoned")]
    LockPoisoned,

    #[error("database version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("url must not be empty")]
    EmptyUrl,
}

impl Error {
    /// Returns true for the infrastructure failures a caller should present
    /// as "try again later".
    pub const fn is_storage_unavailable(&self) -> bool {
        matches!(
            self,
            Error::StorageUnavailable(_) | Error::LockPoisoned | Error::UnsupportedVersion { .. }
        )
    }
}
