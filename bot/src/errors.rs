use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Serenity(#[from] serenity::Error),
    #[error(transparent)]
    Store(#[from] linkstore::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// True when the failure came from the link store being unreachable, which
    /// the user should see as a temporary problem.
    pub const fn is_storage_unavailable(&self) -> bool {
        match self {
            Error::Store(inner) => inner.is_storage_unavailable(),
            _ => false,
        }
    }
}
