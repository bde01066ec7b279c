mod errors;
mod migrations;
mod queries;
mod reader;
pub mod structs;
mod writer;

pub use errors::{Error, Result};
pub use reader::LinkReader;
pub use structs::{AddOutcome, RemoveOutcome, SavedLink};
pub use writer::LinkWriter;

use log::{debug, info};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

pub(crate) mod connections {
    use crate::errors::Result;
    use rusqlite::Connection;

    pub trait GetConnection {
        /// Runs `f` with exclusive access to the underlying connection for the
        /// duration of one unit of work.
        fn with_connection<T, F>(&self, f: F) -> Result<T>
        where
            F: FnOnce(&mut Connection) -> Result<T>;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    InMemory,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub location: DbLocation,
    // how long a statement waits on another handle's lock before failing
    pub busy_timeout: Duration,
}

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl StoreConfig {
    pub fn file(path: impl Into<PathBuf>) -> StoreConfig {
        StoreConfig {
            location: DbLocation::File(path.into()),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub const fn in_memory() -> StoreConfig {
        StoreConfig {
            location: DbLocation::InMemory,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> StoreConfig {
        self.busy_timeout = busy_timeout;
        self
    }
}

/// Owns the connection to the articles database. Cheap to share behind an
/// `Arc`; every operation locks the connection for a single statement or
/// transaction.
#[derive(Debug)]
pub struct LinkStore {
    conn: Mutex<Connection>,
}

#[inline(always)]
fn open_database(config: &StoreConfig) -> rusqlite::Result<Connection> {
    let conn = match &config.location {
        DbLocation::File(path) => Connection::open(path)?,
        DbLocation::InMemory => Connection::open_in_memory()?,
    };
    conn.busy_timeout(config.busy_timeout)?;
    Ok(conn)
}

impl LinkStore {
    /// Opens the database described by `config` and brings its schema up to
    /// date. Safe to call on every start, an up to date database is left as is.
    pub fn open(config: &StoreConfig) -> Result<LinkStore> {
        debug!("opening link store at {:?}", config.location);
        let mut conn = open_database(config)?;
        migrations::migrate(&mut conn)?;
        info!("link store ready");
        Ok(LinkStore {
            conn: Mutex::new(conn),
        })
    }
}

impl connections::GetConnection for LinkStore {
    #[inline]
    fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut conn = self.conn.lock().map_err(|_| Error::LockPoisoned)?;
        f(&mut *conn)
    }
}

impl LinkReader for LinkStore {}

impl LinkWriter for LinkStore {}
