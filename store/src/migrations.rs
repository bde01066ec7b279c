use super::queries;
use crate::errors::{Error, Result};
use log::{info, trace};

use rusqlite::Connection;

macro_rules! migration {
    ( $n:literal, $( $x:literal ),* ) => {
        paste::item! {
            fn [< migration_$n >] (conn: &Connection) -> rusqlite::Result<()> {
                trace!("running migration {}", $n);

                $(
                    conn.execute($x, [])?;
                )*
                queries::set_version(conn, $n)?;
                trace!("finished migration {}", $n);
                Ok(())
            }
        }
    };
}

migration![
    1,
    // IF NOT EXISTS adopts databases created before versioning, which all
    // share this exact layout at user_version 0
    "CREATE TABLE IF NOT EXISTS articles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        url TEXT NOT NULL,
        UNIQUE(user_id, url)
    );"
];

// be sure to increment this everytime a new migration is added
pub const FINAL_VER: u32 = 1;

pub fn migrate(conn: &mut Connection) -> Result<()> {
    let ver = queries::get_version(conn)?;
    info!("database version is currently: {ver} with target ver {FINAL_VER}");
    if ver == FINAL_VER {
        return Ok(());
    }
    if ver > FINAL_VER {
        return Err(Error::UnsupportedVersion {
            found: ver,
            supported: FINAL_VER,
        });
    }

    let tx = conn.transaction()?;
    trace!("starting migration transaction");

    if ver < 1 {
        migration_1(&tx)?;
    }

    trace!("commiting migration transaction");
    tx.commit()?;
    info!("migration successful");
    Ok(())
}
