//! Connection bootstrap for the preference database.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Returned connections have migrations fully applied.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens the preference database file and applies pending migrations.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let conn = Connection::open(path).map_err(|err| {
        error!("event=db_open module=db status=error mode=file error={err}");
        err
    })?;
    bootstrap(conn, "file")
}

/// Opens an in-memory preference database; used by tests and by
/// callers that do not want persistence.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let conn = Connection::open_in_memory().map_err(|err| {
        error!("event=db_open module=db status=error mode=memory error={err}");
        err
    })?;
    bootstrap(conn, "memory")
}

fn bootstrap(mut conn: Connection, mode: &str) -> DbResult<Connection> {
    let started_at = Instant::now();
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;

    match apply_migrations(&mut conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}
