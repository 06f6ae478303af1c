//! Theme preference store contract and SQLite implementation.
//!
//! # Invariants
//! - An absent row reads as the default theme (light).
//! - Unknown stored text reads as the default theme; the store is
//!   trusted and never errors on content, only on transport.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::state::interaction::Theme;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const THEME_KEY: &str = "theme";

pub type PrefsResult<T> = Result<T, PrefsError>;

/// Preference persistence error.
#[derive(Debug)]
pub enum PrefsError {
    Db(DbError),
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for PrefsError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PrefsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store contract for the persisted theme value.
pub trait PreferenceStore {
    /// Reads the saved theme; absent or unrecognized values yield the
    /// default.
    fn load_theme(&self) -> PrefsResult<Theme>;
    /// Persists the theme immediately (last-write-wins).
    fn save_theme(&self, theme: Theme) -> PrefsResult<()>;
}

/// SQLite-backed preference store.
#[derive(Debug)]
pub struct SqlitePreferenceStore {
    conn: Connection,
}

impl SqlitePreferenceStore {
    /// Wraps an already-bootstrapped connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens (or creates) the preference database at `path`.
    pub fn open(path: impl AsRef<Path>) -> PrefsResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Non-persistent store; preferences reset with the process.
    pub fn in_memory() -> PrefsResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn load_theme(&self) -> PrefsResult<Theme> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM prefs WHERE key = ?1;",
                params![THEME_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match stored {
            None => Ok(Theme::default()),
            Some(value) => Ok(Theme::parse(&value).unwrap_or_else(|| {
                warn!(
                    "event=prefs_load module=prefs status=warn unknown_theme={value} fallback={}",
                    Theme::default().as_str()
                );
                Theme::default()
            })),
        }
    }

    fn save_theme(&self, theme: Theme) -> PrefsResult<()> {
        self.conn.execute(
            "INSERT INTO prefs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![THEME_KEY, theme.as_str()],
        )?;
        Ok(())
    }
}

/// Helper for bootstrap code that must not fail on a broken store:
/// falls back to the default theme and logs the failure.
pub fn load_theme_or_default(store: &impl PreferenceStore) -> Theme {
    match store.load_theme() {
        Ok(theme) => theme,
        Err(err) => {
            warn!("event=prefs_load module=prefs status=error error={err}");
            Theme::default()
        }
    }
}
