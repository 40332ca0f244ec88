//! Explicitly constructed application state.
//!
//! `AppState` owns the database location and is built once at startup,
//! then shared behind an `Arc` by every handler. Each request opens its
//! own connection — the workload is read-only, so there is no shared
//! mutable state beyond the database itself.

use std::path::PathBuf;

use rusqlite::Connection;

use crate::db::{self, DatabaseError};

pub struct AppState {
    database_path: PathBuf,
}

impl AppState {
    /// Build state and verify the store once: opens the database, which
    /// runs pending migrations, so a bad path fails at startup rather
    /// than on the first request.
    pub fn new(database_path: PathBuf) -> Result<Self, DatabaseError> {
        db::open_database(&database_path)?;
        Ok(Self { database_path })
    }

    /// Open a connection for one request.
    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        db::open_database(&self.database_path)
    }

    pub fn database_path(&self) -> &PathBuf {
        &self.database_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("directory.db");
        let state = AppState::new(path.clone()).unwrap();
        assert!(path.exists());
        assert!(state.open_db().is_ok());
    }

    #[test]
    fn unreachable_path_fails_at_startup() {
        let result = AppState::new(PathBuf::from("/nonexistent/dir/directory.db"));
        assert!(result.is_err());
    }
}
