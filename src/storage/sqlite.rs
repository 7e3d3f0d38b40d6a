//! SQLite-backed local storage
//!
//! One row per key in a single table. The database lives in the storage
//! directory (`<data dir>/eventbooker` unless overridden).

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::StorageError;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

const DB_FILE: &str = "storage.db";

type Result<T> = std::result::Result<T, StorageError>;

/// Persistent key-value store in a SQLite database
pub struct SqliteStore {
    conn: Connection,
    db_path: PathBuf,
}

impl SqliteStore {
    /// Default storage directory (`~/.local/share/eventbooker` on Linux)
    pub fn default_dir() -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(base.join("eventbooker"))
    }

    /// Resolve the storage directory from an optional override
    pub fn resolve_dir(dir_override: Option<&Path>) -> Result<PathBuf> {
        match dir_override {
            Some(dir) => Ok(dir.to_path_buf()),
            None => Self::default_dir(),
        }
    }

    /// Open or create the store in a specific directory.
    ///
    /// On Unix a new directory is created 0700 and the database file exists
    /// with 0600 before SQLite writes to it. Journal files inherit the
    /// database file's mode.
    pub fn open_at(dir: &Path) -> Result<Self> {
        create_private_dir(dir)
            .map_err(|e| StorageError::Io(format!("Failed to create storage dir: {}", e)))?;

        let db_path = dir.join(DB_FILE);
        create_private_file(&db_path)
            .map_err(|e| StorageError::Io(format!("Failed to create storage file: {}", e)))?;
        let conn = Connection::open(&db_path)?;

        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Storage schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            std::fs::remove_file(&db_path)
                .map_err(|e| StorageError::Io(format!("Failed to remove old storage: {}", e)))?;
            return Self::open_at(dir);
        }

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        // The store holds bearer credentials
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&db_path, perms)
                .map_err(|e| StorageError::Io(format!("Failed to restrict permissions: {}", e)))?;
        }

        Ok(Self { conn, db_path })
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

/// Create the file if missing, owner-only on Unix
fn create_private_file(path: &Path) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(false);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path).map(drop)
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO local_storage (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM local_storage WHERE key = ?1", [key])?;
        log::debug!("Removed {} storage entr(ies) for key {}", deleted, key);
        Ok(())
    }
}
