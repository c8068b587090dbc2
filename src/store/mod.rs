//! Durable credential records — SQLite-backed table.
//!
//! One table, `passwords`, holds `(id, service, username, password)`
//! rows where the password column is an opaque sealed blob. Lookup
//! identity is the `(service, username)` pair, matched exactly and
//! case-sensitively. The pair is NOT unique: duplicates are permitted,
//! reads return the first row by insertion order, and update/delete
//! affect every matching row.
//!
//! Every statement autocommits; no transaction spans two logical
//! operations.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::errors::Result;

/// One stored credential row.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub id: i64,
    pub service: String,
    pub username: String,
    pub sealed_password: Vec<u8>,
}

/// SQLite-backed credential table.
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open (or create) the record database at `path` and ensure the
    /// schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Restrict permissions on the database file (owner-only).
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(path, perms);
        }

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Create the credential table if it does not exist. Idempotent,
    /// safe to run on every startup.
    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS passwords (
                id       INTEGER PRIMARY KEY AUTOINCREMENT,
                service  TEXT NOT NULL,
                username TEXT NOT NULL,
                password BLOB NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Append a new record and return its assigned id.
    pub fn insert(&self, service: &str, username: &str, sealed_password: &[u8]) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO passwords (service, username, password) VALUES (?1, ?2, ?3)",
            rusqlite::params![service, username, sealed_password],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Return the first record (by insertion order) matching both
    /// fields exactly, or `None`.
    pub fn find_first(&self, service: &str, username: &str) -> Result<Option<CredentialRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, service, username, password
             FROM passwords
             WHERE service = ?1 AND username = ?2
             ORDER BY id
             LIMIT 1",
        )?;

        let mut rows = stmt.query_map(rusqlite::params![service, username], |row| {
            Ok(CredentialRecord {
                id: row.get(0)?,
                service: row.get(1)?,
                username: row.get(2)?,
                sealed_password: row.get(3)?,
            })
        })?;

        match rows.next() {
            Some(record) => Ok(Some(record?)),
            None => Ok(None),
        }
    }

    /// Replace the sealed password of every row matching both fields.
    /// Returns the number of rows affected (0 = no match).
    pub fn update_password(
        &self,
        service: &str,
        username: &str,
        new_sealed_password: &[u8],
    ) -> Result<usize> {
        let affected = self.conn.execute(
            "UPDATE passwords SET password = ?1 WHERE service = ?2 AND username = ?3",
            rusqlite::params![new_sealed_password, service, username],
        )?;
        Ok(affected)
    }

    /// Remove every row matching both fields. Returns the number of
    /// rows deleted.
    pub fn delete(&self, service: &str, username: &str) -> Result<usize> {
        let deleted = self.conn.execute(
            "DELETE FROM passwords WHERE service = ?1 AND username = ?2",
            rusqlite::params![service, username],
        )?;
        Ok(deleted)
    }

    /// Return the path helper for the database file (for display).
    pub fn db_path(vault_dir: &Path) -> PathBuf {
        vault_dir.join("passwords.db")
    }
}
