use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::error::SqliteFacadeError;
use crate::results::{ResultSet, Row};
use crate::statement::Statement;
use crate::types::Value;

/// An open database handle.
///
/// Owns the engine connection; every statement prepared from it borrows it
/// and is finalized before the connection closes (the borrow checker rejects
/// anything else). Dropping the connection closes the handle; [`Connection::close`]
/// does the same but surfaces the engine's close result.
///
/// A connection is not synchronized: use it from one thread, one logical
/// operation at a time.
#[derive(Debug)]
pub struct Connection {
    conn: rusqlite::Connection,
}

impl Connection {
    /// Open (creating if absent) the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError` when the engine cannot open the file (bad
    /// path, permissions, corrupt store).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SqliteFacadeError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening sqlite database");
        let conn = rusqlite::Connection::open(path).map_err(|e| {
            SqliteFacadeError::ConnectionError(format!(
                "failed to open {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self { conn })
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError` if the engine refuses the handle.
    pub fn open_in_memory() -> Result<Self, SqliteFacadeError> {
        let conn = rusqlite::Connection::open_in_memory().map_err(|e| {
            SqliteFacadeError::ConnectionError(format!("failed to open in-memory database: {e}"))
        })?;
        Ok(Self { conn })
    }

    /// Prepare a statement for repeated use.
    ///
    /// Invalid SQL or references to unknown schema objects surface here, not
    /// at first execution.
    ///
    /// # Errors
    ///
    /// Returns the engine's prepare error.
    pub fn prepare(&self, sql: &str) -> Result<Statement<'_>, SqliteFacadeError> {
        let stmt = self.conn.prepare(sql)?;
        Ok(Statement::new(stmt))
    }

    /// One-shot execution of a data-modifying or DDL statement.
    ///
    /// The transient statement is finalized before this returns. Returns the
    /// number of rows affected.
    ///
    /// # Errors
    ///
    /// Surfaces prepare, bind and step failures.
    pub fn execute(&self, sql: &str, params: &[Value]) -> Result<usize, SqliteFacadeError> {
        let mut stmt = self.prepare(sql)?;
        stmt.execute(params)
    }

    /// One-shot query, materialized.
    ///
    /// The transient statement is finalized before this returns; the result
    /// rows own their data. For lazy row-at-a-time stepping, use
    /// [`Connection::prepare`] and [`Statement::query`](crate::Statement::query)
    /// instead.
    ///
    /// # Errors
    ///
    /// Surfaces prepare, bind, step and column-read failures.
    pub fn query(&self, sql: &str, params: &[Value]) -> Result<ResultSet, SqliteFacadeError> {
        let mut stmt = self.prepare(sql)?;
        let cursor = stmt.query(params)?;
        cursor.into_result_set()
    }

    /// One-shot single-row fetch.
    ///
    /// `Ok(None)` means the query matched zero rows.
    ///
    /// # Errors
    ///
    /// Surfaces prepare, bind, step and column-read failures.
    pub fn query_one(
        &self,
        sql: &str,
        params: &[Value],
    ) -> Result<Option<Row>, SqliteFacadeError> {
        let mut stmt = self.prepare(sql)?;
        stmt.query_one(params)
    }

    /// Execute a batch of semicolon-separated statements without parameters.
    ///
    /// # Errors
    ///
    /// Surfaces the engine error of the first failing statement.
    pub fn execute_batch(&self, sql: &str) -> Result<(), SqliteFacadeError> {
        self.conn.execute_batch(sql).map_err(Into::into)
    }

    /// Begin a transaction.
    ///
    /// Transactions do not nest; beginning while one is open is rejected by
    /// the engine and surfaces as its error.
    ///
    /// # Errors
    ///
    /// Surfaces the engine's error.
    pub fn begin(&self) -> Result<(), SqliteFacadeError> {
        self.execute_batch("BEGIN")
    }

    /// Commit the open transaction.
    ///
    /// # Errors
    ///
    /// Surfaces the engine's error.
    pub fn commit(&self) -> Result<(), SqliteFacadeError> {
        self.execute_batch("COMMIT")
    }

    /// Roll back the open transaction.
    ///
    /// # Errors
    ///
    /// Surfaces the engine's error.
    pub fn rollback(&self) -> Result<(), SqliteFacadeError> {
        self.execute_batch("ROLLBACK")
    }

    /// Rows affected by the most recent data-modifying statement.
    #[must_use]
    pub fn changes(&self) -> u64 {
        self.conn.changes()
    }

    /// Rowid assigned by the most recent successful insert.
    #[must_use]
    pub fn last_insert_rowid(&self) -> i64 {
        self.conn.last_insert_rowid()
    }

    /// Read the user-defined schema version; 0 on a fresh store.
    ///
    /// # Errors
    ///
    /// Surfaces the engine's pragma error.
    pub fn schema_version(&self) -> Result<i32, SqliteFacadeError> {
        self.conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .map_err(Into::into)
    }

    /// Persist a user-defined schema version in the store.
    ///
    /// # Errors
    ///
    /// Surfaces the engine's pragma error.
    pub fn set_schema_version(&self, version: i32) -> Result<(), SqliteFacadeError> {
        self.conn
            .pragma_update(None, "user_version", version)
            .map_err(Into::into)
    }

    /// Close the connection, surfacing the engine's close result.
    ///
    /// Dropping the connection closes it too; this variant exists for callers
    /// that need the error.
    ///
    /// # Errors
    ///
    /// Returns the engine's close error.
    pub fn close(self) -> Result<(), SqliteFacadeError> {
        self.conn.close().map_err(|(_, e)| e.into())
    }
}

/// Builder for opening a connection with engine pragmas applied.
///
/// ```rust,no_run
/// use sqlite_facade::OpenOptions;
/// use std::time::Duration;
///
/// let db = OpenOptions::new()
///     .wal(true)
///     .foreign_keys(true)
///     .busy_timeout(Duration::from_secs(5))
///     .open("app.sqlite")?;
/// # let _ = db;
/// # Ok::<(), sqlite_facade::SqliteFacadeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    wal: bool,
    foreign_keys: bool,
    busy_timeout: Option<Duration>,
}

impl OpenOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the store to write-ahead-log journaling.
    #[must_use]
    pub fn wal(mut self, wal: bool) -> Self {
        self.wal = wal;
        self
    }

    /// Enforce foreign-key constraints on this connection.
    #[must_use]
    pub fn foreign_keys(mut self, foreign_keys: bool) -> Self {
        self.foreign_keys = foreign_keys;
        self
    }

    /// Wait up to `timeout` on a locked store before failing.
    #[must_use]
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = Some(timeout);
        self
    }

    /// Open the database at `path` and apply the configured pragmas.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError` if the open fails, or the engine's error if
    /// a pragma cannot be applied.
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<Connection, SqliteFacadeError> {
        let db = Connection::open(path)?;
        self.apply(&db)?;
        Ok(db)
    }

    /// Open an in-memory database and apply the configured pragmas.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError` if the open fails, or the engine's error if
    /// a pragma cannot be applied.
    pub fn open_in_memory(self) -> Result<Connection, SqliteFacadeError> {
        let db = Connection::open_in_memory()?;
        self.apply(&db)?;
        Ok(db)
    }

    fn apply(&self, db: &Connection) -> Result<(), SqliteFacadeError> {
        if self.wal {
            db.conn.pragma_update(None, "journal_mode", "WAL")?;
        }
        if self.foreign_keys {
            db.conn.pragma_update(None, "foreign_keys", "ON")?;
        }
        if let Some(timeout) = self.busy_timeout {
            db.conn.busy_timeout(timeout)?;
        }
        Ok(())
    }
}
