use std::sync::Arc;

use crate::cursor::Cursor;
use crate::error::SqliteFacadeError;
use crate::params::bind_values;
use crate::results::Row;
use crate::types::Value;

/// A prepared statement owned by the caller for reuse.
///
/// Created by [`Connection::prepare`](crate::Connection::prepare). The
/// compiled plan is released when the statement is dropped, or earlier via
/// [`Statement::finalize`]; either way exactly once. A statement borrows its
/// connection, so it cannot outlive it.
///
/// Every `execute`/`query`/`query_one` call starts a fresh bind/step cycle:
/// the engine-level rewind happens when the previous execution completed (or
/// its cursor was dropped), and previous parameter bindings are cleared
/// before the new list is bound.
pub struct Statement<'conn> {
    stmt: rusqlite::Statement<'conn>,
    column_names: Arc<Vec<String>>,
}

impl<'conn> Statement<'conn> {
    pub(crate) fn new(stmt: rusqlite::Statement<'conn>) -> Self {
        let column_names = Arc::new(
            stmt.column_names()
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>(),
        );
        Self { stmt, column_names }
    }

    /// Bind the parameter list and run the statement to completion,
    /// discarding any rows. Returns the number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError` on a parameter-count mismatch,
    /// `ExecutionError` if the statement turns out to produce rows, or the
    /// engine's own error if binding or stepping fails.
    pub fn execute(&mut self, params: &[Value]) -> Result<usize, SqliteFacadeError> {
        bind_values(&mut self.stmt, params)?;
        match self.stmt.raw_execute() {
            Ok(affected) => Ok(affected),
            Err(rusqlite::Error::ExecuteReturnedResults) => {
                Err(SqliteFacadeError::ExecutionError(
                    "statement produced rows; use query for row-producing SQL".into(),
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Bind the parameter list and begin stepping lazily.
    ///
    /// The returned cursor holds a mutable borrow of this statement for its
    /// whole lifetime; drop it to rewind the statement for the next call.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError` on a parameter-count mismatch or the engine's
    /// error if a bind call fails.
    pub fn query(&mut self, params: &[Value]) -> Result<Cursor<'_>, SqliteFacadeError> {
        bind_values(&mut self.stmt, params)?;
        let column_names = Arc::clone(&self.column_names);
        Ok(Cursor::new(self.stmt.raw_query(), column_names))
    }

    /// Bind the parameter list, step exactly once and materialize the first
    /// row, if any.
    ///
    /// `Ok(None)` means the query matched zero rows; an `Err` is an actual
    /// failure. The two are never conflated.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError` on a parameter-count mismatch or the engine's
    /// error if binding, stepping or column reads fail.
    pub fn query_one(
        &mut self,
        params: &[Value],
    ) -> Result<Option<Row>, SqliteFacadeError> {
        let mut cursor = self.query(params)?;
        match cursor.next()? {
            Some(view) => Ok(Some(view.to_row()?)),
            None => Ok(None),
        }
    }

    /// Number of columns the statement produces.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Column names in positional order, captured at prepare time.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Number of parameter placeholders in the statement.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.stmt.parameter_count()
    }

    /// Drop all current parameter bindings.
    ///
    /// `execute`/`query`/`query_one` do this automatically; it is exposed for
    /// callers that bind through [`Statement::query`] and want to scrub
    /// sensitive values early.
    pub fn clear_bindings(&mut self) {
        self.stmt.clear_bindings();
    }

    /// Release the compiled plan now, surfacing any deferred engine error.
    ///
    /// Dropping the statement has the same effect minus the error report.
    ///
    /// # Errors
    ///
    /// Returns the engine's error for the statement, if it holds one.
    pub fn finalize(self) -> Result<(), SqliteFacadeError> {
        self.stmt.finalize().map_err(Into::into)
    }
}
