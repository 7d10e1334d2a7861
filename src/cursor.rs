use std::sync::Arc;

use rusqlite::types::ValueRef;

use crate::error::SqliteFacadeError;
use crate::results::{ResultSet, Row};
use crate::types::Value;

/// A forward-only, single-pass sequence of rows produced by stepping a
/// statement.
///
/// Each call to [`Cursor::next`] performs exactly one engine step; nothing is
/// materialized up front. Once the cursor reports exhaustion it stays
/// exhausted; re-running the query requires a fresh call on the statement,
/// which rewinds it. While a cursor is alive the statement it came from is
/// mutably borrowed, so it cannot be re-bound, re-queried or finalized out
/// from under the cursor.
pub struct Cursor<'stmt> {
    rows: rusqlite::Rows<'stmt>,
    column_names: Arc<Vec<String>>,
}

impl<'stmt> Cursor<'stmt> {
    pub(crate) fn new(rows: rusqlite::Rows<'stmt>, column_names: Arc<Vec<String>>) -> Self {
        Self { rows, column_names }
    }

    /// Advance to the next row.
    ///
    /// Returns `Ok(Some(view))` while the engine yields rows and `Ok(None)`
    /// at exhaustion. The returned view borrows the cursor and is only valid
    /// until the next advance.
    ///
    /// # Errors
    ///
    /// Surfaces engine failures raised by the step (e.g. constraint
    /// violations on `INSERT ... RETURNING`).
    pub fn next(&mut self) -> Result<Option<RowView<'_>>, SqliteFacadeError> {
        match self.rows.next()? {
            Some(row) => Ok(Some(RowView {
                row,
                column_names: &self.column_names,
            })),
            None => Ok(None),
        }
    }

    /// The column names of the underlying statement, in positional order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Drain the remaining rows into an owned [`ResultSet`].
    ///
    /// # Errors
    ///
    /// Surfaces engine failures raised while stepping or reading columns.
    pub fn into_result_set(mut self) -> Result<ResultSet, SqliteFacadeError> {
        let mut set = ResultSet::with_columns(Arc::clone(&self.column_names));
        while let Some(row) = self.rows.next()? {
            let mut values = Vec::with_capacity(self.column_names.len());
            for i in 0..self.column_names.len() {
                values.push(read_value(row, i)?);
            }
            set.push_values(values);
        }
        Ok(set)
    }
}

/// A positional view over the current row of a cursor.
///
/// Valid only while the owning cursor stays on this row; the borrow checker
/// rejects use after the cursor advances or is dropped. Typed readers are
/// strict: requesting the wrong type for a column's stored value returns an
/// error instead of a coerced zero. Use [`RowView::value`] for
/// dynamically-typed access.
pub struct RowView<'a> {
    row: &'a rusqlite::Row<'a>,
    column_names: &'a Arc<Vec<String>>,
}

impl RowView<'_> {
    /// Read a column with any type the engine driver can decode.
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range index or a column whose stored
    /// type does not decode into `T`.
    pub fn get<T: rusqlite::types::FromSql>(
        &self,
        index: usize,
    ) -> Result<T, SqliteFacadeError> {
        self.row.get(index).map_err(Into::into)
    }

    /// Read a column as a 32-bit integer.
    ///
    /// # Errors
    ///
    /// Errors on out-of-range index, non-integer column, or overflow.
    pub fn get_int(&self, index: usize) -> Result<i32, SqliteFacadeError> {
        self.get(index)
    }

    /// Read a column as a 64-bit integer.
    pub fn get_long(&self, index: usize) -> Result<i64, SqliteFacadeError> {
        self.get(index)
    }

    /// Read a column as a double-precision float.
    pub fn get_double(&self, index: usize) -> Result<f64, SqliteFacadeError> {
        self.get(index)
    }

    /// Read a column as owned text.
    pub fn get_text(&self, index: usize) -> Result<String, SqliteFacadeError> {
        self.get(index)
    }

    /// Read a column as an owned byte buffer.
    pub fn get_blob(&self, index: usize) -> Result<Vec<u8>, SqliteFacadeError> {
        self.get(index)
    }

    /// Read a column as a dynamically-typed [`Value`].
    ///
    /// # Errors
    ///
    /// Errors only on an out-of-range index.
    pub fn value(&self, index: usize) -> Result<Value, SqliteFacadeError> {
        read_value(self.row, index)
    }

    /// The column names of the producing statement, in positional order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        self.column_names
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Materialize the current row into an owned [`Row`].
    ///
    /// # Errors
    ///
    /// Surfaces engine failures raised while reading columns.
    pub fn to_row(&self) -> Result<Row, SqliteFacadeError> {
        let mut values = Vec::with_capacity(self.column_names.len());
        for i in 0..self.column_names.len() {
            values.push(read_value(self.row, i)?);
        }
        Ok(Row::new(Arc::clone(self.column_names), values))
    }
}

/// Convert the engine's column representation into a facade [`Value`].
pub(crate) fn read_value(
    row: &rusqlite::Row<'_>,
    index: usize,
) -> Result<Value, SqliteFacadeError> {
    match row.get_ref(index)? {
        ValueRef::Null => Ok(Value::Null),
        ValueRef::Integer(i) => Ok(Value::Int(i)),
        ValueRef::Real(f) => Ok(Value::Float(f)),
        ValueRef::Text(bytes) => Ok(Value::Text(String::from_utf8_lossy(bytes).into_owned())),
        ValueRef::Blob(bytes) => Ok(Value::Blob(bytes.to_vec())),
    }
}
