use std::collections::HashMap;
use std::sync::Arc;

use crate::types::Value;

use super::Row;
use super::row::build_column_index;

/// A fully materialized query result.
///
/// Produced by the one-shot `Connection::query` and by draining a cursor;
/// for row-at-a-time access over large results, step the cursor instead.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// The rows returned by the query
    pub rows: Vec<Row>,
    column_names: Arc<Vec<String>>,
    column_index: Arc<HashMap<String, usize>>,
}

impl ResultSet {
    /// Create an empty result set carrying the given column names.
    #[must_use]
    pub(crate) fn with_columns(column_names: Arc<Vec<String>>) -> Self {
        let column_index = build_column_index(&column_names);
        Self {
            rows: Vec::new(),
            column_names,
            column_index,
        }
    }

    /// The column names shared by every row, in positional order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Append a row built from positional values.
    pub(crate) fn push_values(&mut self, values: Vec<Value>) {
        self.rows.push(Row::from_parts(
            Arc::clone(&self.column_names),
            Arc::clone(&self.column_index),
            values,
        ));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
