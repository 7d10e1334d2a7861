//! Ergonomic synchronous layer over the bundled SQLite engine: typed
//! parameter binding, lazy single-pass row cursors, and schema-version
//! helpers for lightweight migrations.
//!
//! The engine itself (SQL parsing, planning, storage, durability) lives in
//! the `rusqlite` driver this crate wraps; nothing here re-implements it.
//! What the crate adds is a small, hard-to-misuse surface: one tagged-union
//! [`Value`] type for parameters and columns, statements whose lifetime and
//! rewind rules are enforced by the borrow checker, and single-row fetches
//! that distinguish "no row" from failure.
//!
//! ```rust
//! use sqlite_facade::prelude::*;
//!
//! fn main() -> Result<(), SqliteFacadeError> {
//!     let db = Connection::open_in_memory()?;
//!     db.execute_batch("CREATE TABLE test (name TEXT)")?;
//!     db.execute("INSERT INTO test VALUES (?1)", &[Value::Text("TOM".into())])?;
//!     db.execute("INSERT INTO test VALUES (?1)", &[Value::Text("JACK".into())])?;
//!
//!     let rows = db.query(
//!         "SELECT * FROM test WHERE name <> ?1",
//!         &[Value::Text("TOM".into())],
//!     )?;
//!     assert_eq!(rows.len(), 1);
//!     assert_eq!(rows.rows[0].get("name").and_then(Value::as_text), Some("JACK"));
//!     Ok(())
//! }
//! ```

pub mod connection;
pub mod cursor;
pub mod error;
pub mod migrations;
mod params;
pub mod prelude;
pub mod results;
pub mod statement;
pub mod types;

pub use connection::{Connection, OpenOptions};
pub use cursor::{Cursor, RowView};
pub use error::SqliteFacadeError;
pub use migrations::Migrator;
pub use results::{ResultSet, Row};
pub use statement::Statement;
pub use types::Value;
