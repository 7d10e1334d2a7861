//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types to make it easier to
//! get started with the library.

pub use crate::connection::{Connection, OpenOptions};
pub use crate::cursor::{Cursor, RowView};
pub use crate::error::SqliteFacadeError;
pub use crate::migrations::Migrator;
pub use crate::results::{ResultSet, Row};
pub use crate::statement::Statement;
pub use crate::types::Value;
