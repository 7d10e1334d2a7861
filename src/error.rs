use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqliteFacadeError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Parameter conversion error: {0}")]
    ParameterError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),

    #[error("Migration registry error: {0}")]
    MigrationError(String),

    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion {
        db_version: i32,
        latest_supported: i32,
    },
}
