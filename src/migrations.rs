use tracing::{debug, info};

use crate::connection::Connection;
use crate::error::SqliteFacadeError;

type StepFn = Box<dyn Fn(&Connection) -> Result<(), SqliteFacadeError>>;

struct Step {
    version: i32,
    apply: StepFn,
}

/// An ordered registry of schema upgrade steps keyed by target version.
///
/// Running the registry applies every step whose version is strictly greater
/// than the version stored in the database, in order, then records the
/// registry's latest version, all in one transaction. Upgrading a fresh
/// store (version 0) to a registry ending at 3 runs steps 1, 2 and 3.
///
/// ```rust
/// use sqlite_facade::prelude::*;
///
/// let db = Connection::open_in_memory()?;
/// let version = Migrator::new()
///     .batch(1, "CREATE TABLE test (name TEXT)")
///     .up(2, |db| {
///         db.execute("INSERT INTO test VALUES (?1)", &[Value::Text("TOM".into())])?;
///         Ok(())
///     })
///     .run(&db)?;
/// assert_eq!(version, 2);
/// # Ok::<(), SqliteFacadeError>(())
/// ```
#[derive(Default)]
pub struct Migrator {
    steps: Vec<Step>,
}

impl Migrator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the upgrade step that brings a store to `version`.
    #[must_use]
    pub fn up<F>(mut self, version: i32, apply: F) -> Self
    where
        F: Fn(&Connection) -> Result<(), SqliteFacadeError> + 'static,
    {
        self.steps.push(Step {
            version,
            apply: Box::new(apply),
        });
        self
    }

    /// Register a script-only upgrade step, executed as a statement batch.
    #[must_use]
    pub fn batch(self, version: i32, sql: &'static str) -> Self {
        self.up(version, move |db| db.execute_batch(sql))
    }

    /// The version a fully migrated store ends up at; 0 for an empty registry.
    #[must_use]
    pub fn latest_version(&self) -> i32 {
        self.steps.last().map_or(0, |step| step.version)
    }

    /// Bring the store up to the registry's latest version.
    ///
    /// Applies the missing steps inside a single transaction and writes the
    /// new schema version before committing; any failure rolls the whole
    /// upgrade back, leaving version and data untouched. An already
    /// up-to-date store is a no-op.
    ///
    /// Returns the schema version the store is at afterwards.
    ///
    /// # Errors
    ///
    /// - `MigrationError` if step versions are not strictly ascending from 1
    ///   or above.
    /// - `UnsupportedSchemaVersion` if the store's version is newer than the
    ///   registry's latest.
    /// - Any step's own error, after the transaction is rolled back.
    pub fn run(&self, db: &Connection) -> Result<i32, SqliteFacadeError> {
        self.validate()?;

        let current = db.schema_version()?;
        let latest = self.latest_version();
        if current > latest {
            return Err(SqliteFacadeError::UnsupportedSchemaVersion {
                db_version: current,
                latest_supported: latest,
            });
        }
        if current == latest {
            debug!(version = current, "schema already up to date");
            return Ok(current);
        }

        info!(from = current, to = latest, "applying schema migrations");
        db.begin()?;
        let outcome = self.apply_pending(db, current, latest);
        match outcome {
            Ok(()) => {
                db.commit()?;
                Ok(latest)
            }
            Err(e) => {
                db.rollback()?;
                Err(e)
            }
        }
    }

    fn apply_pending(
        &self,
        db: &Connection,
        current: i32,
        latest: i32,
    ) -> Result<(), SqliteFacadeError> {
        for step in self.steps.iter().filter(|s| s.version > current) {
            debug!(version = step.version, "applying migration step");
            (step.apply)(db)?;
        }
        db.set_schema_version(latest)
    }

    fn validate(&self) -> Result<(), SqliteFacadeError> {
        let mut previous = 0;
        for step in &self.steps {
            if step.version <= previous {
                return Err(SqliteFacadeError::MigrationError(format!(
                    "step versions must ascend strictly from 1; found {} after {}",
                    step.version, previous
                )));
            }
            previous = step.version;
        }
        Ok(())
    }
}
