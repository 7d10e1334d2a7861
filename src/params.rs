use rusqlite::types::Value as SqlValue;

use crate::error::SqliteFacadeError;
use crate::types::Value;

/// Convert a single facade value into the engine's owned value type.
///
/// Variants without a direct engine mapping (`Bool`, `Timestamp`, `Json`)
/// are lowered to the integer or text form the engine stores.
pub(crate) fn to_engine_value(value: &Value) -> SqlValue {
    match value {
        Value::Int(i) => SqlValue::Integer(*i),
        Value::Float(f) => SqlValue::Real(*f),
        Value::Text(s) => SqlValue::Text(s.clone()),
        Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
        Value::Timestamp(dt) => SqlValue::Text(dt.format("%F %T%.f").to_string()),
        Value::Null => SqlValue::Null,
        Value::Json(jval) => SqlValue::Text(jval.to_string()),
        Value::Blob(bytes) => SqlValue::Blob(bytes.clone()),
        Value::StaticBlob(bytes) => SqlValue::Blob(bytes.to_vec()),
    }
}

/// Bind a parameter list positionally, left to right starting at index 1.
///
/// Previous bindings are cleared first, so a reused statement never carries
/// stale parameter values into its next execution.
///
/// # Errors
///
/// Returns `SqliteFacadeError::ParameterError` if the list length does not
/// match the statement's placeholder count, or the engine's own error if a
/// bind call fails.
pub(crate) fn bind_values(
    stmt: &mut rusqlite::Statement<'_>,
    params: &[Value],
) -> Result<(), SqliteFacadeError> {
    let expected = stmt.parameter_count();
    if params.len() != expected {
        return Err(SqliteFacadeError::ParameterError(format!(
            "statement expects {expected} parameters, {} supplied",
            params.len()
        )));
    }

    stmt.clear_bindings();
    for (i, value) in params.iter().enumerate() {
        let index = i + 1;
        match value {
            // Borrowed blobs go straight to the bind call, skipping the
            // owned conversion.
            Value::StaticBlob(bytes) => stmt.raw_bind_parameter(index, *bytes)?,
            other => stmt.raw_bind_parameter(index, to_engine_value(other))?,
        }
    }
    Ok(())
}
