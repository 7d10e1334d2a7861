use sqlite_facade::prelude::*;

#[test]
fn rebinding_replaces_previous_values() -> Result<(), Box<dyn std::error::Error>> {
    let db = Connection::open_in_memory()?;
    db.execute_batch("CREATE TABLE people (name TEXT, tag TEXT);")?;
    for name in ["TOM", "JACK", "GEORGE"] {
        db.execute(
            "INSERT INTO people (name) VALUES (?1)",
            &[Value::Text(name.into())],
        )?;
    }

    let mut stmt = db.prepare("UPDATE people SET tag = ?1 WHERE name = ?2")?;

    let affected = stmt.execute(&[Value::Text("first".into()), Value::Text("TOM".into())])?;
    assert_eq!(affected, 1);

    // The second execution must only touch rows matching its own predicate.
    let affected = stmt.execute(&[Value::Text("second".into()), Value::Text("JACK".into())])?;
    assert_eq!(affected, 1);
    assert_eq!(db.changes(), 1);

    let rows = db.query("SELECT name, tag FROM people ORDER BY name", &[])?;
    let tags: Vec<(String, Option<String>)> = rows
        .iter()
        .map(|r| {
            (
                r.get("name").unwrap().as_text().unwrap().to_string(),
                r.get("tag").unwrap().as_text().map(String::from),
            )
        })
        .collect();
    assert_eq!(
        tags,
        vec![
            ("GEORGE".to_string(), None),
            ("JACK".to_string(), Some("second".to_string())),
            ("TOM".to_string(), Some("first".to_string())),
        ]
    );

    Ok(())
}

#[test]
fn parameter_count_mismatch_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let db = Connection::open_in_memory()?;
    db.execute_batch("CREATE TABLE people (name TEXT, tag TEXT);")?;

    let mut stmt = db.prepare("UPDATE people SET tag = ?1 WHERE name = ?2")?;

    let err = stmt
        .execute(&[Value::Text("only-one".into())])
        .unwrap_err();
    assert!(matches!(err, SqliteFacadeError::ParameterError(_)));

    let err = stmt
        .execute(&[
            Value::Text("a".into()),
            Value::Text("b".into()),
            Value::Text("c".into()),
        ])
        .unwrap_err();
    assert!(matches!(err, SqliteFacadeError::ParameterError(_)));

    Ok(())
}
