use sqlite_facade::prelude::*;

fn seeded_db() -> Result<Connection, SqliteFacadeError> {
    let db = Connection::open_in_memory()?;
    db.execute_batch("CREATE TABLE test (name TEXT);")?;
    for name in ["TOM", "JACK", "GEORGE"] {
        db.execute(
            "INSERT INTO test VALUES (?1)",
            &[Value::Text(name.into())],
        )?;
    }
    Ok(db)
}

#[test]
fn cursor_is_single_pass() -> Result<(), Box<dyn std::error::Error>> {
    let db = seeded_db()?;
    let mut stmt = db.prepare("SELECT name FROM test ORDER BY name")?;
    let mut cursor = stmt.query(&[])?;

    let mut names = Vec::new();
    while let Some(row) = cursor.next()? {
        names.push(row.get_text(0)?);
    }
    assert_eq!(names, vec!["GEORGE", "JACK", "TOM"]);

    // Exhausted cursors stay exhausted; iterating again yields zero rows.
    assert!(cursor.next()?.is_none());
    assert!(cursor.next()?.is_none());

    Ok(())
}

#[test]
fn dropping_a_cursor_rewinds_the_statement() -> Result<(), Box<dyn std::error::Error>> {
    let db = seeded_db()?;
    let mut stmt = db.prepare("SELECT name FROM test ORDER BY name")?;

    // Abandon the cursor after a single step.
    {
        let mut cursor = stmt.query(&[])?;
        let first = cursor.next()?.unwrap();
        assert_eq!(first.get_text(0)?, "GEORGE");
    }

    // A fresh query call starts over from the first row.
    let mut cursor = stmt.query(&[])?;
    assert_eq!(cursor.next()?.unwrap().get_text(0)?, "GEORGE");

    Ok(())
}

#[test]
fn cursor_materializes_into_result_set() -> Result<(), Box<dyn std::error::Error>> {
    let db = seeded_db()?;
    let mut stmt = db.prepare("SELECT name FROM test WHERE name <> ?1 ORDER BY name")?;

    let cursor = stmt.query(&[Value::Text("TOM".into())])?;
    assert_eq!(cursor.column_names(), &["name".to_string()]);

    let set = cursor.into_result_set()?;
    assert_eq!(set.len(), 2);
    assert_eq!(set.column_names(), &["name".to_string()]);
    let names: Vec<&str> = set
        .iter()
        .map(|r| r.get("name").unwrap().as_text().unwrap())
        .collect();
    assert_eq!(names, vec!["GEORGE", "JACK"]);

    Ok(())
}

#[test]
fn explicit_finalize_reports_statement_errors() -> Result<(), Box<dyn std::error::Error>> {
    let db = seeded_db()?;
    let mut stmt = db.prepare("SELECT name FROM test")?;

    let mut cursor = stmt.query(&[])?;
    assert!(cursor.next()?.is_some());
    drop(cursor);

    // A cleanly used statement finalizes without error.
    stmt.finalize()?;

    Ok(())
}

#[test]
fn row_views_materialize_to_owned_rows() -> Result<(), Box<dyn std::error::Error>> {
    let db = seeded_db()?;
    let mut stmt = db.prepare("SELECT name FROM test ORDER BY name")?;
    let mut cursor = stmt.query(&[])?;

    let owned: Row = cursor.next()?.unwrap().to_row()?;
    // The owned row stays valid after the cursor advances past it.
    assert_eq!(cursor.next()?.unwrap().get_text(0)?, "JACK");
    assert_eq!(owned.get("name").unwrap().as_text().unwrap(), "GEORGE");
    assert_eq!(owned.get_by_index(0).unwrap().as_text().unwrap(), "GEORGE");
    assert!(owned.get("missing").is_none());

    Ok(())
}
