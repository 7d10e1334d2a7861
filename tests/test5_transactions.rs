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
fn changes_reports_affected_rows() -> Result<(), Box<dyn std::error::Error>> {
    let db = seeded_db()?;

    let affected = db.execute(
        "UPDATE test SET name = ?1 WHERE name <> ?2",
        &[Value::Text("PAUL".into()), Value::Text("TOM".into())],
    )?;
    assert_eq!(affected, 2);
    assert_eq!(db.changes(), 2);

    let affected = db.execute(
        "UPDATE test SET name = ?1 WHERE name = ?2",
        &[Value::Text("NOBODY".into()), Value::Text("RINGO".into())],
    )?;
    assert_eq!(affected, 0);
    assert_eq!(db.changes(), 0);

    Ok(())
}

#[test]
fn rollback_restores_pre_transaction_values() -> Result<(), Box<dyn std::error::Error>> {
    let db = seeded_db()?;

    db.begin()?;
    db.execute("UPDATE test SET name = ?1", &[Value::Text("JIM".into())])?;
    assert_eq!(db.changes(), 3);
    db.rollback()?;

    let jims = db
        .query_one(
            "SELECT COUNT(1) FROM test WHERE name = ?1",
            &[Value::Text("JIM".into())],
        )?
        .unwrap();
    assert_eq!(*jims.get_by_index(0).unwrap().as_int().unwrap(), 0);

    let rows = db.query("SELECT name FROM test ORDER BY name", &[])?;
    let names: Vec<&str> = rows
        .iter()
        .map(|r| r.get("name").unwrap().as_text().unwrap())
        .collect();
    assert_eq!(names, vec!["GEORGE", "JACK", "TOM"]);

    Ok(())
}

#[test]
fn commit_makes_changes_durable() -> Result<(), Box<dyn std::error::Error>> {
    let db = seeded_db()?;

    db.begin()?;
    db.execute(
        "UPDATE test SET name = ?1 WHERE name = ?2",
        &[Value::Text("PAUL".into()), Value::Text("GEORGE".into())],
    )?;
    db.commit()?;

    let pauls = db
        .query_one(
            "SELECT COUNT(1) FROM test WHERE name = ?1",
            &[Value::Text("PAUL".into())],
        )?
        .unwrap();
    assert_eq!(*pauls.get_by_index(0).unwrap().as_int().unwrap(), 1);

    Ok(())
}

#[test]
fn nested_begin_surfaces_engine_failure() -> Result<(), Box<dyn std::error::Error>> {
    let db = seeded_db()?;

    db.begin()?;
    assert!(db.begin().is_err());
    db.rollback()?;

    Ok(())
}

#[test]
fn last_insert_rowid_tracks_inserts() -> Result<(), Box<dyn std::error::Error>> {
    let db = seeded_db()?;

    db.execute(
        "INSERT INTO test (name) VALUES (?1)",
        &[Value::Text("FRANK".into())],
    )?;
    let id = db.last_insert_rowid();
    assert!(id > 0);

    let row = db
        .query_one(
            "SELECT rowid FROM test WHERE name = ?1",
            &[Value::Text("FRANK".into())],
        )?
        .unwrap();
    assert_eq!(*row.get_by_index(0).unwrap().as_int().unwrap(), id);

    Ok(())
}
