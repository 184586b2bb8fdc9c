use bookshelf_db::schema::{create_schema, open_database, open_memory, CURRENT_VERSION};

#[test]
fn open_memory_creates_schema() {
    let conn = open_memory().unwrap();

    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='books')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(exists);

    let version: i32 = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn create_schema_is_idempotent() {
    let conn = open_memory().unwrap();
    create_schema(&conn).unwrap();
    create_schema(&conn).unwrap();

    let count: i32 = conn
        .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn open_database_persists_across_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO books (title, author, published_date, price_cents)
             VALUES ('Persisted', 'Nobody', '2001-02-03', 450)",
            [],
        )
        .unwrap();
    }

    let conn = open_database(&path).unwrap();
    let title: String = conn
        .query_row("SELECT title FROM books WHERE id = 1", [], |row| row.get(0))
        .unwrap();
    assert_eq!(title, "Persisted");

    // Reopening must not re-run schema creation and bump the version
    let version: i32 = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}
