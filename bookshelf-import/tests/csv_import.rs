use bookshelf_db::{count_books, find_book_by_title, list_books, open_memory};
use bookshelf_import::import_rows;
use chrono::NaiveDate;

const SEED: &str = "\
Clean Code,Robert Martin,\"August 1, 2008\",49.99
The Pragmatic Programmer,David Thomas,\"October 30, 1999\",39.95
";

#[test]
fn import_inserts_valid_rows() {
    let conn = open_memory().unwrap();
    let stats = import_rows(&conn, SEED.as_bytes()).unwrap();

    assert_eq!(stats.rows_read, 2);
    assert_eq!(stats.inserted, 2);
    assert_eq!(stats.skipped_existing, 0);
    assert_eq!(stats.skipped_invalid, 0);

    let book = find_book_by_title(&conn, "Clean Code").unwrap().unwrap();
    assert_eq!(book.author, "Robert Martin");
    assert_eq!(
        book.published_date,
        NaiveDate::from_ymd_opt(2008, 8, 1).unwrap()
    );
    assert_eq!(book.price_cents, 4999);
}

#[test]
fn reimport_is_idempotent() {
    let conn = open_memory().unwrap();
    import_rows(&conn, SEED.as_bytes()).unwrap();
    let second = import_rows(&conn, SEED.as_bytes()).unwrap();

    assert_eq!(second.inserted, 0);
    assert_eq!(second.skipped_existing, 2);
    assert_eq!(count_books(&conn).unwrap(), 2);
}

#[test]
fn malformed_row_is_skipped_not_fatal() {
    let seed = "\
Good Book,Some Author,\"January 2, 2001\",10.00
Bad Date,Some Author,\"Januar 2, 2001\",10.00
Bad Price,Some Author,\"January 2, 2001\",ten
Also Good,Some Author,\"March 4, 2003\",12.50
";
    let conn = open_memory().unwrap();
    let stats = import_rows(&conn, seed.as_bytes()).unwrap();

    assert_eq!(stats.rows_read, 4);
    assert_eq!(stats.inserted, 2);
    assert_eq!(stats.skipped_invalid, 2);

    let titles: Vec<String> = list_books(&conn)
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, vec!["Good Book", "Also Good"]);
}

#[test]
fn short_row_is_skipped() {
    let seed = "\
Only A Title
Full Row,Author,\"May 5, 2005\",5
";
    let conn = open_memory().unwrap();
    let stats = import_rows(&conn, seed.as_bytes()).unwrap();

    assert_eq!(stats.inserted, 1);
    assert_eq!(stats.skipped_invalid, 1);
}

#[test]
fn empty_title_row_is_skipped() {
    let seed = ",Anonymous,\"May 5, 2005\",5\n";
    let conn = open_memory().unwrap();
    let stats = import_rows(&conn, seed.as_bytes()).unwrap();

    assert_eq!(stats.inserted, 0);
    assert_eq!(stats.skipped_invalid, 1);
    assert_eq!(count_books(&conn).unwrap(), 0);
}

#[test]
fn duplicate_title_within_one_batch_inserts_once() {
    let seed = "\
Twice,First Author,\"June 6, 2006\",6
Twice,Second Author,\"July 7, 2007\",7
";
    let conn = open_memory().unwrap();
    let stats = import_rows(&conn, seed.as_bytes()).unwrap();

    assert_eq!(stats.inserted, 1);
    assert_eq!(stats.skipped_existing, 1);

    let book = find_book_by_title(&conn, "Twice").unwrap().unwrap();
    assert_eq!(book.author, "First Author");
}

#[test]
fn empty_source_imports_nothing() {
    let conn = open_memory().unwrap();
    let stats = import_rows(&conn, "".as_bytes()).unwrap();

    assert_eq!(stats.rows_read, 0);
    assert_eq!(stats.inserted, 0);
    assert_eq!(count_books(&conn).unwrap(), 0);
}
