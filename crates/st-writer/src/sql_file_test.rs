use super::*;
use crate::output::BufferedOutputWriter;
use chrono::TimeZone;
use st_core::Version;
use tempfile::tempdir;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap()
}

fn writer(path: &Path, output: Option<Arc<dyn OutputWriter>>) -> SqlFileWriter {
    SqlFileWriter::new(
        ColumnName::new("version"),
        TableName::new("migrations"),
        path,
        output,
    )
    .unwrap()
    .with_generated_at(fixed_time())
}

fn sample_queries() -> QueriesByVersion {
    let mut queries = QueriesByVersion::new();
    queries.insert(
        Version::new("20200101120000"),
        ["CREATE TABLE t (id INT)", "CREATE INDEX idx_t ON t (id)"],
    );
    queries.insert(Version::new("20200102120000"), ["ALTER TABLE t ADD name TEXT"]);
    queries
}

#[test]
fn test_new_rejects_empty_destination() {
    let result = SqlFileWriter::new(
        ColumnName::new("version"),
        TableName::new("migrations"),
        "",
        None,
    );
    assert!(matches!(result, Err(WriteError::MissingDestination)));
}

#[test]
fn test_render_up() {
    let w = writer(Path::new("/unused.sql"), None);
    let sql = w.render(&sample_queries(), Direction::Up, fixed_time());

    let expected = "\
-- Migration file generated on 2020-01-01 12:00:00 UTC

-- Version 20200101120000
CREATE TABLE t (id INT);
CREATE INDEX idx_t ON t (id);
INSERT INTO migrations (version) VALUES ('20200101120000');

-- Version 20200102120000
ALTER TABLE t ADD name TEXT;
INSERT INTO migrations (version) VALUES ('20200102120000');
";
    assert_eq!(sql, expected);
}

#[test]
fn test_render_down() {
    let mut queries = QueriesByVersion::new();
    queries.insert(Version::new("20200101120000"), ["DROP TABLE t"]);

    let w = writer(Path::new("/unused.sql"), None);
    let sql = w.render(&queries, Direction::Down, fixed_time());

    assert!(sql.contains("-- Version 20200101120000\nDROP TABLE t;\n"));
    assert!(sql.ends_with("DELETE FROM migrations WHERE version = '20200101120000';\n"));
    assert!(!sql.contains("INSERT INTO"));
}

#[test]
fn test_render_empty_mapping_is_header_only() {
    let w = writer(Path::new("/unused.sql"), None);
    let sql = w.render(&QueriesByVersion::new(), Direction::Up, fixed_time());
    assert_eq!(sql, "-- Migration file generated on 2020-01-01 12:00:00 UTC\n");
}

#[test]
fn test_write_to_file_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.sql");

    let outcome = writer(&path, None)
        .write(&sample_queries(), Direction::Up)
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(outcome, WriteOutcome::BytesWritten(contents.len()));
    assert!(outcome.is_success());
    assert!(contents.starts_with("-- Migration file generated on 2020-01-01 12:00:00 UTC\n"));
}

#[test]
fn test_write_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.sql");
    fs::write(&path, "stale content that is much longer than nothing").unwrap();

    writer(&path, None)
        .write(&QueriesByVersion::new(), Direction::Up)
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("stale"));
}

#[test]
fn test_write_into_directory_uses_timestamped_name() {
    let dir = tempdir().unwrap();

    writer(dir.path(), None)
        .write(&sample_queries(), Direction::Up)
        .unwrap();

    let expected = fs::canonicalize(dir.path())
        .unwrap()
        .join("migration_20200101120000.sql");
    assert!(expected.is_file());
}

#[test]
fn test_resolve_path_keeps_non_directories() {
    let w = writer(Path::new("/does/not/exist/out.sql"), None);
    let resolved = w.resolve_path(fixed_time()).unwrap();
    assert_eq!(resolved, PathBuf::from("/does/not/exist/out.sql"));
}

#[test]
fn test_write_reports_resolved_path_to_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.sql");
    let output = Arc::new(BufferedOutputWriter::new());
    let sink: Arc<dyn OutputWriter> = output.clone();

    writer(&path, Some(sink))
        .write(&sample_queries(), Direction::Up)
        .unwrap();

    assert_eq!(
        output.messages(),
        vec![format!("\nWriting migration file to \"{}\"", path.display())]
    );
}

#[test]
fn test_write_missing_parent_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.sql");

    let err = writer(&path, None)
        .write(&sample_queries(), Direction::Up)
        .unwrap_err();

    match err {
        WriteError::Io { path: reported, .. } => {
            assert_eq!(reported, path.display().to_string());
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_factory_binds_arguments() {
    let writer = SqlFileWriterFactory
        .create(
            &ColumnName::new("applied"),
            &TableName::new("meta.migrations"),
            Path::new("/tmp/out.sql"),
            None,
        )
        .unwrap();
    assert_eq!(writer.destination(), Path::new("/tmp/out.sql"));

    let sql = writer.render(&sample_queries(), Direction::Up, fixed_time());
    assert!(sql.contains("INSERT INTO meta.migrations (applied) VALUES ('20200102120000');"));
}
