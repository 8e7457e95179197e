//! Migration SQL file layout and writing.
//!
//! A migration file starts with a generation header, followed by one block
//! per version: a `-- Version <v>` marker, the version's statements each
//! terminated by `;`, and the bookkeeping statement that records (up) or
//! removes (down) the version in the migrations table.

use crate::error::{WriteError, WriteResult};
use crate::outcome::WriteOutcome;
use crate::output::OutputWriter;
use chrono::{DateTime, Utc};
use st_core::sql_utils::version_update_statement;
use st_core::{ColumnName, Direction, QueriesByVersion, TableName};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Writes the SQL for a set of migration versions somewhere.
pub trait SqlWriter {
    /// Write all statements in `queries_by_version`, in mapping order.
    fn write(
        &self,
        queries_by_version: &QueriesByVersion,
        direction: Direction,
    ) -> WriteResult<WriteOutcome>;
}

/// Builds a [`SqlWriter`] for a single destination.
pub trait SqlWriterFactory {
    /// Writer produced by this factory
    type Writer: SqlWriter;

    /// Create a writer bound to `path`
    fn create(
        &self,
        column_name: &ColumnName,
        table_name: &TableName,
        path: &Path,
        output_writer: Option<Arc<dyn OutputWriter>>,
    ) -> WriteResult<Self::Writer>;
}

/// Writes migration SQL to a file, or to a timestamped file inside a directory.
pub struct SqlFileWriter {
    column_name: ColumnName,
    table_name: TableName,
    destination: PathBuf,
    output_writer: Option<Arc<dyn OutputWriter>>,
    generated_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for SqlFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlFileWriter")
            .field("column_name", &self.column_name)
            .field("table_name", &self.table_name)
            .field("destination", &self.destination)
            .field("has_output_writer", &self.output_writer.is_some())
            .field("generated_at", &self.generated_at)
            .finish()
    }
}

impl SqlFileWriter {
    /// Create a writer for `destination`.
    ///
    /// Fails with [`WriteError::MissingDestination`] when the path is empty.
    pub fn new(
        column_name: ColumnName,
        table_name: TableName,
        destination: impl Into<PathBuf>,
        output_writer: Option<Arc<dyn OutputWriter>>,
    ) -> WriteResult<Self> {
        let destination = destination.into();
        if destination.as_os_str().is_empty() {
            return Err(WriteError::MissingDestination);
        }
        Ok(Self {
            column_name,
            table_name,
            destination,
            output_writer,
            generated_at: None,
        })
    }

    /// Pin the generation timestamp used for the header and file name
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// The destination as given, before directory resolution
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Resolve the file that will be written at `now`.
    ///
    /// Existing directories get a `migration_<YYYYmmddHHMMSS>.sql` file (UTC) inside
    /// their canonical path; anything else is used as-is.
    pub fn resolve_path(&self, now: DateTime<Utc>) -> WriteResult<PathBuf> {
        if !self.destination.is_dir() {
            return Ok(self.destination.clone());
        }
        let dir = fs::canonicalize(&self.destination).map_err(|source| WriteError::Io {
            path: self.destination.display().to_string(),
            source,
        })?;
        Ok(dir.join(format!("migration_{}.sql", now.format("%Y%m%d%H%M%S"))))
    }

    /// Render the full file contents
    pub fn render(
        &self,
        queries_by_version: &QueriesByVersion,
        direction: Direction,
        now: DateTime<Utc>,
    ) -> String {
        let mut sql = format!(
            "-- Migration file generated on {} UTC\n",
            now.format("%Y-%m-%d %H:%M:%S")
        );
        for (version, statements) in queries_by_version.iter() {
            sql.push_str(&format!("\n-- Version {}\n", version));
            for statement in statements {
                sql.push_str(statement);
                sql.push_str(";\n");
            }
            sql.push_str(&version_update_statement(
                direction,
                &self.table_name,
                &self.column_name,
                version,
            ));
        }
        sql
    }
}

impl SqlWriter for SqlFileWriter {
    fn write(
        &self,
        queries_by_version: &QueriesByVersion,
        direction: Direction,
    ) -> WriteResult<WriteOutcome> {
        let now = self.generated_at.unwrap_or_else(Utc::now);
        let path = self.resolve_path(now)?;
        let contents = self.render(queries_by_version, direction, now);

        if let Some(output) = &self.output_writer {
            output.write(&format!(
                "\nWriting migration file to \"{}\"",
                path.display()
            ));
        }

        fs::write(&path, &contents).map_err(|source| WriteError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!(
            "Wrote {} bytes ({} versions, {}) to {}",
            contents.len(),
            queries_by_version.len(),
            direction,
            path.display()
        );

        Ok(WriteOutcome::BytesWritten(contents.len()))
    }
}

/// Factory producing [`SqlFileWriter`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlFileWriterFactory;

impl SqlWriterFactory for SqlFileWriterFactory {
    type Writer = SqlFileWriter;

    fn create(
        &self,
        column_name: &ColumnName,
        table_name: &TableName,
        path: &Path,
        output_writer: Option<Arc<dyn OutputWriter>>,
    ) -> WriteResult<SqlFileWriter> {
        SqlFileWriter::new(
            column_name.clone(),
            table_name.clone(),
            path,
            output_writer,
        )
    }
}

#[cfg(test)]
#[path = "sql_file_test.rs"]
mod tests;
