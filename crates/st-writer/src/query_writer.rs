//! Writing the queries of pending migrations to a file.

use crate::error::WriteResult;
use crate::output::OutputWriter;
use crate::sql_file::{SqlFileWriterFactory, SqlWriter, SqlWriterFactory};
use st_core::{ColumnName, Direction, MigrationsConfig, QueriesByVersion, TableName};
use std::path::Path;
use std::sync::Arc;

/// Writes the SQL of a set of migrations to `path` instead of executing it.
pub trait QueryWriter {
    /// Returns `true` when the queries were written.
    ///
    /// Errors from the underlying writer are returned untouched.
    fn write(
        &self,
        path: &Path,
        direction: Direction,
        queries_by_version: &QueriesByVersion,
    ) -> WriteResult<bool>;
}

/// [`QueryWriter`] that delegates to a fresh [`SqlWriter`] per call.
///
/// The column name, table name and output sink given here are passed through
/// to the writer unchanged, together with the destination path of each call.
pub struct FileQueryWriter<F = SqlFileWriterFactory> {
    column_name: ColumnName,
    table_name: TableName,
    output_writer: Option<Arc<dyn OutputWriter>>,
    factory: F,
}

impl FileQueryWriter {
    /// Create a writer producing migration files on disk
    pub fn new(
        column_name: ColumnName,
        table_name: TableName,
        output_writer: Option<Arc<dyn OutputWriter>>,
    ) -> Self {
        Self::with_factory(column_name, table_name, output_writer, SqlFileWriterFactory)
    }

    /// Create a writer from the migrations table configuration
    pub fn from_config(
        config: &MigrationsConfig,
        output_writer: Option<Arc<dyn OutputWriter>>,
    ) -> WriteResult<Self> {
        config.validate()?;
        Ok(Self::new(
            config.column_name.clone(),
            config.table_name.clone(),
            output_writer,
        ))
    }
}

impl<F: SqlWriterFactory> FileQueryWriter<F> {
    /// Create a writer that builds its SQL writers with `factory`
    pub fn with_factory(
        column_name: ColumnName,
        table_name: TableName,
        output_writer: Option<Arc<dyn OutputWriter>>,
        factory: F,
    ) -> Self {
        Self {
            column_name,
            table_name,
            output_writer,
            factory,
        }
    }

    pub fn column_name(&self) -> &ColumnName {
        &self.column_name
    }

    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }
}

impl<F: SqlWriterFactory> QueryWriter for FileQueryWriter<F> {
    fn write(
        &self,
        path: &Path,
        direction: Direction,
        queries_by_version: &QueriesByVersion,
    ) -> WriteResult<bool> {
        log::debug!(
            "Writing {} migration version(s) ({}) to {}",
            queries_by_version.len(),
            direction,
            path.display()
        );

        let writer = self.factory.create(
            &self.column_name,
            &self.table_name,
            path,
            self.output_writer.clone(),
        )?;

        // Writers may report a byte count; callers only ever see a bool
        Ok(writer.write(queries_by_version, direction)?.is_success())
    }
}

#[cfg(test)]
#[path = "query_writer_test.rs"]
mod tests;
