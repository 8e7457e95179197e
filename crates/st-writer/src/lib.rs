//! st-writer - Migration SQL file writing for Stratum
//!
//! This crate provides the `QueryWriter` trait used by migration commands to
//! dump the SQL they would execute, the `FileQueryWriter` adapter that
//! normalizes results to a plain `bool`, and the `SqlFileWriter` that lays
//! out the migration file on disk.

pub mod error;
pub mod outcome;
pub mod output;
pub mod query_writer;
pub mod sql_file;

pub use error::{WriteError, WriteResult};
pub use outcome::WriteOutcome;
pub use output::{BufferedOutputWriter, LogOutputWriter, OutputWriter};
pub use query_writer::{FileQueryWriter, QueryWriter};
pub use sql_file::{SqlFileWriter, SqlFileWriterFactory, SqlWriter, SqlWriterFactory};
