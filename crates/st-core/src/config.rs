//! Configuration for the migrations bookkeeping table.
//!
//! `MigrationsConfig` is designed to be embedded in a host application's own
//! configuration; it is deserialized by whatever loader that application uses.

use crate::error::{CoreError, CoreResult};
use crate::identifiers::{ColumnName, TableName};
use serde::{Deserialize, Serialize};

/// Default name of the table recording applied versions
pub const DEFAULT_TABLE_NAME: &str = "migration_versions";

/// Default name of the version column
pub const DEFAULT_COLUMN_NAME: &str = "version";

/// Where applied migration versions are recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MigrationsConfig {
    /// Table holding one row per applied version
    #[serde(default = "default_table_name")]
    pub table_name: TableName,

    /// Column of `table_name` that stores the version identifier
    #[serde(default = "default_column_name")]
    pub column_name: ColumnName,
}

fn default_table_name() -> TableName {
    TableName::new(DEFAULT_TABLE_NAME)
}

fn default_column_name() -> ColumnName {
    ColumnName::new(DEFAULT_COLUMN_NAME)
}

impl Default for MigrationsConfig {
    fn default() -> Self {
        Self {
            table_name: default_table_name(),
            column_name: default_column_name(),
        }
    }
}

impl MigrationsConfig {
    /// Build a config from raw names, rejecting empty ones
    pub fn new(table_name: &str, column_name: &str) -> CoreResult<Self> {
        let config = Self {
            table_name: TableName::try_new(table_name).ok_or_else(|| CoreError::ConfigInvalid {
                message: "table_name must not be empty".to_string(),
            })?,
            column_name: ColumnName::try_new(column_name).ok_or_else(|| {
                CoreError::ConfigInvalid {
                    message: "column_name must not be empty".to_string(),
                }
            })?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that names can be spliced into generated bookkeeping SQL.
    ///
    /// Names are written unquoted, so whitespace and statement terminators
    /// are rejected.
    pub fn validate(&self) -> CoreResult<()> {
        for (field, value) in [
            ("table_name", self.table_name.as_str()),
            ("column_name", self.column_name.as_str()),
        ] {
            if value.chars().any(|c| c.is_whitespace() || c == ';') {
                return Err(CoreError::ConfigInvalid {
                    message: format!(
                        "{} '{}' must not contain whitespace or ';'",
                        field, value
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
