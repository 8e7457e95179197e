//! Helpers for the bookkeeping statements appended to migration files.

use crate::direction::Direction;
use crate::identifiers::{ColumnName, TableName, Version};

/// Escape a SQL string literal value by doubling single quotes.
///
/// This is for use inside single-quoted SQL string literals, not identifiers.
///
/// # Examples
/// ```
/// use st_core::sql_utils::escape_sql_string;
/// assert_eq!(escape_sql_string("o'brien"), "o''brien");
/// ```
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// Build the statement that records (`Up`) or forgets (`Down`) a version.
///
/// The returned statement ends with `;` and a newline.
///
/// # Examples
/// ```
/// use st_core::{ColumnName, Direction, TableName, Version};
/// use st_core::sql_utils::version_update_statement;
///
/// let sql = version_update_statement(
///     Direction::Up,
///     &TableName::new("migrations"),
///     &ColumnName::new("version"),
///     &Version::new("20200101120000"),
/// );
/// assert_eq!(sql, "INSERT INTO migrations (version) VALUES ('20200101120000');\n");
/// ```
pub fn version_update_statement(
    direction: Direction,
    table_name: &TableName,
    column_name: &ColumnName,
    version: &Version,
) -> String {
    let version = escape_sql_string(version.as_str());
    match direction {
        Direction::Up => format!(
            "INSERT INTO {} ({}) VALUES ('{}');\n",
            table_name, column_name, version
        ),
        Direction::Down => format!(
            "DELETE FROM {} WHERE {} = '{}';\n",
            table_name, column_name, version
        ),
    }
}
