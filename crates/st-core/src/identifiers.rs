//! Strongly-typed identifiers for migration bookkeeping.

use crate::error::{CoreError, CoreResult};
use crate::newtype_string::define_newtype_string;

define_newtype_string! {
    /// Opaque identifier of a single migration step (e.g. `20200101120000`).
    ///
    /// Versions are never compared by this crate beyond equality; ordering is
    /// decided by whoever builds a [`QueriesByVersion`](crate::QueriesByVersion).
    /// Control characters are rejected: versions end up in single-line SQL
    /// comments of generated migration files.
    pub struct Version;
    valid = is_valid_version, invalid = "Version must not be empty or contain control characters";
}

fn is_valid_version(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_control)
}

define_newtype_string! {
    /// Name of the table that records applied migration versions.
    pub struct TableName;
}

define_newtype_string! {
    /// Name of the column inside the migrations table holding the version.
    pub struct ColumnName;
}

impl Version {
    /// Parse a version identifier, rejecting empty or whitespace-padded input.
    pub fn parse(value: &str) -> CoreResult<Self> {
        if value.trim() != value {
            return Err(CoreError::InvalidVersion {
                reason: format!("'{}' has leading or trailing whitespace", value),
            });
        }
        if value.chars().any(char::is_control) {
            return Err(CoreError::InvalidVersion {
                reason: format!("{:?} contains control characters", value),
            });
        }
        Self::try_new(value).ok_or_else(|| CoreError::InvalidVersion {
            reason: "version must not be empty".to_string(),
        })
    }
}

impl std::str::FromStr for Version {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "identifiers_test.rs"]
mod tests;
