//! st-core - Core library for Stratum
//!
//! This crate provides the shared types used by the migration writers:
//! version identifiers, migration directions, the ordered queries-by-version
//! mapping, and the migrations table configuration.

pub mod config;
pub mod direction;
pub mod error;
pub mod identifiers;
mod newtype_string;
pub mod queries;
pub mod sql_utils;

pub use config::MigrationsConfig;
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use identifiers::{ColumnName, TableName, Version};
pub use queries::QueriesByVersion;
