use super::*;

#[test]
fn test_default_config() {
    let config = MigrationsConfig::default();
    assert_eq!(config.table_name, DEFAULT_TABLE_NAME);
    assert_eq!(config.column_name, DEFAULT_COLUMN_NAME);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_empty_mapping_uses_defaults() {
    let config: MigrationsConfig = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config, MigrationsConfig::default());
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
table_name: migrations
column_name: applied_version
"#;
    let config: MigrationsConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.table_name, "migrations");
    assert_eq!(config.column_name, "applied_version");
}

#[test]
fn test_parse_rejects_unknown_fields() {
    let yaml = r#"
table_name: migrations
migrations_namespace: App\Migrations
"#;
    let result: Result<MigrationsConfig, _> = serde_yaml::from_str(yaml);
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_empty_table_name() {
    let result: Result<MigrationsConfig, _> = serde_yaml::from_str("table_name: \"\"");
    let err = result.unwrap_err().to_string();
    assert!(err.contains("TableName must not be empty"));
}

#[test]
fn test_new_rejects_empty_names() {
    let err = MigrationsConfig::new("", "version").unwrap_err();
    assert!(err.to_string().contains("table_name"));

    let err = MigrationsConfig::new("migrations", "").unwrap_err();
    assert!(err.to_string().contains("column_name"));
}

#[test]
fn test_validate_rejects_statement_terminators() {
    let err = MigrationsConfig::new("migrations; DROP TABLE users", "version").unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
    assert!(err.to_string().starts_with("[C001]"));
}

#[test]
fn test_schema_qualified_table_is_valid() {
    let config = MigrationsConfig::new("meta.migrations", "version").unwrap();
    assert_eq!(config.table_name, "meta.migrations");
}
