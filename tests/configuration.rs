use foodgram::Config;
use foodgram_shopping::Multiplicity;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_toml() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("foodgram.toml");
    std::fs::write(
        &path,
        r#"
[database]
url = "sqlite:custom.db"
max_connections = 2

[observability]
log_level = "debug"
json = true

[shopping]
multiplicity = "portions"
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().to_string()))?;

    assert_eq!(config.database.max_connections, 2);
    assert_eq!(config.observability.log_level, "debug");
    assert!(config.observability.json);
    assert_eq!(config.shopping.multiplicity, Multiplicity::Portions);
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_defaults_without_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.child("missing.toml");

    let config = Config::load(Some(missing.to_string_lossy().to_string()))?;

    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.shopping.multiplicity, Multiplicity::Distinct);

    Ok(())
}
