use config::{AppConfig, ConfigError, LogFormat};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(url: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[database]
url = "{}"
min_connections = 1
max_connections = 2
connection_timeout_seconds = 10
idle_timeout_seconds = 60
max_lifetime_seconds = 600

[logging]
level = "warn"
format = "json"
"#,
        url
    )
    .unwrap();
    file
}

fn clear_env() {
    std::env::remove_var("TRAVELSTORE_CONFIG");
    std::env::remove_var("DATABASE_URL");
}

#[test]
#[serial]
fn load_reads_the_file_named_by_env() {
    clear_env();
    let file = write_config("sqlite://from-file.db");
    std::env::set_var("TRAVELSTORE_CONFIG", file.path());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.database.url, "sqlite://from-file.db");
    assert_eq!(config.database.max_connections, 2);
    assert_eq!(config.logging.format, LogFormat::Json);

    clear_env();
}

#[test]
#[serial]
fn database_url_overrides_the_file() {
    clear_env();
    let file = write_config("sqlite://from-file.db");
    std::env::set_var("TRAVELSTORE_CONFIG", file.path());
    std::env::set_var("DATABASE_URL", "sqlite::memory:");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.database.url, "sqlite::memory:");

    clear_env();
}

#[test]
#[serial]
fn missing_config_file_is_an_io_error() {
    clear_env();
    std::env::set_var("TRAVELSTORE_CONFIG", "/nonexistent/travelstore.toml");

    let err = AppConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));

    clear_env();
}

#[test]
fn from_file_validates() {
    let file = write_config("");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}
