//! Tests for configuration system

use folio::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("folio.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 9000

[smtp]
host = "smtp.example.com"
port = 465
secure = true
username = "relay@example.com"
password = "secret"

[contact]
email = "owner@example.com"
path = "/api/contact"
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.to_str().unwrap().to_string())).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.smtp.host, "smtp.example.com");
    assert_eq!(config.smtp.port, 465);
    assert!(config.smtp.secure);
    assert_eq!(config.smtp.timeout_secs, 30);
    assert_eq!(config.contact.recipient(&config.smtp), "owner@example.com");
    assert_eq!(config.contact.path, "/api/contact");
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_without_smtp_section_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("folio.toml");
    std::fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 8888\n").unwrap();

    let config = Config::load(Some(path.to_str().unwrap().to_string())).unwrap();

    assert_eq!(config.smtp.port, 587);
    assert!(!config.smtp.secure);
    assert_eq!(config.contact.path, "/contact-relay");
    assert!(config.validate().is_err());
}
