//! Tests for configuration system

use std::time::Duration;

use portfolio::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_defaults() {
    let config = Config::load(None).expect("Failed to load config");

    // Keys without an unprefixed environment override
    assert_eq!(config.owner.name, "Alex Chen");
    assert_eq!(config.email.send_timeout_secs, 15);
    assert!(config.email.smtp_tls);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("portfolio.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
allowed_origins = ["https://alexchen.dev"]

[email]
send_timeout_secs = 30
from_address = "hello@alexchen.dev"

[owner]
name = "Ada Lovelace"
github_url = "https://github.com/ada"

[logging]
format = "json"
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.allowed_origins, vec!["https://alexchen.dev"]);
    assert_eq!(config.owner.name, "Ada Lovelace");
    assert_eq!(config.logging.format, "json");

    let contact = config.contact();
    assert_eq!(contact.sender_address, "hello@alexchen.dev");
    assert_eq!(contact.github_url, "https://github.com/ada");
    assert_eq!(contact.send_timeout, Duration::from_secs(30));

    Ok(())
}
