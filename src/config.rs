use std::{env, time::Duration};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use portfolio_contact::ContactConfig;
use portfolio_notification::SmtpConfig;
use portfolio_shared::contact::is_valid_email;
use serde::Deserialize;

const FALLBACK_SENDER: &str = "noreply@portfolio.com";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub email: EmailConfig,
    pub owner: OwnerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Empty means any origin may call the API
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_tls: bool,
    /// Inbox receiving contact notifications
    pub recipient_address: String,
    /// Envelope sender; falls back to the SMTP user
    #[serde(default)]
    pub from_address: String,
    pub send_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OwnerConfig {
    pub name: String,
    pub github_url: String,
    pub linkedin_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Unprefixed variables (PORT, SMTP_HOST, SMTP_PORT, SMTP_USER,
    ///    SMTP_PASSWORD, RECIPIENT_EMAIL)
    /// 2. Prefixed variables (PORTFOLIO__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("email.smtp_host", "smtp.ethereal.email")?
            .set_default("email.smtp_port", 587)?
            .set_default("email.smtp_username", "your-email@example.com")?
            .set_default("email.smtp_password", "your-password")?
            .set_default("email.smtp_tls", true)?
            .set_default("email.recipient_address", "alex.chen@example.com")?
            .set_default("email.send_timeout_secs", 15)?
            .set_default("owner.name", "Alex Chen")?
            .set_default("owner.github_url", "https://github.com/alexchen")?
            .set_default("owner.linkedin_url", "https://linkedin.com/in/alexchen")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional - ignore if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.allowed_origins")
                .try_parsing(true),
        );

        let legacy = [
            ("PORT", "server.port"),
            ("SMTP_HOST", "email.smtp_host"),
            ("SMTP_PORT", "email.smtp_port"),
            ("SMTP_USER", "email.smtp_username"),
            ("SMTP_PASSWORD", "email.smtp_password"),
            ("RECIPIENT_EMAIL", "email.recipient_address"),
        ];

        for (var, key) in legacy {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.smtp_host.is_empty() {
            return Err("SMTP host must not be empty".to_string());
        }
        if self.email.send_timeout_secs == 0 {
            return Err("Email send timeout must be at least 1 second".to_string());
        }
        if !is_valid_email(&self.email.recipient_address) {
            return Err(format!(
                "Invalid recipient address: {}",
                self.email.recipient_address
            ));
        }
        Ok(())
    }

    pub fn smtp(&self) -> SmtpConfig {
        SmtpConfig {
            smtp_host: self.email.smtp_host.to_owned(),
            smtp_port: self.email.smtp_port,
            smtp_username: self.email.smtp_username.to_owned(),
            smtp_password: self.email.smtp_password.to_owned(),
            smtp_tls: self.email.smtp_tls,
            timeout_secs: self.email.send_timeout_secs,
        }
    }

    pub fn contact(&self) -> ContactConfig {
        ContactConfig {
            recipient_address: self.email.recipient_address.to_owned(),
            sender_address: self.sender_address().to_owned(),
            owner_name: self.owner.name.to_owned(),
            github_url: self.owner.github_url.to_owned(),
            linkedin_url: self.owner.linkedin_url.to_owned(),
            send_timeout: Duration::from_secs(self.email.send_timeout_secs),
        }
    }

    fn sender_address(&self) -> &str {
        [&self.email.from_address, &self.email.smtp_username]
            .into_iter()
            .find(|address| !address.is_empty())
            .map(String::as_str)
            .unwrap_or(FALLBACK_SENDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                allowed_origins: vec![],
            },
            email: EmailConfig {
                smtp_host: "smtp.ethereal.email".to_string(),
                smtp_port: 587,
                smtp_username: "portfolio@example.com".to_string(),
                smtp_password: "secret".to_string(),
                smtp_tls: true,
                recipient_address: "alex.chen@example.com".to_string(),
                from_address: String::new(),
                send_timeout_secs: 15,
            },
            owner: OwnerConfig {
                name: "Alex Chen".to_string(),
                github_url: "https://github.com/alexchen".to_string(),
                linkedin_url: "https://linkedin.com/in/alexchen".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_smtp_host() {
        let mut config = config();
        config.email.smtp_host = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = config();
        config.email.send_timeout_secs = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_recipient() {
        let mut config = config();
        config.email.recipient_address = "alex".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sender_falls_back_to_smtp_user() {
        let mut config = config();
        assert_eq!(config.contact().sender_address, "portfolio@example.com");

        config.email.from_address = "hello@alexchen.dev".to_string();
        assert_eq!(config.contact().sender_address, "hello@alexchen.dev");

        config.email.from_address = String::new();
        config.email.smtp_username = String::new();
        assert_eq!(config.contact().sender_address, "noreply@portfolio.com");
    }

    #[test]
    fn test_contact_and_smtp_views() {
        let config = config();

        let contact = config.contact();
        assert_eq!(contact.recipient_address, "alex.chen@example.com");
        assert_eq!(contact.owner_name, "Alex Chen");
        assert_eq!(contact.send_timeout, Duration::from_secs(15));

        let smtp = config.smtp();
        assert_eq!(smtp.smtp_port, 587);
        assert!(smtp.smtp_tls);
        assert_eq!(smtp.timeout_secs, 15);
    }
}
