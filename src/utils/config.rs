use dotenv::dotenv;
use std::env;
use std::sync::OnceLock;

use crate::utils::errors::ApiError;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_name: String,
    pub smtp_server: String,
    pub smtp_username: String,
    pub smtp_password: String,
    pub mail_from_name: String,
    pub template_dir: Option<String>,
    pub messages_path: Option<String>,
    pub bind_address: String,
}

fn required(name: &str) -> Result<String, ApiError> {
    env::var(name)
        .map_err(|_| ApiError::InvalidData(format!("{} environment variable must be set", name)))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl AppConfig {

    /// Reads the configuration from the environment (and `.env`, if present).
    pub fn from_env() -> Result<AppConfig, ApiError> {
        dotenv().ok();

        Ok(AppConfig {
            database_url: required("DATABASE_URL")?,
            database_name: optional("DATABASE_NAME").unwrap_or_else(|| "petclinic".to_string()),
            smtp_server: required("SMTP_SERVER")?,
            smtp_username: required("SMTP_USERNAME")?,
            smtp_password: required("SMTP_PASSWORD")?,
            mail_from_name: optional("MAIL_FROM_NAME").unwrap_or_else(|| "Pet Clinic".to_string()),
            template_dir: optional("TEMPLATE_DIR"),
            messages_path: optional("MESSAGES_PATH"),
            bind_address: optional("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
        })
    }

    /// Process-wide configuration, loaded on first successful call.
    pub fn global() -> Result<&'static AppConfig, ApiError> {
        if let Some(config) = CONFIG.get() {
            return Ok(config);
        }
        let config = Self::from_env()?;
        Ok(CONFIG.get_or_init(|| config))
    }
}
