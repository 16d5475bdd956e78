use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    /// Empty string means console logging only.
    pub log_file: String,
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    let s = Config::builder()
        // Set defaults
        .set_default("log_level", "info")?
        .set_default("log_file", "")?
        // Add configuration from a file, when one is present
        .add_source(File::with_name("config/config.yaml").required(false))
        // Add configuration from environment variables
        .add_source(Environment::with_prefix("ORDERFIRE"))
        .build()?;

    s.try_deserialize()
}
