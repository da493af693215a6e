use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::OPEN_ENDED_PERIOD_CAP;
use crate::error::CoreError;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub schedule: ScheduleConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Maximum number of recurrence periods expanded per request.
    pub period_cap: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("schedule.period_cap", u64::try_from(OPEN_ENDED_PERIOD_CAP)?)?
            .set_default("logging.level", "info")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    if settings.schedule.period_cap == 0 {
        return Err(
            CoreError::InvalidConfiguration("schedule.period_cap must be positive".into()).into(),
        );
    }
    Ok(settings)
}
