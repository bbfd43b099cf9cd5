use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{DEFAULT_TIMEZONE, MINUTES_PER_DAY};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub calendar: CalendarConfig,
    pub availability: AvailabilityConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Calendar frame used for every blockout comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// IANA (or Windows) timezone identifier.
    pub timezone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityConfig {
    /// Default slot length for day slot enumeration.
    pub slot_minutes: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder preloaded with the default values.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8699)?
            .set_default("calendar.timezone", DEFAULT_TIMEZONE)?
            .set_default("availability.slot_minutes", 30)?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and `config.toml` into `Settings`.
    /// Environment variables use the `SKYHIRE_` prefix and `__` between sections,
    /// e.g. `SKYHIRE_CALENDAR__TIMEZONE`.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(
                config::Environment::with_prefix("SKYHIRE")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks value ranges that deserialization alone cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the default slot length does not evenly divide a day.
    pub fn validate(&self) -> CoreResult<()> {
        let minutes = self.availability.slot_minutes;
        if minutes == 0 || minutes > MINUTES_PER_DAY || !MINUTES_PER_DAY.is_multiple_of(minutes) {
            return Err(CoreError::ConfigError(format!(
                "availability.slot_minutes must divide {MINUTES_PER_DAY}, got {minutes}"
            )));
        }
        if self.calendar.timezone.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "calendar.timezone must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
