use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_FOLD_WIDTH, MIN_FOLD_WIDTH};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub vcard: VCardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VCardConfig {
    /// Column budget handed to the line folder.
    pub fold_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `config.toml` and environment variables into a `Settings`.
    /// Environment variables (`MOZVCARD_VCARD__FOLD_WIDTH`, `MOZVCARD_LOGGING__LEVEL`)
    /// take precedence over file values.
    ///
    /// Values are not validated here: a command-line override may replace them.
    /// Call [`Settings::validate`] before using the configured fold width.
    ///
    /// ## Errors
    /// Returns an error if building or deserializing the configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Self::builder()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .add_source(
                config::Environment::with_prefix("MOZVCARD")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from an in-memory TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is malformed or a value has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings = Self::builder()?
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        Ok(settings)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let fold_width = i64::try_from(DEFAULT_FOLD_WIDTH)?;
        Ok(Config::builder()
            .set_default("vcard.fold_width", fold_width)?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Checks invariants serde cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` when the fold width is below the minimum.
    pub fn validate(&self) -> CoreResult<()> {
        if self.vcard.fold_width < MIN_FOLD_WIDTH {
            return Err(CoreError::InvalidConfiguration(format!(
                "vcard.fold_width must be at least {MIN_FOLD_WIDTH} (suggested {DEFAULT_FOLD_WIDTH}), got {}",
                self.vcard.fold_width
            )));
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

    let settings = Settings::load()?;
    tracing::debug!(fold_width = settings.vcard.fold_width, "Settings loaded");
    Ok(settings)
}
