use std::string::ToString;

use config::{Config, ConfigError};
use log::LevelFilter;
use once_cell::sync::Lazy;
use rocket::form::validate::Contains;
use rocket::serde::Deserialize;

/// config properties for share links
#[derive(Deserialize, Clone)]
pub struct ShareConfig {
    /// the host share urls are built against, without a trailing slash
    pub host: String,
}

#[derive(Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    pub fn level_filter(&self) -> LevelFilter {
        match self.level.to_ascii_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            other => {
                log::warn!("Unknown log level {other} in config file, defaulting to info");
                LevelFilter::Info
            }
        }
    }
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone)]
pub struct CloudDriveConfig {
    pub share: ShareConfig,
    pub logging: LoggingConfig,
}

/// Parses the config file located at ./CloudDrive.toml, if it exists.
/// If this fails to parse the file, the application will panic
pub fn parse_config() -> CloudDriveConfig {
    let builder = Config::builder()
        .add_source(config::File::with_name("./CloudDrive.toml"))
        .build();
    // some errors are fine, such as not found
    if let Err(ConfigError::Foreign(e)) = builder {
        let message = e.to_string();
        if message.contains("not found") {
            log::warn!("No config file found. Continuing startup...");
            return CD_CONFIG_DEFAULT.clone();
        }
        panic!("Failed to parse config file. Exception is {e}");
        // basically everything else is unrecoverable, though
    } else if let Err(e) = builder {
        log::error!("Failed to parse config file. Exception is {e}");
        panic!("Failed to parse config file. Exception is {e}");
    }
    let settings = builder.unwrap();
    settings
        .try_deserialize()
        .unwrap_or(CD_CONFIG_DEFAULT.clone())
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static CLOUD_DRIVE_CONFIG: Lazy<CloudDriveConfig> = Lazy::new(parse_config);
static CD_CONFIG_DEFAULT: Lazy<CloudDriveConfig> = Lazy::new(|| CloudDriveConfig {
    share: ShareConfig {
        host: "https://clouddrive.app".to_string(),
    },
    logging: LoggingConfig {
        level: "info".to_string(),
    },
});
