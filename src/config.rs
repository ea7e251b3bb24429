use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_API_BASE_URL: &str = "https://orthocal.info/api";
pub const WEBHOOK_URL_ENV: &str = "DISCORD_WEBHOOK_URL";
pub const CALENDAR_TYPE_ENV: &str = "CALENDAR_TYPE";

/// Which calendar orthocal should compute the day for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarVariant {
    #[default]
    Gregorian,
    Julian,
}

impl CalendarVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            CalendarVariant::Gregorian => "gregorian",
            CalendarVariant::Julian => "julian",
        }
    }
}

impl fmt::Display for CalendarVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" => Ok(CalendarVariant::Gregorian),
            "julian" => Ok(CalendarVariant::Julian),
            _ => Err(ConfigError::InvalidCalendarType(s.to_string())),
        }
    }
}

/// On-disk shape of the optional config file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    webhook_url: Option<String>,
    calendar_type: Option<String>,
    api_base_url: Option<String>,
}

/// Settings for one run, resolved once at startup and passed around by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub webhook_url: Option<String>,
    pub calendar_type: CalendarVariant,
    pub api_base_url: String,
}

impl Config {
    /// Read `path` (if it exists) and overlay the process environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "No config file found, using environment variables");
                None
            }
            Err(source) => {
                return Err(ConfigError::Io { path: path.to_path_buf(), source });
            }
        };
        Self::from_sources(contents.as_deref(), |key| std::env::var(key).ok())
    }

    /// Merge file contents with environment lookups; environment wins.
    /// A malformed file is logged and ignored.
    pub fn from_sources<F>(file_contents: Option<&str>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match file_contents.map(serde_json::from_str::<ConfigFile>) {
            Some(Ok(file)) => file,
            Some(Err(e)) => {
                warn!(error = %e, "Invalid config file; ignoring it");
                ConfigFile::default()
            }
            None => ConfigFile::default(),
        };

        let webhook_url = env(WEBHOOK_URL_ENV)
            .or(file.webhook_url)
            .filter(|url| !url.trim().is_empty());
        let calendar_type = match env(CALENDAR_TYPE_ENV).or(file.calendar_type) {
            Some(raw) => raw.parse()?,
            None => CalendarVariant::default(),
        };
        let api_base_url = file
            .api_base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Config { webhook_url, calendar_type, api_base_url })
    }

    /// The webhook URL, or the fatal error a posting run reports without one.
    pub fn require_webhook_url(&self) -> Result<&str, ConfigError> {
        self.webhook_url.as_deref().ok_or(ConfigError::MissingWebhookUrl)
    }
}
