use serde::Deserialize;
use std::env;

pub(crate) fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_WEATHER_LOCATION: &str = "seoul";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub weather: WeatherConfig,
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub auth_token: Option<String>,
    pub local_path: Option<String>,
}

/// OpenWeatherMap current-weather settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Value of the `q` query parameter, e.g. `seoul`.
    pub location: String,
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            location: DEFAULT_WEATHER_LOCATION.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Daily weather refresh job.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    pub enabled: bool,
    /// Local hour of day (0-23) at which today's weather is pre-fetched.
    pub refresh_hour: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            refresh_hour: 1,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let refresh_hour: u32 = parse_env_or("WEATHER_REFRESH_HOUR", 1);
        let refresh_hour = if refresh_hour > 23 {
            tracing::warn!(
                "WEATHER_REFRESH_HOUR must be between 0 and 23, got {}. Using 1.",
                refresh_hour
            );
            1
        } else {
            refresh_hour
        };

        Self {
            server: ServerConfig {
                host: env::var("DIARY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("DIARY_PORT", 8080),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "file:diary.db".to_string()),
                auth_token: env::var("DATABASE_AUTH_TOKEN").ok(),
                local_path: env::var("DATABASE_LOCAL_PATH").ok(),
            },
            weather: WeatherConfig {
                api_key: env::var("OPENWEATHERMAP_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                base_url: env::var("WEATHER_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_WEATHER_BASE_URL.to_string()),
                location: env::var("WEATHER_LOCATION")
                    .unwrap_or_else(|_| DEFAULT_WEATHER_LOCATION.to_string()),
                timeout_secs: parse_env_or("WEATHER_TIMEOUT", 10),
            },
            scheduler: SchedulerConfig {
                enabled: parse_env_or("WEATHER_REFRESH_ENABLED", true),
                refresh_hour,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
