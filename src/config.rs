use std::env;
use std::time::Duration;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub event_buffer_size: usize,
    pub urgent_demo_auto: bool,
    pub urgent_demo_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            http_port: parse_or_default("HTTP_PORT", 3000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            event_buffer_size: positive(
                "EVENT_BUFFER_SIZE",
                parse_or_default("EVENT_BUFFER_SIZE", 1024)?,
            )?,
            urgent_demo_auto: parse_or_default("URGENT_DEMO_AUTO", true)?,
            urgent_demo_delay: Duration::from_secs(parse_or_default("URGENT_DEMO_DELAY_SECS", 5)?),
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn positive(key: &str, value: usize) -> Result<usize, AppError> {
    if value == 0 {
        return Err(AppError::Internal(format!("invalid {key}: must be > 0")));
    }
    Ok(value)
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|err| AppError::Internal(format!("invalid {key}: {err}")))
}
