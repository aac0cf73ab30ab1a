use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_CODE_LENGTH: &str = "5";
const DEFAULT_CODE_EXPIRY: &str = "24";
const DEFAULT_CODE_EXPIRY_UNIT: &str = "HOURS";
/// Hourly, at the top of the hour.
const DEFAULT_CODE_SWEEP_SCHEDULE: &str = "0 0 * * * *";
const DEFAULT_EVENT_SOURCE: &str = "cdcp-subscriptions";

/// Confirmation codes are stored in a column sized for this many digits.
pub const MAX_CODE_LENGTH: usize = 8;

pub struct Config {
    pub database_url: String,
    pub server_address: String,

    pub code: CodeSettings,
    pub code_sweep_schedule: String,

    pub event_source: String,
}

/// Length and lifetime of newly issued confirmation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSettings {
    /// Number of decimal digits, between 1 and `MAX_CODE_LENGTH`.
    pub length: usize,
    /// Time from creation until a code expires. Always positive.
    pub expiry: Duration,
}

impl Default for CodeSettings {
    fn default() -> Self {
        Self {
            length: 5,
            expiry: Duration::hours(24),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let code = CodeSettings {
            length: parse_code_length(&env_or(
                "CONFIRMATION_CODE_LENGTH",
                DEFAULT_CODE_LENGTH,
            ))?,
            expiry: parse_expiry(
                &env_or("CONFIRMATION_CODE_EXPIRY", DEFAULT_CODE_EXPIRY),
                &env_or("CONFIRMATION_CODE_EXPIRY_UNIT", DEFAULT_CODE_EXPIRY_UNIT),
            )?,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_address: env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            code,
            code_sweep_schedule: env_or("CODE_SWEEP_SCHEDULE", DEFAULT_CODE_SWEEP_SCHEDULE),
            event_source: env_or("EVENT_SOURCE", DEFAULT_EVENT_SOURCE),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn invalid(name: &str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Parses the confirmation code length, which must be within `1..=MAX_CODE_LENGTH`.
fn parse_code_length(value: &str) -> Result<usize, ConfigError> {
    let length: usize = value
        .trim()
        .parse()
        .map_err(|_| invalid("CONFIRMATION_CODE_LENGTH", value, "not an integer"))?;

    if !(1..=MAX_CODE_LENGTH).contains(&length) {
        return Err(invalid(
            "CONFIRMATION_CODE_LENGTH",
            value,
            format!("must be between 1 and {}", MAX_CODE_LENGTH),
        ));
    }

    Ok(length)
}

/// Parses a (value, unit) expiry pair such as `24` / `HOURS`.
///
/// Units are case-insensitive: `SECONDS`, `MINUTES`, `HOURS` or `DAYS`.
fn parse_expiry(value: &str, unit: &str) -> Result<Duration, ConfigError> {
    let amount: i64 = value
        .trim()
        .parse()
        .map_err(|_| invalid("CONFIRMATION_CODE_EXPIRY", value, "not an integer"))?;

    if amount <= 0 {
        return Err(invalid("CONFIRMATION_CODE_EXPIRY", value, "must be positive"));
    }

    let duration = match unit.trim().to_ascii_uppercase().as_str() {
        "SECONDS" => Duration::try_seconds(amount),
        "MINUTES" => Duration::try_minutes(amount),
        "HOURS" => Duration::try_hours(amount),
        "DAYS" => Duration::try_days(amount),
        _ => {
            return Err(invalid(
                "CONFIRMATION_CODE_EXPIRY_UNIT",
                unit,
                "expected SECONDS, MINUTES, HOURS or DAYS",
            ))
        }
    };

    duration.ok_or_else(|| invalid("CONFIRMATION_CODE_EXPIRY", value, "out of range"))
}
