use std::{net::SocketAddr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

/// Fallback auction window when `AUCTION_DURATION` is unset or malformed.
pub const DEFAULT_AUCTION_DURATION: Duration = Duration::from_secs(24 * 60 * 60);
/// Fallback sweep period when `AUCTION_SWEEP_INTERVAL` is unset or malformed.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub const AUCTION_DURATION_VAR: &str = "AUCTION_DURATION";
pub const SWEEP_INTERVAL_VAR: &str = "AUCTION_SWEEP_INTERVAL";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// How long an auction stays Active after creation. Resolved once at startup.
    pub auction_duration: Duration,
    /// Period of the expiry sweep.
    pub sweep_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: bind_address
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddress {
                    value: bind_address.clone(),
                    source,
                })?,
            auction_duration: resolve_auction_duration(
                std::env::var(AUCTION_DURATION_VAR).ok().as_deref(),
            ),
            sweep_interval: resolve_duration(
                SWEEP_INTERVAL_VAR,
                std::env::var(SWEEP_INTERVAL_VAR).ok().as_deref(),
                DEFAULT_SWEEP_INTERVAL,
            ),
        })
    }
}

/// Resolves the auction active window from a raw `AUCTION_DURATION` value.
///
/// Never fails: an absent or malformed value yields [`DEFAULT_AUCTION_DURATION`].
pub fn resolve_auction_duration(raw: Option<&str>) -> Duration {
    resolve_duration(AUCTION_DURATION_VAR, raw, DEFAULT_AUCTION_DURATION)
}

/// Resolves a duration setting, falling back to `default` when the value is absent or
/// cannot be parsed. A malformed value is logged as a warning; absence is not.
///
/// # Arguments
/// - `var` - Name of the setting, used in diagnostics
/// - `raw` - Raw value from the configuration source, if any
/// - `default` - Value returned on absence or parse failure
pub fn resolve_duration(var: &str, raw: Option<&str>, default: Duration) -> Duration {
    let Some(raw) = raw else {
        tracing::debug!("{} not set, using default of {:?}", var, default);
        return default;
    };

    match parse_duration(var, raw) {
        Ok(duration) => duration,
        Err(err) => {
            tracing::warn!("{}; falling back to {:?}", err, default);
            default
        }
    }
}

/// Parses a duration literal such as `"24h"`, `"1s"` or `"1h 30m"`.
///
/// # Returns
/// - `Ok(Duration)` - Parsed, non-zero duration
/// - `Err(ConfigError::InvalidDuration)` - Value is not a duration literal
/// - `Err(ConfigError::ZeroDuration)` - Value parsed to zero
fn parse_duration(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    let duration =
        humantime::parse_duration(raw.trim()).map_err(|source| ConfigError::InvalidDuration {
            var: var.to_string(),
            value: raw.to_string(),
            source,
        })?;

    if duration.is_zero() {
        return Err(ConfigError::ZeroDuration(var.to_string()));
    }

    Ok(duration)
}
