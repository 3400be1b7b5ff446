//! Configuration module for environment variables and application settings

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use chrono::Duration;

/// Upper bounds for token lifetimes
pub const MAX_ACCESS_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;
pub const MAX_REFRESH_TOKEN_TTL_DAYS: i64 = 10 * 365;

#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string
    pub db_url: String,
    pub db_max_connections: u32,

    /// HMAC secret for access tokens
    pub jwt_secret: String,

    /// `dev` enables the admin reset endpoint
    pub platform: String,

    pub port: u16,

    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("{} environment variable is required", key))
        };

        let access_ttl_secs: i64 = parse_or(&lookup, "ACCESS_TOKEN_TTL_SECS", 3600)?;
        let refresh_ttl_days: i64 = parse_or(&lookup, "REFRESH_TOKEN_TTL_DAYS", 60)?;

        Ok(Self {
            db_url: required("DB_URL")?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            jwt_secret: required("JWT_SECRET")?,
            platform: lookup("PLATFORM").unwrap_or_default(),
            port: parse_or(&lookup, "PORT", 8080)?,
            access_token_ttl: bounded_ttl(
                "ACCESS_TOKEN_TTL_SECS",
                access_ttl_secs,
                MAX_ACCESS_TOKEN_TTL_SECS,
                Duration::try_seconds,
            )?,
            refresh_token_ttl: bounded_ttl(
                "REFRESH_TOKEN_TTL_DAYS",
                refresh_ttl_days,
                MAX_REFRESH_TOKEN_TTL_DAYS,
                Duration::try_days,
            )?,
        })
    }

    pub fn is_dev(&self) -> bool {
        self.platform == "dev"
    }
}

// 1..=max 범위만 허용
fn bounded_ttl(key: &str, value: i64, max: i64, to_duration: fn(i64) -> Option<Duration>) -> Result<Duration> {
    if value <= 0 || value > max {
        bail!("{} must be between 1 and {}, got {}", key, max, value);
    }
    to_duration(value).ok_or_else(|| anyhow!("{} is out of range: {}", key, value))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        None => Ok(default),
    }
}
