use std::{env, fmt::Display, str::FromStr, time::Duration};

use anyhow::{Context, Result, anyhow};
use tracing::info;
use url::Url;

use crate::handlers::form::FormLimits;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub backend_url: Url,
    pub astrology_timeout: Duration,
    pub carousel_interval: Duration,
    pub theme: Theme,
    pub form_limits: FormLimits,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            host: try_load("SOULBUDDY_HOST", "0.0.0.0")?,
            port: try_load("SOULBUDDY_PORT", "3000")?,
            backend_url: try_load("BACKEND_URL", "http://localhost:5000")?,
            astrology_timeout: Duration::from_millis(try_load("ASTROLOGY_TIMEOUT_MS", "10000")?),
            carousel_interval: Duration::from_millis(try_load("CAROUSEL_INTERVAL_MS", "3000")?),
            theme: try_load("THEME", "light")?,
            form_limits: FormLimits {
                field_bytes: try_load("MAX_FIELD_BYTES", "5242880")?,
                form_bytes: try_load("MAX_FORM_BYTES", "10485760")?,
            },
        })
    }
}

/// Page colour scheme, fixed per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(anyhow!("unknown theme {other:?}, expected light or dark")),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("invalid {key} value {raw:?}"))
}
