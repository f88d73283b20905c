use crate::scheduling::constants::*;
use crate::scheduling::hours::ScheduleConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub port: u16,
    pub schedule: ScheduleConfig,
    pub operatories_csv: Option<PathBuf>,
    pub appointments_csv: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let parse = |key: &str, default| parse_var(&lookup, key, default);

        let schedule = ScheduleConfig::new(
            parse("CHAIRTIME_OPEN_HOUR", DEFAULT_OPEN_HOUR)?,
            parse("CHAIRTIME_CLOSE_HOUR", DEFAULT_CLOSE_HOUR)?,
            parse("CHAIRTIME_MIN_GAP_MINUTES", DEFAULT_MIN_GAP_MINUTES)?,
            parse("CHAIRTIME_LOOKAHEAD_DAYS", DEFAULT_LOOKAHEAD_DAYS)?,
            parse_var(&lookup, "CHAIRTIME_GAP_LIMIT", DEFAULT_GAP_LIMIT)?,
        )
        .context("Invalid schedule configuration")?;

        Ok(AppConfig {
            bind: lookup("CHAIRTIME_BIND").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_var(&lookup, "CHAIRTIME_PORT", 8080)?,
            schedule,
            operatories_csv: lookup("CHAIRTIME_OPERATORIES_CSV").map(PathBuf::from),
            appointments_csv: lookup("CHAIRTIME_APPOINTMENTS_CSV").map(PathBuf::from),
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key}={raw} is not valid")),
        None => Ok(default),
    }
}
