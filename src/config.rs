use anyhow::Context;
use std::{env, path::PathBuf, str::FromStr};

const DEFAULT_DATABASE_URL: &str = "sqlite://database.sqlite?mode=rwc";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub upload_dir: PathBuf,
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            port: parse(&lookup, "PORT", DEFAULT_PORT)?,
            max_upload_bytes: parse(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .parse()
            .with_context(|| format!("{key} is not valid: {value:?}")),
        None => Ok(default),
    }
}
