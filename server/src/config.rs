use anyhow::{Context, Result, anyhow};
use secrecy::SecretString;
use std::{env, path::PathBuf, sync::LazyLock};

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::from_env().expect("invalid configuration"));

#[derive(Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub session_secret: SecretString,
    pub admin_username: String,
    pub admin_password: SecretString,
    pub session_ttl_hours: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            data_dir: env_var("FIELDOPS_DATA_DIR")?.into(),
            session_secret: env_var("FIELDOPS_SESSION_SECRET")?.into(),
            admin_username: env::var("FIELDOPS_ADMIN_USER").unwrap_or_else(|_| "admin".into()),
            admin_password: env_var("FIELDOPS_ADMIN_PASSWORD")?.into(),
            session_ttl_hours: match env::var("FIELDOPS_SESSION_TTL_HOURS") {
                Ok(hours) => hours
                    .parse()
                    .context("FIELDOPS_SESSION_TTL_HOURS must be a number of hours")?,
                Err(_) => 24,
            },
        })
    }
}

fn env_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| anyhow!("missing environment variable: {}", name))
}
