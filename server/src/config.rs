use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

/// Runtime settings for one service binary.
///
/// `PORT` falls back to the service's own default, `DATA_DIR` to the working
/// directory. Each service keeps its fixed file name inside `DATA_DIR`.
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn load(default_port: u16) -> Self {
        Self {
            port: try_load("PORT", &default_port.to_string()),
            data_dir: try_load("DATA_DIR", "."),
        }
    }

    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
