#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    TargetUrl,
    TimeoutSecs,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return Config::default(key);
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::TargetUrl => "https://charm.sh/",
            ConfigKey::TimeoutSecs => "10",
        };

        return res.to_string();
    }

    /// Timeout applied to the whole status check.
    pub fn timeout() -> Result<Duration> {
        let secs = Config::get(ConfigKey::TimeoutSecs)
            .parse::<u64>()
            .with_context(|| {
                return format!("{} must be a whole number of seconds", ConfigKey::TimeoutSecs);
            })?;

        return Ok(Duration::from_secs(secs));
    }

    pub fn load() {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        tracing::debug!(
            target_url = Config::get(ConfigKey::TargetUrl),
            timeout_secs = Config::get(ConfigKey::TimeoutSecs),
            "config"
        );
    }
}
