use std::{collections::HashMap, fs};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub api_url: String,
    pub cache_database_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8080".into(),
            cache_database_url: "sqlite://./data/roster_cache.db".into(),
        }
    }
}

/// Defaults, overridden by an optional `roster.toml`, overridden by env.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("roster.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("api_url") {
                settings.api_url = v.clone();
            }
            if let Some(v) = file_cfg.get("cache_database_url") {
                settings.cache_database_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("APP__API_URL") {
        settings.api_url = v;
    }
    if let Ok(v) = std::env::var("APP__CACHE_DATABASE_URL") {
        settings.cache_database_url = v;
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_dev() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, "http://127.0.0.1:8080");
        assert_eq!(settings.cache_database_url, "sqlite://./data/roster_cache.db");
    }

    #[test]
    fn file_values_parse_as_string_map() {
        let raw = "api_url = \"http://roster.internal\"\ncache_database_url = \"sqlite://./tmp/c.db\"\n";
        let file_cfg = toml::from_str::<HashMap<String, String>>(raw).expect("parse");
        assert_eq!(
            file_cfg.get("api_url").map(String::as_str),
            Some("http://roster.internal")
        );
        assert_eq!(
            file_cfg.get("cache_database_url").map(String::as_str),
            Some("sqlite://./tmp/c.db")
        );
    }
}
