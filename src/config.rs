use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Каталог с картинками платьев по умолчанию
pub const DEFAULT_ASSETS_DIR: &str = "Files";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            telegram_token: lookup("TELEGRAM_BOT_TOKEN")
                .context("TELEGRAM_BOT_TOKEN environment variable is required")?,
            assets_dir: lookup("ASSETS_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn token_is_required() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn assets_dir_defaults_to_files() {
        let config =
            Config::from_lookup(lookup_from(&[("TELEGRAM_BOT_TOKEN", "123:abc")])).unwrap();
        assert_eq!(config.telegram_token, "123:abc");
        assert_eq!(config.assets_dir, PathBuf::from("Files"));
    }

    #[test]
    fn assets_dir_override() {
        let config = Config::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("ASSETS_DIR", "/srv/dresses"),
        ]))
        .unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("/srv/dresses"));

        let blank = Config::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("ASSETS_DIR", "  "),
        ]))
        .unwrap();
        assert_eq!(blank.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
    }
}
