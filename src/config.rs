// Runtime configuration.
// Base URLs, locale and fallbacks, with overrides from RIFTDEX_* environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, RiftdexError};

pub const DDRAGON_URL: &str = "https://ddragon.leagueoflegends.com";
pub const CDRAGON_RAW_URL: &str = "https://raw.communitydragon.org";
pub const CDRAGON_CDN_URL: &str = "https://cdn.communitydragon.org";
pub const MERAKI_URL: &str = "https://cdn.merakianalytics.com";
pub const DEFAULT_LOCALE: &str = "en_US";
/// Patch reported when the versions list cannot be fetched (Season 2026, patch 1).
pub const FALLBACK_VERSION: &str = "26.1.1";
/// How long the latest version stays cached: 1 hour.
pub const VERSION_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
pub struct Config {
    /// Data Dragon host, without trailing slash.
    pub ddragon_url: String,
    /// Community Dragon raw file host.
    pub cdragon_raw_url: String,
    /// Community Dragon image CDN host.
    pub cdragon_cdn_url: String,
    /// Meraki Analytics host, source of ARAM balance stats.
    pub meraki_url: String,
    /// Data Dragon locale, e.g. `en_US`.
    pub locale: String,
    /// Local skins dataset (`skins_all.json`).
    pub skins_path: PathBuf,
    pub fallback_version: String,
    pub version_ttl: Duration,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ddragon_url: DDRAGON_URL.to_string(),
            cdragon_raw_url: CDRAGON_RAW_URL.to_string(),
            cdragon_cdn_url: CDRAGON_CDN_URL.to_string(),
            meraki_url: MERAKI_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            skins_path: PathBuf::from("data/skins_all.json"),
            fallback_version: FALLBACK_VERSION.to_string(),
            version_ttl: VERSION_TTL,
            request_timeout: Duration::from_secs(15),
        }
    }
}

impl Config {
    /// Build a config from defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from defaults overridden by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("RIFTDEX_DDRAGON_URL") {
            config.ddragon_url = normalize_url("RIFTDEX_DDRAGON_URL", &url)?;
        }
        if let Some(url) = lookup("RIFTDEX_CDRAGON_URL") {
            config.cdragon_raw_url = normalize_url("RIFTDEX_CDRAGON_URL", &url)?;
        }
        if let Some(url) = lookup("RIFTDEX_CDRAGON_CDN_URL") {
            config.cdragon_cdn_url = normalize_url("RIFTDEX_CDRAGON_CDN_URL", &url)?;
        }
        if let Some(url) = lookup("RIFTDEX_MERAKI_URL") {
            config.meraki_url = normalize_url("RIFTDEX_MERAKI_URL", &url)?;
        }
        if let Some(locale) = lookup("RIFTDEX_LOCALE") {
            if locale.trim().is_empty() {
                return Err(RiftdexError::Config("RIFTDEX_LOCALE is empty".to_string()));
            }
            config.locale = locale.trim().to_string();
        }
        if let Some(path) = lookup("RIFTDEX_SKINS_PATH") {
            config.skins_path = PathBuf::from(path);
        }
        if let Some(version) = lookup("RIFTDEX_FALLBACK_VERSION") {
            config.fallback_version = version;
        }

        Ok(config)
    }

    /// Point every remote source at one host. Used with mock servers.
    pub fn with_base_url(mut self, url: &str) -> Self {
        let url = url.trim_end_matches('/').to_string();
        self.ddragon_url = url.clone();
        self.cdragon_raw_url = url.clone();
        self.cdragon_cdn_url = url.clone();
        self.meraki_url = url;
        self
    }
}

/// Require an http(s) URL and strip any trailing slash.
fn normalize_url(name: &str, url: &str) -> Result<String> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(RiftdexError::Config(format!(
            "{} must be an http(s) URL, got {:?}",
            name, url
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}
