// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{API_KEY_ENV, WEBHOOK_URL_ENV};
use anyhow::{bail, Context};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::instrument;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub afdc: AfdcConfig,
  pub filter: FilterConfig,
  pub output: OutputConfig,
  pub feed: FeedConfig,
  pub discord: DiscordConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AfdcConfig {
  pub api_key: String,
  pub base_url: String,
  pub state: String,
  pub fuel_type: String,
  pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
  pub zip_prefixes: Vec<String>,
  pub window_days: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
  pub snapshot_path: PathBuf,
  pub feed_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
  pub id: String,
  pub title: String,
  pub link: String,
  pub description: String,
  pub language: String,
  pub station_link_base: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
  pub webhook_url: Option<String>,
  pub hashtags: String,
  pub timeout_secs: Option<u64>,
}

impl Default for AfdcConfig {
  fn default() -> Self {
    Self {
      api_key: String::new(),
      base_url: "https://developer.nrel.gov/api/alt-fuel-stations/v1.json".into(),
      state: "NY".into(),
      fuel_type: "ELEC".into(),
      timeout_secs: None,
    }
  }
}

impl Default for FilterConfig {
  fn default() -> Self {
    Self {
      zip_prefixes: ["110", "111", "115", "117", "118", "119"]
        .into_iter()
        .map(String::from)
        .collect(),
      window_days: 30,
    }
  }
}

impl Default for OutputConfig {
  fn default() -> Self {
    Self {
      snapshot_path: "recent_long_island_ev_stations.json".into(),
      feed_path: "long_island_ev_updates.rss".into(),
    }
  }
}

impl Default for FeedConfig {
  fn default() -> Self {
    Self {
      id: "https://example.com/long-island-ev-updates".into(),
      title: "Long Island EV Charging Updates".into(),
      link: "https://example.com".into(),
      description:
        "Fresh EV chargers in Nassau/Suffolk from AFDC - For Drive Electric Long Island!".into(),
      language: "en".into(),
      station_link_base: "https://afdc.energy.gov/stations/#/".into(),
    }
  }
}

impl Default for DiscordConfig {
  fn default() -> Self {
    Self {
      webhook_url: None,
      hashtags: "#LongIslandEV #DriveElectric".into(),
      timeout_secs: None,
    }
  }
}

impl AfdcConfig {
  pub fn timeout(&self) -> Option<Duration> {
    self.timeout_secs.map(Duration::from_secs)
  }
}

impl DiscordConfig {
  /// Webhook URL, treating an empty or blank value as not configured.
  pub fn webhook_url(&self) -> Option<&str> {
    self
      .webhook_url
      .as_deref()
      .map(str::trim)
      .filter(|url| !url.is_empty())
  }

  pub fn timeout(&self) -> Option<Duration> {
    self.timeout_secs.map(Duration::from_secs)
  }
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let content = fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }

  /// Reads the file if it exists, falls back to defaults otherwise, then
  /// applies secrets from the process environment.
  pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let mut config = if path.exists() {
      Self::from_file(path).with_context(|| format!("Failed to load {}", path.display()))?
    } else {
      tracing::debug!("No config file at {}, using defaults", path.display());
      Self::default()
    };

    config.apply_overrides(|key| std::env::var(key).ok());
    config.validate()?;
    Ok(config)
  }

  pub fn apply_overrides<F>(&mut self, lookup: F)
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(api_key) = lookup(API_KEY_ENV) {
      self.afdc.api_key = api_key;
    }
    if let Some(webhook_url) = lookup(WEBHOOK_URL_ENV) {
      self.discord.webhook_url = Some(webhook_url);
    }
  }

  pub fn validate(&self) -> anyhow::Result<()> {
    if self.afdc.api_key.trim().is_empty() {
      bail!("Missing AFDC API key (set {} or afdc.api_key)", API_KEY_ENV);
    }
    if self.filter.window_days <= 0 {
      bail!("filter.window_days must be positive");
    }
    if self.filter.zip_prefixes.is_empty() {
      bail!("filter.zip_prefixes cannot be empty");
    }
    Ok(())
  }
}
