// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod config;

pub use crate::config::{AfdcConfig, Config, DiscordConfig, FeedConfig, FilterConfig, OutputConfig};

pub const API_KEY_ENV: &str = "NREL_API_KEY";
pub const WEBHOOK_URL_ENV: &str = "DISCORD_WEBHOOK_URL";
pub const CONFIG_PATH_ENV: &str = "CHARGEFEED_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "chargefeed.toml";
