// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod builders;
mod client;
mod config;
mod notifier;
mod types;

pub use crate::{
  builders::{DiscordClientBuilder, MessageBuilder},
  client::DiscordClient,
  notifier::{format_station_alert, DiscordNotifier, StationNotifier},
};
