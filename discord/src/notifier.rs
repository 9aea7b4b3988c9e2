// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::client::DiscordClient;
use afdc::StationSummary;
use async_trait::async_trait;
use error::Error;
use tracing::instrument;

#[async_trait]
pub trait StationNotifier: Send + Sync {
  async fn notify(&self, station: &StationSummary) -> Result<(), Error>;
}

pub struct DiscordNotifier {
  client: DiscordClient,
  hashtags: String,
}

impl DiscordNotifier {
  pub fn new(client: DiscordClient, hashtags: impl Into<String>) -> Self {
    Self {
      client,
      hashtags: hashtags.into(),
    }
  }
}

pub fn format_station_alert(station: &StationSummary, hashtags: &str) -> String {
  let mut message = format!(
    "🚨 New EV Charger Alert! ⚡\n\
     **{}**\n\
     📍 {}\n\
     🔌 Connectors: {}\n\
     🗓 Added/Updated: {}\n\
     🔗 {}",
    station.name, station.address, station.connectors, station.date_used, station.link
  );
  if !hashtags.trim().is_empty() {
    message.push('\n');
    message.push_str(hashtags);
  }
  message
}

#[async_trait]
impl StationNotifier for DiscordNotifier {
  #[instrument(skip(self, station), fields(station = %station.id))]
  async fn notify(&self, station: &StationSummary) -> Result<(), Error> {
    let text = format_station_alert(station, &self.hashtags);
    self.client.message().content(&text).send(&self.client).await
  }
}
