// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::{DiscordClientBuilder, MessageBuilder},
  config::WebhookConfig,
  types::WebhookMessage,
};
use error::Error;
use reqwest::Client;
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct DiscordClient {
  pub(crate) config: WebhookConfig,
  pub(crate) client: Client,
}

impl DiscordClient {
  pub fn builder() -> DiscordClientBuilder {
    DiscordClientBuilder::default()
  }

  pub fn message<'a>(&self) -> MessageBuilder<'a> {
    MessageBuilder::new()
  }

  /// Posts once. Transport failures are returned; a non-success status is
  /// only logged, the webhook response is not otherwise checked.
  #[instrument(skip(self, message), fields(length = message.content.len()))]
  pub(crate) async fn send_message(&self, message: WebhookMessage<'_>) -> Result<(), Error> {
    let response = self
      .client
      .post(&self.config.webhook_url)
      .json(&message)
      .send()
      .await
      .map_err(Error::HttpError)?;

    let status = response.status();
    if status.is_success() {
      debug!("Message sent successfully");
    } else {
      let body = response.text().await.unwrap_or_default();
      warn!("Webhook responded with {}: {}", status, body);
    }

    Ok(())
  }
}
