// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::DiscordClient,
  config::WebhookConfig,
  types::WebhookMessage,
};
use error::Error;

#[derive(Default)]
pub struct MessageBuilder<'a> {
  pub(crate) content: Option<&'a str>,
}

impl<'a> MessageBuilder<'a> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn content(mut self, content: &'a str) -> Self {
    self.content = Some(content);
    self
  }

  pub async fn send(self, client: &DiscordClient) -> Result<(), Error> {
    let content = self
      .content
      .filter(|text| !text.trim().is_empty())
      .ok_or_else(|| Error::ConfigError("Message content is required".into()))?;

    client.send_message(WebhookMessage { content }).await
  }
}

#[derive(Default)]
pub struct DiscordClientBuilder {
  pub(crate) config: WebhookConfig,
}

impl DiscordClientBuilder {
  pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
    self.config.webhook_url = url.into();
    self
  }

  pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
    self.config.timeout = Some(timeout);
    self
  }

  pub fn build(self) -> Result<DiscordClient, Error> {
    if self.config.webhook_url.trim().is_empty() {
      return Err(Error::ConfigError("Webhook URL cannot be empty".into()));
    }
    reqwest::Url::parse(&self.config.webhook_url)?;

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = self.config.timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(Error::HttpError)?;

    Ok(DiscordClient {
      config: self.config,
      client,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client() -> DiscordClient {
    DiscordClient::builder()
      .webhook_url("http://127.0.0.1:9/api/webhooks/1/token")
      .build()
      .unwrap()
  }

  #[test]
  fn build_requires_a_valid_url() {
    assert!(matches!(
      DiscordClient::builder().build(),
      Err(Error::ConfigError(_))
    ));
    assert!(matches!(
      DiscordClient::builder().webhook_url("discord").build(),
      Err(Error::UrlError(_))
    ));
  }

  #[tokio::test]
  async fn empty_content_is_rejected_before_sending() {
    let client = client();
    let result = client.message().content("  ").send(&client).await;
    assert!(matches!(result, Err(Error::ConfigError(_))));

    let result = client.message().send(&client).await;
    assert!(matches!(result, Err(Error::ConfigError(_))));
  }
}
