// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct WebhookConfig {
  pub(crate) webhook_url: String,
  pub(crate) timeout: Option<Duration>,
}
