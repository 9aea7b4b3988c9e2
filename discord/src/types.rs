// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct WebhookMessage<'a> {
  pub content: &'a str,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn payload_has_only_content() {
    let body = serde_json::to_value(WebhookMessage { content: "hi\n**there**" }).unwrap();
    assert_eq!(body, serde_json::json!({"content": "hi\n**there**"}));
  }
}
