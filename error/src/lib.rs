// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("API error: {status} - {body}")]
  ApiError { status: u16, body: String },
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("HTTP error: {0}")]
  HttpError(#[from] reqwest::Error),
  #[error("JSON error: {0}")]
  JsonError(#[from] serde_json::Error),
  #[error("Invalid URL: {0}")]
  UrlError(#[from] url::ParseError),
  #[error("Failed to parse response: {0}")]
  ParseError(String),
  #[error("Station {station} is missing required field `{field}`")]
  MissingField {
    station: String,
    field: &'static str,
  },
}
