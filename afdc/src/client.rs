// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  constants::{LIMIT_ALL, STATUS_ALL},
  models::{api::StationsResponse, station::StationRecord},
};
use async_trait::async_trait;
use config::AfdcConfig;
use error::Error;
use tracing::{debug, error, info, instrument};
use url::Url;

#[async_trait]
pub trait StationSource: Send + Sync {
  async fn fetch_stations(&self) -> Result<Vec<StationRecord>, Error>;
}

#[derive(Debug, Clone)]
pub struct AfdcClient {
  client: reqwest::Client,
  api_key: String,
  base_url: String,
  state: String,
  fuel_type: String,
}

impl AfdcClient {
  pub fn new(config: &AfdcConfig) -> Result<Self, Error> {
    if config.api_key.trim().is_empty() {
      return Err(Error::ConfigError("AFDC API key cannot be empty".into()));
    }

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout() {
      builder = builder.timeout(timeout);
    }

    Ok(Self {
      client: builder.build()?,
      api_key: config.api_key.clone(),
      base_url: config.base_url.clone(),
      state: config.state.clone(),
      fuel_type: config.fuel_type.clone(),
    })
  }

  fn build_api_url(&self) -> Result<Url, Error> {
    Url::parse_with_params(
      &self.base_url,
      &[
        ("api_key", self.api_key.as_str()),
        ("fuel_type", self.fuel_type.as_str()),
        ("state", self.state.as_str()),
        ("status", STATUS_ALL),
        ("limit", LIMIT_ALL),
      ],
    )
    .map_err(Error::from)
  }
}

/// Extracts the station list from a successful response body.
pub fn parse_stations(body: &str) -> Result<Vec<StationRecord>, Error> {
  let response: StationsResponse = serde_json::from_str(body)
    .map_err(|e| Error::ParseError(format!("Failed to parse station list: {}", e)))?;
  Ok(response.fuel_stations)
}

#[async_trait]
impl StationSource for AfdcClient {
  #[instrument(skip(self), fields(state = %self.state, fuel_type = %self.fuel_type))]
  async fn fetch_stations(&self) -> Result<Vec<StationRecord>, Error> {
    let url = self.build_api_url()?;
    debug!("Requesting station catalog from {}", self.base_url);

    let response = self.client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
      let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
      error!("API request failed with status: {}", status);
      return Err(Error::ApiError {
        status: status.as_u16(),
        body,
      });
    }

    let body = response.text().await?;
    let stations = parse_stations(&body)?;
    info!("Downloaded {} stations from {}", stations.len(), self.state);
    Ok(stations)
  }
}
